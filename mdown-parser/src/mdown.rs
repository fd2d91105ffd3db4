//! Main module for mdown library functionality

pub mod ast;
pub mod extensions;
pub mod formats;
