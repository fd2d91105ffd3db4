//! Layering user files over the embedded defaults

use mdown_config::Loader;
use mdown_parser::mdown::extensions::{resolve, Extensions};
use std::fs;
use tempfile::tempdir;

#[test]
fn user_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdown.toml");
    fs::write(
        &path,
        "[extensions]\ndirectives = [\"-Eall\", \"+Etables\"]\n\n[convert]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();

    assert_eq!(config.convert.format, "json");
    // Untouched keys keep their defaults
    assert_eq!(config.logging.level, "info");

    let mask = resolve(Extensions::all(), &config.extensions.directives());
    assert_eq!(mask, Extensions::TABLES);
}

#[test]
fn missing_required_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
    assert!(result.is_err());
}

#[test]
fn overrides_win_over_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdown.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

    let config = Loader::new()
        .with_file(&path)
        .set_override("logging.level", "debug")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.logging.level, "debug");
}
