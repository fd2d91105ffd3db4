//! Default registry end to end

use mdown_babel::{FormatError, FormatRegistry};
use mdown_parser::mdown::extensions::Extensions;

const SOURCE: &str = "# Notes\n\n- one\n- two\n";

#[test]
fn test_every_default_format_converts() {
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let output = registry
            .convert(SOURCE, Extensions::all(), &name)
            .unwrap_or_else(|err| panic!("{} failed: {}", name, err));
        assert!(!output.is_empty(), "{} produced nothing", name);
    }
}

#[test]
fn test_default_extensions() {
    let registry = FormatRegistry::default();
    let extensions: Vec<_> = registry
        .list_formats()
        .iter()
        .map(|name| registry.get(name).unwrap().file_extension().to_string())
        .collect();
    assert_eq!(extensions, vec!["html", "json", "tree"]);
}

#[test]
fn test_html_output() {
    let html = FormatRegistry::default()
        .convert(SOURCE, Extensions::empty(), "html")
        .unwrap();
    assert_eq!(
        html,
        "<h1>Notes</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
    );
}

#[test]
fn test_treeviz_output() {
    let tree = FormatRegistry::default()
        .convert(SOURCE, Extensions::empty(), "treeviz")
        .unwrap();
    insta::assert_snapshot!(tree.trim_end(), @r"
    ⧉ Document (2 blocks)
    ├─ § h1 Notes
    │ └─ ◦ Notes
    └─ ☰ 2 items (bullet)
      ├─ • one
      │ └─ ¶ one
      │   └─ ◦ one
      └─ • two
        └─ ¶ two
          └─ ◦ two
    ");
}

#[test]
fn test_unknown_format() {
    let result = FormatRegistry::default().convert(SOURCE, Extensions::all(), "pdf");
    assert!(matches!(result, Err(FormatError::FormatNotFound(name)) if name == "pdf"));
}
