//! HTML rendering under different extension masks
//!
//! Each extension is checked both ways: the construct renders when the bit is set and falls back
//! to plain CommonMark when it is cleared.

use mdown_babel::format::Format;
use mdown_babel::formats::HtmlFormat;
use mdown_parser::mdown::extensions::{resolve, Directive, Extensions};
use rstest::rstest;

fn render(source: &str, extensions: Extensions) -> String {
    HtmlFormat
        .convert(source, extensions)
        .expect("html rendering should not fail")
}

#[rstest]
#[case::tables("| a | b |\n|---|---|\n| 1 | 2 |\n", Extensions::TABLES, "<table>")]
#[case::strikethrough("~~gone~~\n", Extensions::STRIKETHROUGH, "<del>gone</del>")]
#[case::autolinks("see https://example.com\n", Extensions::AUTOLINKS, "<a href=\"https://example.com\">")]
#[case::hardwraps("one\ntwo\n", Extensions::HARDWRAPS, "<br />")]
#[case::tasklistitems("- [x] done\n", Extensions::TASKLISTITEMS, "type=\"checkbox\"")]
#[case::footnotes("a[^1]\n\n[^1]: note\n", Extensions::FOOTNOTES, "class=\"footnotes\"")]
#[case::superscript("e = mc^2^\n", Extensions::SUPERSCRIPT, "<sup>2</sup>")]
#[case::anchorlinks("# Title\n", Extensions::ANCHORLINKS, "id=\"title\"")]
#[case::typography("wait...\n", Extensions::SMARTS | Extensions::QUOTES, "…")]
#[case::html_blocks("<div>raw</div>\n", Extensions::HTML_BLOCKS, "<div>raw</div>")]
#[case::inline_html("a <b>b</b> c\n", Extensions::INLINE_HTML, "<b>b</b>")]
fn test_extension_toggles_construct(
    #[case] source: &str,
    #[case] bit: Extensions,
    #[case] marker: &str,
) {
    assert!(
        render(source, bit).contains(marker),
        "{:?} should produce {}",
        bit,
        marker
    );
    assert!(
        !render(source, Extensions::all() - bit).contains(marker),
        "without {:?} there should be no {}",
        bit,
        marker
    );
}

const RAW_HTML: &str = "<div>raw</div>\n\na <b>b</b> c\n";

#[test]
fn test_default_mask_keeps_raw_html() {
    let html = render(RAW_HTML, Extensions::default());
    assert!(html.contains("<div>raw</div>"));
    assert!(html.contains("<b>b</b>"));
}

#[test]
fn test_cleared_html_blocks_drops_blocks_only() {
    let mask = resolve(Extensions::all(), &[Directive::disable("html_blocks")]);
    let html = render(RAW_HTML, mask);
    assert!(!html.contains("<div>"));
    assert!(html.contains("<b>b</b>"));
}

#[test]
fn test_cleared_inline_html_drops_inline_only() {
    let mask = resolve(Extensions::all(), &[Directive::disable("inline_html")]);
    let html = render(RAW_HTML, mask);
    assert!(html.contains("<div>raw</div>"));
    assert!(html.contains("<p>a b c</p>"));
}

#[test]
fn test_empty_mask_drops_all_raw_html() {
    let html = render(RAW_HTML, Extensions::empty());
    assert_eq!(html, "<p>a b c</p>\n");
}

#[test]
fn test_directives_drive_rendering() {
    let mask = resolve(
        Extensions::all(),
        &[Directive::disable("all"), Directive::enable("tables")],
    );
    let html = render("| a |\n|---|\n| 1 |\n\n~~x~~\n", mask);
    assert!(html.contains("<table>"));
    assert!(html.contains("~~x~~"));
}
