//! Extension mask to comrak options

use comrak::ComrakOptions;
use mdown_parser::mdown::extensions::Extensions;
use tracing::debug;

/// Build the comrak options honoring `extensions`
///
/// Raw HTML is always rendered as-is. Suppression is applied to the tree instead, see
/// [super::parser::parse_comrak].
///
/// `smarts` and `quotes` drive the same engine switch: typography is on while either is set.
pub fn comrak_options(extensions: Extensions) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();

    let typography = extensions & (Extensions::SMARTS | Extensions::QUOTES);
    if typography == Extensions::SMARTS || typography == Extensions::QUOTES {
        debug!(
            enabled = ?typography.enabled_names(),
            "smarts and quotes share one switch; typography stays on for both"
        );
    }
    options.parse.smart = !typography.is_empty();
    options.render.hardbreaks = extensions.contains(Extensions::HARDWRAPS);
    options.render.unsafe_ = true;

    options.extension.autolink = extensions.contains(Extensions::AUTOLINKS);
    options.extension.table = extensions.contains(Extensions::TABLES);
    options.extension.description_lists = extensions.contains(Extensions::DEFINITIONS);
    options.extension.wikilinks_title_after_pipe = extensions.contains(Extensions::WIKILINKS);
    options.extension.strikethrough = extensions.contains(Extensions::STRIKETHROUGH);
    options.extension.tasklist = extensions.contains(Extensions::TASKLISTITEMS);
    options.extension.footnotes = extensions.contains(Extensions::FOOTNOTES);
    options.extension.superscript = extensions.contains(Extensions::SUPERSCRIPT);
    if extensions.contains(Extensions::ANCHORLINKS) {
        options.extension.header_ids = Some(String::new());
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask_is_plain_commonmark() {
        let options = comrak_options(Extensions::empty());
        assert!(!options.parse.smart);
        assert!(!options.render.hardbreaks);
        assert!(!options.extension.table);
        assert!(!options.extension.strikethrough);
        assert!(options.extension.header_ids.is_none());
        assert!(options.render.unsafe_);
    }

    #[test]
    fn test_full_mask_enables_everything() {
        let options = comrak_options(Extensions::all());
        assert!(options.parse.smart);
        assert!(options.render.hardbreaks);
        assert!(options.extension.autolink);
        assert!(options.extension.table);
        assert!(options.extension.description_lists);
        assert!(options.extension.wikilinks_title_after_pipe);
        assert!(options.extension.tasklist);
        assert!(options.extension.footnotes);
        assert!(options.extension.superscript);
        assert_eq!(options.extension.header_ids.as_deref(), Some(""));
    }

    #[test]
    fn test_either_typography_bit_turns_on_smart() {
        assert!(comrak_options(Extensions::QUOTES).parse.smart);
        assert!(comrak_options(Extensions::SMARTS).parse.smart);
    }

    #[test]
    fn test_clearing_one_typography_bit_keeps_smart_on() {
        assert!(comrak_options(Extensions::all() - Extensions::SMARTS).parse.smart);
        assert!(comrak_options(Extensions::all() - Extensions::QUOTES).parse.smart);
        assert!(
            !comrak_options(Extensions::all() - Extensions::SMARTS - Extensions::QUOTES)
                .parse
                .smart
        );
    }
}
