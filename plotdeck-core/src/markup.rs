//! Restricted inline markup for tooltip labels.
//!
//! Tooltip content supports a small Markdown subset (bold, italic,
//! strikethrough, inline code). Everything else is flattened to plain
//! text: block structure collapses to spaces, link destinations are
//! dropped (tooltips are non-interactive), and raw HTML is never
//! interpreted — it comes through as literal text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Style flags for one run of tooltip text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// A run of text rendered with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub style: SpanStyle,
}

/// Parse label markup into styled text runs.
///
/// Adjacent runs with identical style are merged, so plain text parses to
/// at most one span.
pub fn parse_inline_markup(source: &str) -> Vec<InlineSpan> {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);

    let mut spans: Vec<InlineSpan> = Vec::new();
    let mut style = SpanStyle::default();
    let mut seen_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::Strong) => style.strong = true,
            Event::End(TagEnd::Strong) => style.strong = false,
            Event::Start(Tag::Emphasis) => style.emphasis = true,
            Event::End(TagEnd::Emphasis) => style.emphasis = false,
            Event::Start(Tag::Strikethrough) => style.strikethrough = true,
            Event::End(TagEnd::Strikethrough) => style.strikethrough = false,

            // Block boundaries collapse to a single space.
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Item) => {
                if seen_block {
                    push(&mut spans, " ", SpanStyle::default());
                }
                seen_block = true;
            }
            Event::SoftBreak | Event::HardBreak => push(&mut spans, " ", style),

            Event::Text(text) => push(&mut spans, &text, style),
            Event::Code(text) => {
                let mut code_style = style;
                code_style.code = true;
                push(&mut spans, &text, code_style);
            }

            // HTML is disabled: raw markup stays literal text.
            Event::Html(text) | Event::InlineHtml(text) => push(&mut spans, &text, style),

            // Links, headings, etc. contribute their text only.
            _ => {}
        }
    }

    spans
}

fn push(spans: &mut Vec<InlineSpan>, text: &str, style: SpanStyle) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.style == style {
            last.text.push_str(text);
            return;
        }
    }
    spans.push(InlineSpan {
        text: text.to_string(),
        style,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan {
            text: text.to_string(),
            style: SpanStyle::default(),
        }
    }

    #[test]
    fn plain_text_is_a_single_span() {
        assert_eq!(parse_inline_markup("Close fullscreen"), vec![plain("Close fullscreen")]);
    }

    #[test]
    fn strong_and_emphasis_are_marked() {
        let spans = parse_inline_markup("save as **PNG** or *SVG*");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], plain("save as "));
        assert_eq!(spans[1].text, "PNG");
        assert!(spans[1].style.strong);
        assert!(!spans[1].style.emphasis);
        assert_eq!(spans[3].text, "SVG");
        assert!(spans[3].style.emphasis);
    }

    #[test]
    fn nested_styles_combine() {
        let spans = parse_inline_markup("**_both_**");
        assert_eq!(spans.len(), 1);
        assert!(spans[0].style.strong && spans[0].style.emphasis);
        assert_eq!(spans[0].text, "both");
    }

    #[test]
    fn inline_code_is_marked() {
        let spans = parse_inline_markup("press `Esc` to exit");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].text, "Esc");
        assert!(spans[1].style.code);
    }

    #[test]
    fn strikethrough_is_marked() {
        let spans = parse_inline_markup("~~old~~ new");
        assert!(spans[0].style.strikethrough);
        assert_eq!(spans[0].text, "old");
    }

    #[test]
    fn raw_html_stays_literal() {
        let spans = parse_inline_markup("a <b>bold</b> claim");
        let flat: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(flat, "a <b>bold</b> claim");
        assert!(spans.iter().all(|s| s.style == SpanStyle::default()));
    }

    #[test]
    fn link_text_survives_without_destination() {
        let spans = parse_inline_markup("see [the docs](https://example.com)");
        let flat: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(flat, "see the docs");
    }

    #[test]
    fn line_and_paragraph_breaks_become_spaces() {
        let spans = parse_inline_markup("first\nsecond\n\nthird");
        let flat: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(flat, "first second third");
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(parse_inline_markup("").is_empty());
    }
}
