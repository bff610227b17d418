//! Renders restricted inline markup parsed by the core crate.

use leptos::*;
use plotdeck_core::{parse_inline_markup, InlineSpan};

/// Inline markup renderer with HTML disabled.
///
/// Raw HTML in `source` is shown as literal text; only the inline subset
/// (bold, italic, strikethrough, code) produces styled output.
#[component]
pub fn InlineMarkdown(#[prop(into)] source: String) -> impl IntoView {
    parse_inline_markup(&source)
        .into_iter()
        .map(render_span)
        .collect_view()
}

fn render_span(span: InlineSpan) -> View {
    let InlineSpan { text, style } = span;

    let mut rendered = text.into_view();
    if style.code {
        rendered =
            view! { <code class="font-mono bg-white/10 px-0.5 rounded">{rendered}</code> }
                .into_view();
    }
    if style.strikethrough {
        rendered = view! { <del>{rendered}</del> }.into_view();
    }
    if style.emphasis {
        rendered = view! { <em>{rendered}</em> }.into_view();
    }
    if style.strong {
        rendered = view! { <strong>{rendered}</strong> }.into_view();
    }
    rendered
}
