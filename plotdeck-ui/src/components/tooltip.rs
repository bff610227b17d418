//! Hover tooltip for toolbar actions.

use crate::components::InlineMarkdown;
use leptos::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

/// Hover delay before the tooltip shows, in milliseconds.
/// Deliberately slower than the usual 200ms: a toolbar packs many
/// adjacent actions, and instant tooltips turn a sweep of the row into
/// visual noise.
const TOOLTIP_SHOW_DELAY_MS: f64 = 1000.0;

/// Wraps its children and shows `content` above them after a hover delay.
///
/// `content` is rendered through [`InlineMarkdown`], so labels may carry
/// bold/italic/code formatting but never raw HTML.
#[component]
pub fn Tooltip(
    /// Tooltip body, as restricted inline markup
    #[prop(into)]
    content: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| set_visible.set(true),
        TOOLTIP_SHOW_DELAY_MS,
    );

    view! {
        <div
            class="relative inline-flex"
            on:mouseenter=move |_| start(())
            on:mouseleave=move |_| {
                stop();
                set_visible.set(false);
            }
        >
            {children()}
            <Show when=move || visible.get()>
                <div
                    role="tooltip"
                    class="absolute bottom-full left-1/2 -translate-x-1/2 mb-1 z-50 \
                           px-2 py-1 rounded bg-black/80 text-white text-xs \
                           whitespace-nowrap pointer-events-none"
                >
                    <InlineMarkdown source=content.clone() />
                </div>
            </Show>
        </div>
    }
}
