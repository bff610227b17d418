//! Hover-revealed action toolbar overlaying a rendered element.

use crate::components::{Icon, Tooltip};
use crate::hooks::ElementFullscreen;
use leptos::*;
use plotdeck_core::{
    resolve_fullscreen_toggle, FullscreenToggle, EXIT_FULLSCREEN_LABEL, FULLSCREEN_LABEL,
    TOOLBAR_BUTTON_ICON_TEST_ID, TOOLBAR_BUTTON_TEST_ID, TOOLBAR_TEST_ID,
};

/// A single toolbar action: an icon button with a delayed hover tooltip.
///
/// The label is always the accessible name; it is only rendered as
/// visible text when `show_label` is set. Clicks never bubble past the
/// action, so the overlaid element's own click handling does not fire.
#[component]
pub fn ToolbarAction(
    /// Accessible name, also shown as the tooltip (inline markup allowed)
    #[prop(into)]
    label: String,
    /// Icon rendered inside the button
    #[prop(optional)]
    icon: Option<Icon>,
    /// Render the label text next to the icon
    #[prop(optional)]
    show_label: bool,
    /// Invoked once per activation
    on_click: Callback<()>,
) -> impl IntoView {
    let aria_label = label.clone();
    let tooltip = label.clone();
    let visible_label = show_label.then(|| label);

    view! {
        <Tooltip content=tooltip>
            <button
                data-testid=TOOLBAR_BUTTON_TEST_ID
                aria-label=aria_label
                class="flex items-center gap-1 rounded p-1.5 text-white/80 \
                       hover:text-white hover:bg-white/10 active:bg-white/20 \
                       transition-colors"
                on:click=move |ev| {
                    on_click.call(());
                    ev.stop_propagation();
                }
            >
                {icon.map(|icon| view! {
                    <span data-testid=TOOLBAR_BUTTON_ICON_TEST_ID class="flex items-center">
                        {icon}
                    </span>
                })}
                {visible_label.map(|text| view! { <span class="text-sm leading-none">{text}</span> })}
            </button>
        </Tooltip>
    }
}

/// Action container overlaying a rendered element, revealed on hover.
///
/// Renders caller-supplied actions followed by a built-in fullscreen
/// toggle. Explicit props win; anything missing falls back to the
/// enclosing [`FullscreenScope`](crate::hooks::FullscreenScope). Missing
/// callbacks just drop the corresponding action, but fullscreen *state*
/// has no safe default: with neither the `is_fullscreen` prop nor a
/// mounted scope, rendering panics.
#[component]
pub fn Toolbar(
    /// Explicit enter-fullscreen handler
    #[prop(optional)]
    on_expand: Option<Callback<()>>,
    /// Explicit exit-fullscreen handler
    #[prop(optional)]
    on_collapse: Option<Callback<()>>,
    /// Explicit fullscreen state
    #[prop(optional)]
    is_fullscreen: Option<Signal<bool>>,
    /// Keep the toolbar visible while the pointer is elsewhere
    #[prop(optional, into)]
    locked: MaybeSignal<bool>,
    /// Suppress the built-in fullscreen toggle entirely
    #[prop(optional)]
    disable_fullscreen_mode: bool,
    /// Extra class hook for host styling; layout only
    #[prop(optional, into)]
    target: Option<String>,
    /// Caller-supplied actions, rendered before the built-in toggle
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let ambient = use_context::<ElementFullscreen>();

    let expanded = is_fullscreen
        .or_else(|| ambient.map(|scope| scope.expanded))
        .expect(
            "Toolbar: fullscreen state is unavailable; mount a FullscreenScope \
             above this element or pass the is_fullscreen prop",
        );
    let expand = on_expand.or_else(|| ambient.map(|scope| scope.expand));
    let collapse = on_collapse.or_else(|| ambient.map(|scope| scope.collapse));

    let toggle = create_memo(move |_| {
        resolve_fullscreen_toggle(
            expand.is_some(),
            collapse.is_some(),
            expanded.get(),
            disable_fullscreen_mode,
        )
    });

    // Held open while locked or fullscreen; otherwise revealed by
    // hovering the enclosing `group` container. Reveal styling beyond
    // that is the host's concern.
    let container_class = move || {
        let mut class = String::from(
            "absolute top-2 right-2 z-10 flex items-center gap-1 rounded-lg \
             bg-black/60 backdrop-blur-sm p-1 transition-opacity duration-150 ",
        );
        class.push_str(if locked.get() || expanded.get() {
            "opacity-100"
        } else {
            "opacity-0 group-hover:opacity-100 group-focus-within:opacity-100"
        });
        if let Some(target) = &target {
            class.push(' ');
            class.push_str(target);
        }
        class
    };

    view! {
        <div data-testid=TOOLBAR_TEST_ID class=container_class>
            {children.map(|children| children())}
            {move || match toggle.get() {
                Some(FullscreenToggle::Expand) => expand.map(|on_click| view! {
                    <ToolbarAction label=FULLSCREEN_LABEL icon=Icon::Fullscreen on_click=on_click />
                }.into_view()),
                Some(FullscreenToggle::Collapse) => collapse.map(|on_click| view! {
                    <ToolbarAction label=EXIT_FULLSCREEN_LABEL icon=Icon::FullscreenExit on_click=on_click />
                }.into_view()),
                None => None,
            }}
        </div>
    }
}
