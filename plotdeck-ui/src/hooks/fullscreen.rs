//! Per-element fullscreen state, shared through context.

use leptos::*;

/// Fullscreen handle for one rendered element.
///
/// Provided by [`FullscreenScope`]; the element body and its toolbar both
/// read the same handle, so either side can trigger a transition.
#[derive(Clone, Copy)]
pub struct ElementFullscreen {
    /// True while the element fills the viewport.
    pub expanded: Signal<bool>,
    pub expand: Callback<()>,
    pub collapse: Callback<()>,
}

/// Read the enclosing element's fullscreen handle.
///
/// Panics when no [`FullscreenScope`] is mounted above the caller. There
/// is no sensible fallback for fullscreen state, so a missing scope is a
/// wiring bug, not a recoverable condition.
pub fn use_element_fullscreen() -> ElementFullscreen {
    use_context::<ElementFullscreen>()
        .expect("use_element_fullscreen: no FullscreenScope above this component")
}

/// Owns one element's fullscreen state and provides it to descendants.
///
/// Collapsed, the scope is a plain positioned container (and the hover
/// `group` the toolbar reveal keys off). Expanded, it pins itself over
/// the whole viewport.
#[component]
pub fn FullscreenScope(children: Children) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let expand = Callback::new(move |_| {
        log::debug!("element entering fullscreen");
        set_expanded.set(true);
    });
    let collapse = Callback::new(move |_| {
        log::debug!("element leaving fullscreen");
        set_expanded.set(false);
    });

    provide_context(ElementFullscreen {
        expanded: expanded.into(),
        expand,
        collapse,
    });

    view! {
        <div class=move || {
            if expanded.get() {
                "group fixed inset-0 z-40 bg-gray-900 p-4 overflow-auto"
            } else {
                "group relative"
            }
        }>
            {children()}
        </div>
    }
}
