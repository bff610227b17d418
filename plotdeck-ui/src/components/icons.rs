//! Inline SVG icons for toolbar actions.

use leptos::*;

/// Symbolic icon reference carried by a toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Enter fullscreen (maximize corners).
    Fullscreen,
    /// Exit fullscreen (minimize corners).
    FullscreenExit,
    Download,
    Copy,
}

impl IntoView for Icon {
    fn into_view(self) -> View {
        match self {
            Icon::Fullscreen => view! { <FullscreenIcon /> }.into_view(),
            Icon::FullscreenExit => view! { <FullscreenExitIcon /> }.into_view(),
            Icon::Download => view! { <DownloadIcon /> }.into_view(),
            Icon::Copy => view! { <CopyIcon /> }.into_view(),
        }
    }
}

#[component]
fn FullscreenIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M8 3H5a2 2 0 0 0-2 2v3m18 0V5a2 2 0 0 0-2-2h-3m0 18h3a2 2 0 0 0 2-2v-3M3 16v3a2 2 0 0 0 2 2h3"/>
        </svg>
    }
}

#[component]
fn FullscreenExitIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M8 3v3a2 2 0 0 1-2 2H3m18 0h-3a2 2 0 0 1-2-2V3m0 18v-3a2 2 0 0 1 2-2h3M3 16h3a2 2 0 0 1 2 2v3"/>
        </svg>
    }
}

#[component]
fn DownloadIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="m7 10 5 5 5-5"/>
            <path d="M12 15V3"/>
        </svg>
    }
}

#[component]
fn CopyIcon() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2"/>
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>
        </svg>
    }
}
