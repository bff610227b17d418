//! Demo page: a sample rendered element with its overlay toolbar.

use crate::components::{Icon, Toolbar, ToolbarAction};
use crate::hooks::{use_element_fullscreen, FullscreenScope};
use leptos::*;

#[component]
fn SampleChart() -> impl IntoView {
    // Fixed bars; a stand-in for a real rendered element.
    let bars = [42, 78, 31, 90, 56, 67, 23, 84];

    view! {
        <div class="flex items-end gap-2 h-64 w-full max-w-xl rounded-lg bg-black/30 p-4">
            {bars
                .iter()
                .map(|&height| view! {
                    <div
                        class="flex-1 rounded-t bg-sky-500/80"
                        style=format!("height: {height}%")
                    />
                })
                .collect_view()}
        </div>
    }
}

/// Reads the shared fullscreen handle from the enclosing scope, like any
/// element body would.
#[component]
fn ChartCaption() -> impl IntoView {
    let fullscreen = use_element_fullscreen();

    view! {
        <p class="mt-2 text-xs text-gray-500">
            {move || {
                if fullscreen.expanded.get() {
                    "Showing fullscreen; use the toolbar to close."
                } else {
                    "Hover the chart to reveal its toolbar."
                }
            }}
        </p>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (downloads, set_downloads) = create_signal(0u32);

    view! {
        <main class="min-h-screen bg-gray-900 text-white p-8 space-y-4">
            <h1 class="text-xl font-semibold">"Element toolbar demo"</h1>
            <FullscreenScope>
                <Toolbar>
                    <ToolbarAction
                        label="Download as **PNG**"
                        icon=Icon::Download
                        on_click=Callback::new(move |_| set_downloads.update(|n| *n += 1))
                    />
                </Toolbar>
                <SampleChart />
                <ChartCaption />
            </FullscreenScope>
            <p class="text-sm text-gray-400">
                {move || format!("Downloads requested: {}", downloads.get())}
            </p>
        </main>
    }
}
