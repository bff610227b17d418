pub mod markup;
pub mod toolbar;

pub use markup::{parse_inline_markup, InlineSpan, SpanStyle};
pub use toolbar::{
    resolve_fullscreen_toggle, FullscreenToggle, EXIT_FULLSCREEN_LABEL, FULLSCREEN_LABEL,
    TOOLBAR_BUTTON_ICON_TEST_ID, TOOLBAR_BUTTON_TEST_ID, TOOLBAR_TEST_ID,
};
