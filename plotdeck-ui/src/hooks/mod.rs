mod fullscreen;

pub use fullscreen::{use_element_fullscreen, ElementFullscreen, FullscreenScope};
