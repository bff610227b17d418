pub mod icons;
pub mod markdown;
pub mod toolbar;
pub mod tooltip;

pub use icons::Icon;
pub use markdown::InlineMarkdown;
pub use toolbar::{Toolbar, ToolbarAction};
pub use tooltip::Tooltip;
