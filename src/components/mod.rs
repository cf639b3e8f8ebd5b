pub mod content;
pub mod header;
pub mod hero;
pub mod page_animations;
pub mod scroll_top;
pub mod subtitle;
