//! Plain geometric value types

pub mod dimension;
pub mod rect;

pub use dimension::Dimension;
pub use rect::Rect;
