pub mod blank;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_marker;

pub use blank::BlankLine;
pub use code_fence::CodeFence;
pub use heading::{AtxHeading, SetextUnderline};
pub use indented_code::IndentedCode;
pub use list_marker::ListMarker;
