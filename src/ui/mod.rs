//! Terminal status lines for the CLI
//!
//! Everything here writes to stderr; stdout is reserved for the diagram.

pub mod output;
pub mod theme;

pub use output::{error, hint, success, warn};
pub use theme::{theme, Theme};
