//! Rendering styled text to an output document.
//!
//! The tree builder only names styles; a renderer decides how they look.

pub mod svg;
pub mod theme;

pub use svg::{SvgOptions, SvgRenderer};
pub use theme::Theme;

use crate::Result;
use crate::styled::StyledText;

/// Anything that can turn styled text into a finished document.
pub trait StyledTextRenderer {
    fn render(&self, text: &StyledText, title: &str) -> Result<String>;
}
