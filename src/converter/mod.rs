//! Format converters for rule files.

mod text;

pub use text::{TextParser, TextRule, TextWriter};
