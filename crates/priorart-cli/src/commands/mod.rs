//! Command implementations.

pub mod chart;
pub mod lens;
pub mod ops;

pub use self::chart::execute_chart;
pub use self::lens::execute_lens;
pub use self::ops::execute_ops;

use crate::error::Result;
use std::fs;

/// Resolve an argument that is either inline text or an `@file` reference.
pub(crate) fn read_text_arg(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(value.to_string()),
    }
}
