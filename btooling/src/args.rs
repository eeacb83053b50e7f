//! Argument accessor helpers for function and trait-based tools.
//!
//! ```rust
//! use btooling::{ToolArguments, optional_integer, required_string};
//!
//! let args = ToolArguments::new().with("style", "brief");
//! assert_eq!(required_string(&args, "style").expect("style should be present"), "brief");
//! assert_eq!(optional_integer(&args, "count", 1).expect("count defaults"), 1);
//! ```

use crate::{ArgumentValue, ToolArguments, ToolError};

pub fn required_string(args: &ToolArguments, key: &str) -> Result<String, ToolError> {
    match args.get(key) {
        Some(ArgumentValue::String(value)) => Ok(value.clone()),
        Some(ArgumentValue::Integer(_)) => Err(ToolError::invalid_arguments(format!(
            "argument '{key}' must be a string"
        ))),
        None => Err(ToolError::invalid_arguments(format!(
            "missing required string: '{key}'"
        ))),
    }
}

pub fn optional_string(args: &ToolArguments, key: &str, default: &str) -> Result<String, ToolError> {
    match args.get(key) {
        None => Ok(default.to_string()),
        Some(_) => required_string(args, key),
    }
}

pub fn optional_integer(args: &ToolArguments, key: &str, default: i64) -> Result<i64, ToolError> {
    match args.get(key) {
        None => Ok(default),
        Some(ArgumentValue::Integer(value)) => Ok(*value),
        Some(ArgumentValue::String(_)) => Err(ToolError::invalid_arguments(format!(
            "argument '{key}' must be an integer"
        ))),
    }
}
