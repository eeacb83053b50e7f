//! Call syntax codec for `TOOL_CALL: name(key=value, ...)` markers.
//!
//! Only the first marker in a turn is recognised; anything after its closing
//! parenthesis is ignored. Absence of a marker is the normal stop signal.
//!
//! ```rust
//! use bchat::parse_tool_call;
//! use btooling::ArgumentValue;
//!
//! let call = parse_tool_call("TOOL_CALL: get_elf_name(count=1)").expect("call should parse");
//! assert_eq!(call.name, "get_elf_name");
//! assert_eq!(call.arguments.get("count"), Some(&ArgumentValue::Integer(1)));
//!
//! assert!(parse_tool_call("Elarion walks into the hollow.").is_none());
//! ```

use std::sync::LazyLock;

use btooling::{ArgumentValue, ToolArguments, ToolInvocation};
use regex::Regex;

pub const CALL_MARKER: &str = "TOOL_CALL:";

/// `None` only if the pattern fails to compile; `call_pattern_compiles` guards that.
static CALL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i){}\s*(\w+)\((.*?)\)",
        regex::escape(CALL_MARKER)
    ))
    .ok()
});

pub fn parse_tool_call(text: &str) -> Option<ToolInvocation> {
    let captures = CALL_PATTERN.as_ref()?.captures(text)?;
    let name = captures.get(1)?.as_str();
    let arguments = captures
        .get(2)
        .map(|list| parse_arguments(list.as_str()))
        .unwrap_or_default();

    Some(ToolInvocation::new(name, arguments))
}

/// Parses a comma-separated `key=value` list. Pairs without `=` or with an
/// empty key are skipped; a repeated key keeps its slot and takes the last value.
pub fn parse_arguments(list: &str) -> ToolArguments {
    let mut arguments = ToolArguments::new();
    let list = list.trim();
    if list.is_empty() {
        return arguments;
    }

    for pair in split_top_level(list) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        arguments.insert(key, parse_value(value.trim()));
    }

    arguments
}

pub fn parse_value(raw: &str) -> ArgumentValue {
    match raw.parse::<i64>() {
        Ok(value) => ArgumentValue::Integer(value),
        Err(_) => ArgumentValue::String(strip_quotes(raw).to_string()),
    }
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }

    raw
}

// A quote only opens a quoted value when it directly follows `=`, so
// apostrophes inside bare words do not swallow the next comma.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut open_quote = None::<char>;
    let mut previous = None::<char>;
    let mut start = 0;

    for (index, ch) in list.char_indices() {
        match open_quote {
            Some(quote) if ch == quote => open_quote = None,
            Some(_) => {}
            None if (ch == '\'' || ch == '"') && previous == Some('=') => open_quote = Some(ch),
            None if ch == ',' => {
                parts.push(&list[start..index]);
                start = index + ch.len_utf8();
            }
            None => {}
        }

        if !ch.is_whitespace() {
            previous = Some(ch);
        }
    }

    parts.push(&list[start..]);
    parts
}
