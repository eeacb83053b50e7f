//! Bridge-owned system prompt that teaches a text-only backend the call syntax.
//!
//! ```rust
//! use bchat::augment_prompt;
//! use btooling::ToolDescriptor;
//!
//! let tools = [ToolDescriptor::new("get_elf_name", "get_elf_name(count=1)", "Elf names")];
//! let turn = augment_prompt(Some(&tools[..]));
//!
//! assert!(turn.is_synthetic());
//! assert!(turn.content.contains("TOOL_CALL: function_name(arg1=value1, arg2=value2)"));
//! assert!(turn.content.contains("- get_elf_name(count=1): Elf names"));
//! ```

use bprovider::{Role, Turn};
use btooling::ToolDescriptor;

pub const CALL_SYNTAX: &str = "TOOL_CALL: function_name(arg1=value1, arg2=value2)";

const GENERIC_TOOLS_LINE: &str =
    "Tools are available through this bridge; use the syntax above to call one.";

pub fn augment_prompt(tools: Option<&[ToolDescriptor]>) -> Turn {
    Turn::bridge(Role::System, render_prompt(tools))
}

/// Empty descriptor lists render the same as `None`.
pub fn render_prompt(tools: Option<&[ToolDescriptor]>) -> String {
    let tools_section = match tools {
        Some(tools) if !tools.is_empty() => {
            let lines = tools.iter().map(render_descriptor).collect::<Vec<_>>();
            format!("Available tools:\n{}", lines.join("\n"))
        }
        _ => GENERIC_TOOLS_LINE.to_string(),
    };

    format!(
        "You are a helpful assistant with access to tools. To use a tool, write the call \
on a line by itself in exactly this format:

{CALL_SYNTAX}

{tools_section}

Rules:
- Write nothing else on the TOOL_CALL line.
- Call at most one tool per reply. After writing a TOOL_CALL, stop and wait for the result.
- Never invent a tool result. Use only the text that follows TOOL_RESULT.
- If you receive TOOL_ERROR, continue without that tool.

Example:
User: Generate an elf name and a location
Assistant: TOOL_CALL: get_elf_name(count=1)
[result provided]
Assistant: TOOL_CALL: get_location_description(style='detailed')
[result provided]
Assistant: Here is your character: [provided name] in [provided location]
"
    )
}

fn render_descriptor(descriptor: &ToolDescriptor) -> String {
    if descriptor.description.trim().is_empty() {
        format!("- {}", descriptor.usage)
    } else {
        format!("- {}: {}", descriptor.usage, descriptor.description)
    }
}
