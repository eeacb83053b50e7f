//! Built-in story tools served by the bridge binary.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bserve::tools::{StoryTables, story_registry};
//!
//! let registry = story_registry(Arc::new(StoryTables::default()));
//! assert_eq!(registry.len(), 3);
//! assert!(registry.contains("get_elf_name"));
//! ```

use std::sync::Arc;

use btooling::{
    ToolArguments, ToolDescriptor, ToolError, ToolRegistry, optional_integer, optional_string,
};
use rand::seq::IndexedRandom;

pub const MAX_ELF_NAMES: i64 = 20;

/// Word lists the story tools draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryTables {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub locations: Vec<String>,
    pub location_features: Vec<String>,
    pub events: Vec<String>,
}

impl StoryTables {
    pub fn new(
        first_names: Vec<String>,
        last_names: Vec<String>,
        locations: Vec<String>,
        location_features: Vec<String>,
        events: Vec<String>,
    ) -> Self {
        Self {
            first_names,
            last_names,
            locations,
            location_features,
            events,
        }
    }
}

impl Default for StoryTables {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();

        Self {
            first_names: owned(&[
                "Legolas", "Galadriel", "Elrond", "Arwen", "Thranduil", "Celeborn", "Haldir",
                "Tauriel", "Glorfindel", "Erestor", "Lindir", "Rumil", "Orophin", "Elladan",
                "Elrohir",
            ]),
            last_names: owned(&[
                "Greenleaf", "Starlight", "Moonwhisper", "Silverbrook", "Nightingale",
                "Sunweaver", "Forestsong", "Windwalker", "Dawnbringer", "Shadowstep",
                "Lightbringer", "Oakenshield",
            ]),
            locations: owned(&[
                "the Golden Wood of Lothlórien",
                "the Grey Havens by the sea",
                "the halls of Rivendell",
                "the gardens of Valinor",
                "the forests of Mirkwood",
                "the towers of Gondolin",
                "the shores of Númenor",
                "the realm of Doriath",
            ]),
            location_features: owned(&[
                "where ancient trees whisper secrets of old",
                "bathed in the eternal light of the Two Trees",
                "where the stars shine brighter than elsewhere in Middle-earth",
                "protected by enchantments woven in the Elder Days",
                "where time flows differently than in mortal lands",
                "adorned with fountains that sing melodious songs",
                "where the air itself seems to shimmer with magic",
                "overlooking valleys filled with silver mist",
            ]),
            events: owned(&[
                "discovers a hidden talent they never knew they possessed",
                "must choose between duty and personal desire",
                "receives a mysterious visitor bearing urgent news",
                "finds an ancient artifact with unknown powers",
                "witnesses a rare celestial phenomenon that changes everything",
                "must overcome their greatest fear to help a friend",
                "uncovers a long-buried secret about their heritage",
                "faces a challenge that tests their deepest beliefs",
            ]),
        }
    }
}

pub fn story_registry(tables: Arc<StoryTables>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_story_tools(&mut registry, tables);
    registry
}

pub fn register_story_tools(registry: &mut ToolRegistry, tables: Arc<StoryTables>) {
    let elf_tables = Arc::clone(&tables);
    registry.register_sync_fn(
        ToolDescriptor::new(
            "get_elf_name",
            "get_elf_name(count=1)",
            "Returns one or more generated elf names",
        ),
        move |args| elf_names(&elf_tables, args),
    );

    let location_tables = Arc::clone(&tables);
    registry.register_sync_fn(
        ToolDescriptor::new(
            "get_location_description",
            "get_location_description(style='brief')",
            "Describes a story location; style is 'brief' or 'detailed'",
        ),
        move |args| location_description(&location_tables, args),
    );

    registry.register_sync_fn(
        ToolDescriptor::new(
            "get_random_event",
            "get_random_event()",
            "Returns a random story event to drive the narrative",
        ),
        move |_args| random_event(&tables),
    );
}

fn elf_names(tables: &StoryTables, args: &ToolArguments) -> Result<String, ToolError> {
    let count = optional_integer(args, "count", 1)?;
    if !(1..=MAX_ELF_NAMES).contains(&count) {
        return Err(ToolError::invalid_arguments(format!(
            "count must be between 1 and {MAX_ELF_NAMES}, got {count}"
        )));
    }

    let names = (0..count)
        .map(|_| {
            let first = pick(&tables.first_names, "first name")?;
            let last = pick(&tables.last_names, "last name")?;
            Ok(format!("{first} {last}"))
        })
        .collect::<Result<Vec<_>, ToolError>>()?;

    Ok(names.join(", "))
}

fn location_description(tables: &StoryTables, args: &ToolArguments) -> Result<String, ToolError> {
    let style = optional_string(args, "style", "brief")?;
    let location = pick(&tables.locations, "location")?;

    match style.as_str() {
        "brief" => Ok(location.to_string()),
        "detailed" => {
            let feature = pick(&tables.location_features, "location feature")?;
            Ok(format!("{location}, {feature}"))
        }
        other => Err(ToolError::invalid_arguments(format!(
            "style must be 'brief' or 'detailed', got '{other}'"
        ))),
    }
}

fn random_event(tables: &StoryTables) -> Result<String, ToolError> {
    pick(&tables.events, "event").map(str::to_string)
}

fn pick<'a>(items: &'a [String], table: &str) -> Result<&'a str, ToolError> {
    items
        .choose(&mut rand::rng())
        .map(String::as_str)
        .ok_or_else(|| ToolError::execution(format!("no {table} entries configured")))
}
