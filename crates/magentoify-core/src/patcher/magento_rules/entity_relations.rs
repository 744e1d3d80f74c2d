/*!
# Entity Relation Injector

Adds the `has_many` side of the EAV value tables to the four entity models.
Each entity gets one association per value type, all keyed on `entity_id`,
inserted just above the last `end` of the file.
*/

use crate::patcher::rules::PatchRule;
use crate::patcher::{PatchContext, PatchOutcome, SourceLines};

use super::EAV_ENTITIES;

const BLOCK_TERMINATOR: &str = "end";
const FOREIGN_KEY: &str = "entity_id";

/// Value tables of an EAV entity: (association name, class suffix)
pub const VALUE_TABLES: [(&str, &str); 5] = [
    ("datetimes", "Datetime"),
    ("decimals", "Decimal"),
    ("ints", "Int"),
    ("texts", "Text"),
    ("varchars", "Varchar"),
];

/// Inserts `has_many` declarations for the value tables of each EAV entity
pub struct EntityRelationInjector {
    entities: Vec<(&'static str, &'static str)>,
}

impl EntityRelationInjector {
    pub fn new() -> Self {
        Self {
            entities: EAV_ENTITIES.to_vec(),
        }
    }

    fn entity_class(&self, file_name: &str) -> Option<&'static str> {
        self.entities
            .iter()
            .find(|(entity, _)| *entity == file_name)
            .map(|(_, class_name)| *class_name)
    }

    /// The declarations inserted into an entity model
    pub fn declarations(class_name: &str) -> Vec<String> {
        VALUE_TABLES
            .iter()
            .map(|(key, suffix)| {
                format!("  has_many :{key}, class_name: \"{class_name}{suffix}\", foreign_key: :{FOREIGN_KEY}\n")
            })
            .collect()
    }
}

impl Default for EntityRelationInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for EntityRelationInjector {
    fn name(&self) -> &'static str {
        "entity_relations"
    }

    fn description(&self) -> &'static str {
        "Adds has_many associations to the datetime, decimal, int, text and varchar value tables of EAV entities"
    }

    fn matches(&self, context: &PatchContext) -> bool {
        self.entity_class(&context.file_name).is_some()
    }

    fn apply(&self, lines: &mut SourceLines, context: &PatchContext) -> PatchOutcome {
        let Some(class_name) = self.entity_class(&context.file_name) else {
            return PatchOutcome::NoAnchor;
        };
        let Some(last_end) = lines.find_last(BLOCK_TERMINATOR) else {
            return PatchOutcome::NoAnchor;
        };

        lines.insert_before(last_end, Self::declarations(class_name));
        PatchOutcome::Patched
    }
}
