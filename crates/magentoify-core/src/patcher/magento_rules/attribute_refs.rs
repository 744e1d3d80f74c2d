/*!
# Attribute Reference Fixer

Magento value tables point at `eav_attribute` through an `attribute_id`
column, which the generated models declare as `belongs_to :attribute`. That
name clashes with ActiveRecord internals, so the association is renamed and
pinned to the `EavAttribute` class.
*/

use crate::patcher::rules::PatchRule;
use crate::patcher::{PatchContext, PatchOutcome, SourceLines};

const GENERATED_DECLARATION: &str = "belongs_to :attribute";
const PINNED_DECLARATION: &str =
    "belongs_to :eav_attribute, class_name: \"EavAttribute\", foreign_key: :attribute_id";

/// Rewrites the first `belongs_to :attribute` line
pub struct AttributeReferenceFixer;

impl AttributeReferenceFixer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AttributeReferenceFixer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for AttributeReferenceFixer {
    fn name(&self) -> &'static str {
        "attribute_references"
    }

    fn description(&self) -> &'static str {
        "Renames belongs_to :attribute to :eav_attribute with an explicit class and foreign key"
    }

    fn apply(&self, lines: &mut SourceLines, _context: &PatchContext) -> PatchOutcome {
        match lines.find_first(GENERATED_DECLARATION) {
            Some(index) => {
                lines.replace_in_line(index, GENERATED_DECLARATION, PINNED_DECLARATION);
                PatchOutcome::Patched
            }
            None => PatchOutcome::NoAnchor,
        }
    }
}
