/*!
# Entity Reference Fixer

Value tables such as `catalog_product_entity_int` reference their owner via
`entity_id`, which the generated models declare as `belongs_to :entity`.
Each declaration is pinned to the owning entity class, chosen by file name
prefix.

Prefixes are tried in order against the current content. A file matching
more than one prefix (every `customer_address_*` file also starts with
`customer`) is rewritten once per matching prefix.
*/

use crate::patcher::rules::PatchRule;
use crate::patcher::{PatchContext, PatchOutcome, SourceLines};

const GENERATED_DECLARATION: &str = "belongs_to :entity";

/// File name prefix to owning entity class
pub const ENTITY_PREFIXES: [(&str, &str); 4] = [
    ("customer", "CustomerEntity"),
    ("customer_address", "CustomerAddressEntity"),
    ("catalog_category", "CatalogCategoryEntity"),
    ("catalog_product", "CatalogProductEntity"),
];

/// Pins `belongs_to :entity` to the entity class named by the file prefix
pub struct EntityReferenceFixer {
    prefixes: Vec<(&'static str, &'static str)>,
}

impl EntityReferenceFixer {
    pub fn new() -> Self {
        Self {
            prefixes: ENTITY_PREFIXES.to_vec(),
        }
    }

    fn matching_prefixes<'a>(&'a self, file_name: &'a str) -> impl Iterator<Item = &'a (&'static str, &'static str)> {
        self.prefixes
            .iter()
            .filter(move |(prefix, _)| file_name.starts_with(*prefix))
    }
}

impl Default for EntityReferenceFixer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for EntityReferenceFixer {
    fn name(&self) -> &'static str {
        "entity_references"
    }

    fn description(&self) -> &'static str {
        "Pins belongs_to :entity to the owning EAV entity class with foreign key entity_id"
    }

    fn matches(&self, context: &PatchContext) -> bool {
        self.matching_prefixes(&context.file_name).next().is_some()
    }

    fn apply(&self, lines: &mut SourceLines, context: &PatchContext) -> PatchOutcome {
        let mut outcome = PatchOutcome::NoAnchor;

        for (_, model) in self.matching_prefixes(&context.file_name) {
            let Some(index) = lines.find_first(GENERATED_DECLARATION) else {
                continue;
            };

            let pinned = format!("{GENERATED_DECLARATION}, class_name: \"{model}\", foreign_key: :entity_id");
            lines.replace_in_line(index, GENERATED_DECLARATION, &pinned);
            outcome = PatchOutcome::Patched;
        }

        outcome
    }
}
