/*!
# Magento Model Rules

Rules that rewire Rails models generated from a Magento database so that
its entity-attribute-value tables become explicit associations.
*/

use super::rules::PatchRule;

pub mod attribute_refs;
pub mod entity_refs;
pub mod entity_relations;
pub mod table_name;

// Re-export commonly used rules
pub use attribute_refs::AttributeReferenceFixer;
pub use entity_refs::EntityReferenceFixer;
pub use entity_relations::EntityRelationInjector;
pub use table_name::TableNameInjector;

/// The Magento EAV entities: (file stem, model class)
pub const EAV_ENTITIES: [(&str, &str); 4] = [
    ("customer_entity", "CustomerEntity"),
    ("customer_address_entity", "CustomerAddressEntity"),
    ("catalog_category_entity", "CatalogCategoryEntity"),
    ("catalog_product_entity", "CatalogProductEntity"),
];

/// Identifies one of the built-in rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    TableName,
    AttributeReferences,
    EntityReferences,
    EntityRelations,
}

impl RuleKind {
    /// Every rule, in run order
    pub const ALL: [RuleKind; 4] = [
        RuleKind::TableName,
        RuleKind::AttributeReferences,
        RuleKind::EntityReferences,
        RuleKind::EntityRelations,
    ];

    /// Rules enabled when nothing else is configured
    pub const DEFAULT: [RuleKind; 1] = [RuleKind::EntityRelations];

    pub fn build(self) -> Box<dyn PatchRule> {
        match self {
            RuleKind::TableName => Box::new(TableNameInjector::new()),
            RuleKind::AttributeReferences => Box::new(AttributeReferenceFixer::new()),
            RuleKind::EntityReferences => Box::new(EntityReferenceFixer::new()),
            RuleKind::EntityRelations => Box::new(EntityRelationInjector::new()),
        }
    }
}
