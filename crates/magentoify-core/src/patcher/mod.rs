/*!
# Patcher - Line-based Model Rewriting

Applies a fixed set of text rules to Rails model files in place.

## Architecture

- `SourceLines`: the line buffer rules mutate, with substring anchors
- `PatchRule`: trait for a (filename gate, line mutation) pair
- `ModelPatcher`: runs rules over the selected files and keeps statistics
- `magento_rules`: the four Magento-specific rules

## Example Usage

```rust,no_run
use magentoify_core::{select_model_files, MagentoifyConfig, ModelPatcher, RuleKind};

let config = MagentoifyConfig::from_project(Some("/srv/shop"))?;
let files = select_model_files(&config)?;

let mut patcher = ModelPatcher::from_kinds(&[RuleKind::EntityRelations]);
let summary = patcher.patch_files(&files)?;
println!("{} files written", summary.files_written);
# Ok::<(), magentoify_core::MagentoifyError>(())
```

A rule whose anchor line is missing leaves the file untouched and reports
`PatchOutcome::NoAnchor`. That is never an error.
*/

pub mod file_patcher;
pub mod lines;
pub mod magento_rules;
pub mod rules;

// Re-export main types
pub use file_patcher::{ModelPatcher, PatchSummary};
pub use lines::SourceLines;
pub use rules::{PatchRule, RuleStats};

use crate::model_file::ModelFile;

/// What a rule knows about the file it is patching
#[derive(Debug, Clone)]
pub struct PatchContext {
    /// File stem, e.g. `customer_entity`
    pub file_name: String,
}

impl PatchContext {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn for_file(file: &ModelFile) -> Self {
        Self::new(file.name())
    }
}

/// Result of applying one rule to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Lines were inserted or rewritten
    Patched,
    /// The anchor line was not found; the buffer is unchanged
    NoAnchor,
}

impl PatchOutcome {
    pub fn is_patched(self) -> bool {
        self == PatchOutcome::Patched
    }
}
