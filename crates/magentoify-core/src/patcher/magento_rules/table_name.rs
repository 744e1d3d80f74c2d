/*!
# Table Name Injector

Pins each model to the table its file is named after by inserting
`self.table_name = "<file stem>"` right below the class line.
*/

use crate::patcher::rules::PatchRule;
use crate::patcher::{PatchContext, PatchOutcome, SourceLines};

const CLASS_KEYWORD: &str = "class";

/// Inserts a `self.table_name` assignment after the first `class` line
pub struct TableNameInjector;

impl TableNameInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableNameInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchRule for TableNameInjector {
    fn name(&self) -> &'static str {
        "table_name"
    }

    fn description(&self) -> &'static str {
        "Inserts self.table_name with the file's basename after the class declaration"
    }

    fn apply(&self, lines: &mut SourceLines, context: &PatchContext) -> PatchOutcome {
        let Some(class_line) = lines.find_first(CLASS_KEYWORD) else {
            return PatchOutcome::NoAnchor;
        };

        lines.insert_after(
            class_line,
            [format!("  self.table_name = \"{}\"\n", context.file_name), "\n".to_string()],
        );
        PatchOutcome::Patched
    }
}
