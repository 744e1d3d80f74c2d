/*!
# ModelPatcher - In-place File Patching

Runs each rule over every selected model file, one file at a time. A file is
read fresh from disk for every rule and written back only when the rule
changed it, so rules see each other's output exactly as it was written.
*/

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::model_file::ModelFile;
use crate::Result;

use super::magento_rules::RuleKind;
use super::rules::{PatchRule, RuleStats};
use super::PatchContext;

/// Applies an ordered list of rules to model files
pub struct ModelPatcher {
    rules: Vec<Box<dyn PatchRule>>,
    stats: HashMap<String, RuleStats>,
}

impl ModelPatcher {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            stats: HashMap::new(),
        }
    }

    /// Build a patcher running the given rules in order
    pub fn from_kinds(kinds: &[RuleKind]) -> Self {
        let mut patcher = Self::new();
        for kind in kinds {
            patcher.add_rule(kind.build());
        }
        patcher
    }

    /// Add a patch rule
    pub fn add_rule(&mut self, rule: Box<dyn PatchRule>) {
        let rule_name = rule.name().to_string();
        self.stats.insert(rule_name.clone(), RuleStats::new(rule_name));
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule over `files`.
    ///
    /// Stops at the first I/O error; files already written stay written.
    pub fn patch_files(&mut self, files: &[ModelFile]) -> Result<PatchSummary> {
        let mut summary = PatchSummary::new();
        summary.files_selected = files.len() as u64;

        for rule in &self.rules {
            let stats = self
                .stats
                .entry(rule.name().to_string())
                .or_insert_with(|| RuleStats::new(rule.name().to_string()));
            info!("Running {}: {}", rule.name(), rule.description());

            for file in files {
                Self::patch_file(rule.as_ref(), file, stats, &mut summary)?;
            }

            info!(
                "Rule {}: {} patched, {} without anchor ({:.0}% of matching files)",
                rule.name(),
                stats.files_patched,
                stats.files_skipped,
                stats.patch_rate() * 100.0
            );
        }

        Ok(summary)
    }

    fn patch_file(
        rule: &dyn PatchRule,
        file: &ModelFile,
        stats: &mut RuleStats,
        summary: &mut PatchSummary,
    ) -> Result<()> {
        let context = PatchContext::for_file(file);
        if !rule.matches(&context) {
            return Ok(());
        }

        let mut lines = file.read_lines()?;
        let outcome = rule.apply(&mut lines, &context);
        stats.record(outcome);

        if outcome.is_patched() {
            file.write_lines(&lines)?;
            info!("{}: patched {}", rule.name(), file.path().display());
            summary.files_written += 1;
        } else {
            debug!("{}: no anchor line in {}, skipping", rule.name(), file.path().display());
            summary.skipped.push((rule.name(), file.path().to_path_buf()));
        }

        Ok(())
    }

    /// Get patch statistics
    pub fn stats(&self) -> &HashMap<String, RuleStats> {
        &self.stats
    }
}

impl Default for ModelPatcher {
    fn default() -> Self {
        Self::from_kinds(&RuleKind::DEFAULT)
    }
}

/// Summary of a patch run
#[derive(Debug, Default)]
pub struct PatchSummary {
    pub files_selected: u64,
    /// One per (rule, file) write
    pub files_written: u64,
    /// (rule, file) pairs that matched the filename gate but had no anchor
    pub skipped: Vec<(&'static str, PathBuf)>,
}

impl PatchSummary {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patcher::{PatchOutcome, SourceLines};
    use std::fs;

    struct AppendComment;

    impl PatchRule for AppendComment {
        fn name(&self) -> &'static str {
            "append_comment"
        }

        fn description(&self) -> &'static str {
            "Appends a comment after the first line containing 'class'"
        }

        fn matches(&self, context: &PatchContext) -> bool {
            context.file_name != "ignored"
        }

        fn apply(&self, lines: &mut SourceLines, _context: &PatchContext) -> PatchOutcome {
            match lines.find_first("class") {
                Some(index) => {
                    lines.insert_after(index, ["  # patched"]);
                    PatchOutcome::Patched
                }
                None => PatchOutcome::NoAnchor,
            }
        }
    }

    #[test]
    fn test_patch_files_records_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, body: &str| {
            let path = dir.path().join(name);
            fs::write(&path, body).unwrap();
            ModelFile::new(path)
        };
        let files = vec![
            write("store.rb", "class Store\nend\n"),
            write("notes.rb", "# nothing here\n"),
            write("ignored.rb", "class Ignored\nend\n"),
        ];

        let mut patcher = ModelPatcher::new();
        patcher.add_rule(Box::new(AppendComment));
        let summary = patcher.patch_files(&files).unwrap();

        assert_eq!(summary.files_selected, 3);
        assert_eq!(summary.files_written, 1);
        assert_eq!(summary.skipped, vec![("append_comment", files[1].path().to_path_buf())]);

        let stats = &patcher.stats()["append_comment"];
        assert_eq!(stats.files_considered, 2);
        assert_eq!(stats.files_patched, 1);

        assert_eq!(fs::read_to_string(files[0].path()).unwrap(), "class Store\n  # patched\nend\n");
        assert_eq!(fs::read_to_string(files[1].path()).unwrap(), "# nothing here\n");
        assert_eq!(fs::read_to_string(files[2].path()).unwrap(), "class Ignored\nend\n");
    }

    #[test]
    fn test_default_only_injects_relations() {
        assert_eq!(ModelPatcher::default().rule_names(), vec!["entity_relations"]);
    }

    #[test]
    fn test_from_kinds_keeps_order() {
        let patcher = ModelPatcher::from_kinds(&[RuleKind::EntityRelations, RuleKind::TableName]);
        assert_eq!(patcher.rule_names(), vec!["entity_relations", "table_name"]);
    }
}
