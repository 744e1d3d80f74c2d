/*!
# Patch Rules

Core trait and statistics for line-based patch rules.
*/

use super::{PatchContext, PatchOutcome, SourceLines};

/// A (filename gate, line mutation) pair
///
/// Rules never fail: a missing anchor is reported as
/// [`PatchOutcome::NoAnchor`] and must leave `lines` untouched.
pub trait PatchRule: Send + Sync {
    /// Short identifier, used in logs and statistics
    fn name(&self) -> &'static str;

    /// Detailed description of what this rule does
    fn description(&self) -> &'static str;

    /// Check whether this rule applies to the file at all
    fn matches(&self, context: &PatchContext) -> bool {
        let _ = context;
        true
    }

    /// Mutate the lines of a matching file
    fn apply(&self, lines: &mut SourceLines, context: &PatchContext) -> PatchOutcome;
}

/// Rule execution statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuleStats {
    pub rule_name: String,
    /// Files that passed the filename gate
    pub files_considered: u64,
    pub files_patched: u64,
    /// Files that passed the gate but had no anchor line
    pub files_skipped: u64,
}

impl RuleStats {
    pub fn new(rule_name: String) -> Self {
        Self {
            rule_name,
            files_considered: 0,
            files_patched: 0,
            files_skipped: 0,
        }
    }

    pub fn record(&mut self, outcome: PatchOutcome) {
        self.files_considered += 1;
        match outcome {
            PatchOutcome::Patched => self.files_patched += 1,
            PatchOutcome::NoAnchor => self.files_skipped += 1,
        }
    }

    pub fn patch_rate(&self) -> f64 {
        if self.files_considered == 0 {
            0.0
        } else {
            (self.files_patched as f64) / (self.files_considered as f64)
        }
    }
}
