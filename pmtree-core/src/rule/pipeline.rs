use super::{Rule, RewriteRule};
use crate::collection::CollectionDocument;
use crate::error::RewriteError;
use crate::report::RewriteReport;
use tracing::{debug, warn};

/// An ordered, fail-fast chain of rules.
pub struct RulePipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl RulePipeline {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn from_config(rules: &[RewriteRule]) -> Result<Self, RewriteError> {
        let rules = rules
            .iter()
            .map(RewriteRule::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule in order, stopping at the first failure.
    pub fn run(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        for rule in &self.rules {
            let before = report.changes.len();
            if let Err(err) = rule.apply(document, report) {
                warn!(rule = rule.name(), error = %err, "rule failed, aborting chain");
                return Err(err);
            }
            debug!(
                rule = rule.name(),
                changes = report.changes.len() - before,
                "rule applied"
            );
        }
        Ok(())
    }
}
