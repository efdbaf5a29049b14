//! Parse → apply rules → serialize.
//!
//! The free functions are the pure API: each consumes its input document and
//! only hands a document back when every rule succeeded, so a failed chain
//! can never leak a half-rewritten tree. [`CollectionTreeRewriter`] bundles a
//! validated rule chain for repeated use, e.g. across every file of a batch.

use crate::collection::CollectionDocument;
use crate::error::RewriteError;
use crate::report::RewriteReport;
use crate::rule::{RewriteRule, RulePipeline};

/// A rewritten document and what happened to it.
#[derive(Debug, Clone)]
pub struct Rewritten {
    pub document: CollectionDocument,
    pub report: RewriteReport,
}

pub fn parse(raw: &str) -> Result<CollectionDocument, RewriteError> {
    CollectionDocument::parse(raw)
}

pub fn serialize(document: &CollectionDocument) -> Result<String, RewriteError> {
    document.serialize()
}

pub fn apply_rule(
    document: CollectionDocument,
    rule: &RewriteRule,
) -> Result<Rewritten, RewriteError> {
    apply_rules(document, std::slice::from_ref(rule))
}

pub fn apply_rules(
    document: CollectionDocument,
    rules: &[RewriteRule],
) -> Result<Rewritten, RewriteError> {
    let pipeline = RulePipeline::from_config(rules)?;
    run_pipeline(&pipeline, document, RewriteReport::default())
}

fn run_pipeline(
    pipeline: &RulePipeline,
    mut document: CollectionDocument,
    mut report: RewriteReport,
) -> Result<Rewritten, RewriteError> {
    pipeline.run(&mut document, &mut report)?;
    Ok(Rewritten { document, report })
}

/// A validated rule chain, built once and applied to any number of documents.
pub struct CollectionTreeRewriter {
    pipeline: RulePipeline,
}

impl CollectionTreeRewriter {
    pub fn new(rules: &[RewriteRule]) -> Result<Self, RewriteError> {
        Ok(Self {
            pipeline: RulePipeline::from_config(rules)?,
        })
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.pipeline.rule_names()
    }

    pub fn apply(&self, document: CollectionDocument) -> Result<Rewritten, RewriteError> {
        run_pipeline(&self.pipeline, document, RewriteReport::default())
    }

    /// Parses `raw` and applies the chain. A substituted `item` array shows up
    /// as a warning in the returned report.
    pub fn rewrite(&self, raw: &str) -> Result<Rewritten, RewriteError> {
        let document = parse(raw)?;
        let mut report = RewriteReport::default();
        if let Some(warning) = document.substitution_warning() {
            report.warning(warning, Some(&CollectionDocument::items_path()));
        }
        run_pipeline(&self.pipeline, document, report)
    }

    /// [`CollectionTreeRewriter::rewrite`] followed by serialization.
    pub fn rewrite_to_string(&self, raw: &str) -> Result<(String, RewriteReport), RewriteError> {
        let rewritten = self.rewrite(raw)?;
        let text = serialize(&rewritten.document)?;
        Ok((text, rewritten.report))
    }
}
