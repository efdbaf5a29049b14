use crate::batch::config::{
    BASE_URL_TEMPLATE, BatchConfig, LEGACY_BASE_URL_KEY, LEGACY_BASE_URL_TOKEN,
};
use crate::collection::CollectionDocument;
use crate::conf::BASE_URL_KEY;
use crate::report::RewriteReport;
use crate::rule::RewriteRule;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanDecision {
    Apply(Vec<RewriteRule>),
    Skip(String),
}

/// Decides the rule chain for one file of a batch.
pub trait FilePlanner: Send + Sync {
    fn plan(
        &self,
        path: &Path,
        document: &CollectionDocument,
        report: &mut RewriteReport,
    ) -> PlanDecision;
}

/// The same rules for every file.
pub struct RecipePlanner {
    rules: Vec<RewriteRule>,
}

impl RecipePlanner {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }
}

impl FilePlanner for RecipePlanner {
    fn plan(&self, _: &Path, _: &CollectionDocument, _: &mut RewriteReport) -> PlanDecision {
        PlanDecision::Apply(self.rules.clone())
    }
}

/// Service name from a collection filename: everything before the first `.`.
///
/// `orders.postman.json` → `orders`.
pub fn service_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.split('.').next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Routes every request of a collection through its microservice prefix.
pub struct UrlRewritePlanner {
    config: Arc<BatchConfig>,
}

impl UrlRewritePlanner {
    pub fn new(config: Arc<BatchConfig>) -> Self {
        Self { config }
    }
}

impl FilePlanner for UrlRewritePlanner {
    fn plan(
        &self,
        path: &Path,
        document: &CollectionDocument,
        report: &mut RewriteReport,
    ) -> PlanDecision {
        if document.items_were_missing() {
            return PlanDecision::Skip("collection has no item array".to_string());
        }

        let Some(service) = service_name(path) else {
            return PlanDecision::Skip("cannot derive a service name from the filename".to_string());
        };

        let (token, known) = self.config.service_token(&service);
        if !known {
            report.warning(
                format!("environment defines no variable for service '{service}', using '{token}'"),
                None,
            );
        }
        debug!(service = %service, token = %token, "planned url rewrite");

        let mut rules = vec![
            RewriteRule::rewrite_url_token(
                LEGACY_BASE_URL_TOKEN,
                format!("{BASE_URL_TEMPLATE}/{{{{{token}}}}}"),
            ),
            RewriteRule::remove_variable(LEGACY_BASE_URL_KEY),
        ];

        if !document.has_variable(BASE_URL_KEY) {
            rules.push(RewriteRule::upsert_variable(BASE_URL_KEY, BASE_URL_TEMPLATE));
        }

        if !document.has_variable(&token) {
            let value = self
                .config
                .service_value(&token)
                .map(str::to_string)
                .unwrap_or_else(|| format!("services/{service}"));
            rules.push(RewriteRule::upsert_variable(token, value));
        }

        PlanDecision::Apply(rules)
    }
}
