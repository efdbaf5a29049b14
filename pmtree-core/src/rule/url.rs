use super::Rule;
use crate::collection::{CollectionDocument, NodePath, request_mut, walk_mut};
use crate::error::RewriteError;
use crate::report::RewriteReport;
use serde_json::Value;
use tracing::trace;

/// Substitutes a token in request URLs.
///
/// `url.raw` matches by substring and every occurrence is replaced; `url.host`
/// entries match only when equal to the whole token.
pub struct RewriteUrlTokenRule {
    from: String,
    to: String,
}

impl RewriteUrlTokenRule {
    pub const NAME: &'static str = "rewrite_url_token";

    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    fn rewrite_raw(&self, raw: &mut String) -> bool {
        if !raw.contains(&self.from) {
            return false;
        }
        *raw = raw.replace(&self.from, &self.to);
        true
    }

    fn rewrite_url(&self, url: &mut Value, path: &NodePath) -> Result<usize, RewriteError> {
        let fields = match url {
            Value::String(raw) => return Ok(usize::from(self.rewrite_raw(raw))),
            Value::Object(fields) => fields,
            other => return Err(RewriteError::shape(path, "object or string", other)),
        };

        let mut rewritten = 0;

        match fields.get_mut("raw") {
            None | Some(Value::Null) => {}
            Some(Value::String(raw)) => {
                trace!(path = %path, before = %raw.as_str(), "rewriting url.raw");
                rewritten += usize::from(self.rewrite_raw(raw));
            }
            Some(other) => return Err(RewriteError::shape(&path.key("raw"), "string", other)),
        }

        match fields.get_mut("host") {
            None | Some(Value::Null) => {}
            Some(Value::Array(hosts)) => {
                for host in hosts.iter_mut() {
                    if host.as_str() == Some(self.from.as_str()) {
                        *host = Value::String(self.to.clone());
                        rewritten += 1;
                    }
                }
            }
            Some(other) => return Err(RewriteError::shape(&path.key("host"), "array", other)),
        }

        Ok(rewritten)
    }
}

impl Rule for RewriteUrlTokenRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(
        &self,
        document: &mut CollectionDocument,
        report: &mut RewriteReport,
    ) -> Result<(), RewriteError> {
        walk_mut(
            document.items_mut()?,
            &CollectionDocument::items_path(),
            &mut |fields, shape, path| {
                if !shape.has_request() {
                    return Ok(());
                }

                let request = request_mut(fields, path)?;
                let url = match request.get_mut("url") {
                    None | Some(Value::Null) => return Ok(()),
                    Some(url) => url,
                };

                let url_path = path.key("request").key("url");
                let rewritten = self.rewrite_url(url, &url_path)?;
                if rewritten > 0 {
                    report.change(
                        Self::NAME,
                        &url_path,
                        format!("replaced '{}' in {} place(s)", self.from, rewritten),
                    );
                }
                Ok(())
            },
        )
    }
}
