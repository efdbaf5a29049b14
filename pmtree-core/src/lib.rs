//! Tree rewriting for Postman collection documents.
//!
//! The core never performs I/O: callers hand it raw collection text, a list of
//! [`RewriteRule`]s, and get back the rewritten document plus a report of what
//! changed. The `conf`, `batch` and `cli` modules are the host layers that read
//! and write files around it.

pub mod batch;
pub mod cli;
pub mod collection;
pub mod conf;
pub mod error;
pub mod logging;
pub mod report;
pub mod rewriter;
pub mod rule;

pub use collection::CollectionDocument;
pub use error::RewriteError;
pub use report::RewriteReport;
pub use rewriter::{CollectionTreeRewriter, Rewritten};
pub use rule::RewriteRule;
