pub mod fixtures;
pub mod tracing;

pub use fixtures::{Workspace, fixture, fixture_path};
pub use tracing::{CapturedEvent, capture_events};
