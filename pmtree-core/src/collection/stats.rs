use crate::collection::{CollectionDocument, NodeShape, walk};
use crate::error::RewriteError;
use serde::Serialize;

/// Shape summary of a collection, as printed by `pmtree check`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub folders: usize,
    pub requests: usize,
    pub mixed: usize,
    pub variables: usize,
    pub max_depth: usize,
}

impl CollectionStats {
    pub fn collect(document: &CollectionDocument) -> Result<Self, RewriteError> {
        let mut stats = Self {
            variables: document.variables().len(),
            ..Self::default()
        };

        walk(
            document.items(),
            &CollectionDocument::items_path(),
            &mut |_, shape, path| {
                stats.max_depth = stats.max_depth.max(path.depth());
                match shape {
                    NodeShape::Folder => stats.folders += 1,
                    NodeShape::Request => stats.requests += 1,
                    NodeShape::Mixed => stats.mixed += 1,
                    NodeShape::Leaf => {}
                }
            },
        )?;

        Ok(stats)
    }
}
