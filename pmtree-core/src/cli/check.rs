use crate::collection::{CollectionDocument, CollectionStats};
use crate::conf::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

pub(crate) fn check(path: &Path) -> Result<ExitCode> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let document = CollectionDocument::parse(&raw)?;
    let stats = CollectionStats::collect(&document)?;

    println!("✔ Collection parsed successfully");
    if let Some(name) = document.name() {
        println!("✔ name: {name}");
    }
    if document.items_were_missing() {
        println!("! no item array (an empty one would be substituted)");
    }
    println!("✔ {} folders", stats.folders);
    println!("✔ {} requests", stats.requests);
    if stats.mixed > 0 {
        println!("! {} nodes carry both a request and children", stats.mixed);
    }
    println!("✔ {} variables", stats.variables);
    println!("✔ max depth {}", stats.max_depth);

    Ok(ExitCode::SUCCESS)
}
