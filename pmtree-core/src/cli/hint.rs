use crate::conf::ConfigError;
use crate::error::RewriteError;

/// Prints a failed command's error chain and, when one applies, a hint.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("error: {err:#}");
    if let Some(hint) = error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.chain().find_map(|e| e.downcast_ref::<RewriteError>()) {
        return rewrite_error_hint(err);
    }
    if let Some(err) = err.chain().find_map(|e| e.downcast_ref::<ConfigError>()) {
        return config_error_hint(err);
    }
    None
}

fn rewrite_error_hint(err: &RewriteError) -> Option<&'static str> {
    match err {
        RewriteError::MissingArgument { .. } => Some(
            "Pass the collection file (or directory) to operate on.\n\
             \n\
             Example:\n\
             \n\
             pmtree auth-header collections/orders.postman.json",
        ),

        RewriteError::MalformedDocument { .. } => Some(
            "The file must contain a single JSON object, as exported by Postman\n\
             (Collection v2.1).",
        ),

        RewriteError::ShapeViolation { .. } => Some(
            "Folders keep their children in an `item` array and requests keep their\n\
             headers in `request.header`. Fix the node at the reported path and run again;\n\
             the file was not modified.",
        ),

        RewriteError::InvalidRule { .. } | RewriteError::Serialize { .. } => None,
    }
}

fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ParseRecipe { .. } | ConfigError::InvalidRecipe { .. } => Some(
            "Recipes list rules in order.\n\
             \n\
             Example:\n\
             \n\
             version: \"1\"\n\
             rules:\n\
             \x20 - rule: upsert_header\n\
             \x20   key: Authorization\n\
             \x20   value: \"Bearer {{access_token}}\"\n\
             \x20 - rule: group_leaves_by_ancestor\n\
             \x20   depth: 2",
        ),

        ConfigError::ParseEnvironment { .. } => Some(
            "The environment file must be a Postman environment export:\n\
             \n\
             { \"values\": [ { \"key\": \"baseURL\", \"value\": \"https://api.example.com\" } ] }",
        ),

        ConfigError::NotADirectory { .. } => {
            Some("rewrite-urls works on a directory of *.postman.json files.")
        }

        _ => None,
    }
}
