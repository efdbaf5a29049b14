use crate::conf::ConfigError;
use crate::rule::RewriteRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const RECIPE_VERSION: &str = "1";

/// An ordered list of rules to apply to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeConfig {
    #[serde(default = "default_version")]
    pub version: String,
    pub rules: Vec<RewriteRule>,
}

fn default_version() -> String {
    RECIPE_VERSION.to_string()
}

impl RecipeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != RECIPE_VERSION {
            return Err(ConfigError::InvalidRecipe {
                reason: format!(
                    "unsupported version '{}' (expected '{RECIPE_VERSION}')",
                    self.version
                ),
            });
        }

        if self.rules.is_empty() {
            return Err(ConfigError::InvalidRecipe {
                reason: "recipe has no rules".to_string(),
            });
        }

        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate().map_err(|e| ConfigError::InvalidRecipe {
                reason: format!("rules[{index}]: {e}"),
            })?;
        }

        Ok(())
    }
}

/// Parses a recipe: YAML for `.yaml`/`.yml` paths, JSON otherwise.
pub fn parse_recipe(raw: &str, path: &Path) -> Result<RecipeConfig, ConfigError> {
    let is_yaml = path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml");

    let recipe: RecipeConfig = if is_yaml {
        serde_yaml::from_str(raw).map_err(|e| ConfigError::ParseRecipe {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(raw).map_err(|e| ConfigError::ParseRecipe {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    };

    recipe.validate()?;
    Ok(recipe)
}

pub fn load_recipe(path: &Path) -> Result<RecipeConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_recipe(&raw, path)
}
