mod discover;
mod environment;
mod error;
mod recipe;

pub use discover::{COLLECTION_GLOB, discover, resolve_glob};
pub use environment::{
    BASE_URL_KEY, EnvironmentConfig, EnvironmentValue, SERVICE_VARIABLE_PREFIX, load_environment,
    parse_environment,
};
pub use error::ConfigError;
pub use recipe::{RECIPE_VERSION, RecipeConfig, load_recipe, parse_recipe};
