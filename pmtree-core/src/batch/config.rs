use crate::conf::{EnvironmentConfig, SERVICE_VARIABLE_PREFIX};

/// Placeholder the exported collections use for their host.
pub const LEGACY_BASE_URL_TOKEN: &str = "{{baseUrl}}";
pub const LEGACY_BASE_URL_KEY: &str = "baseUrl";
pub const BASE_URL_TEMPLATE: &str = "{{baseURL}}";

/// Environment-derived values for a URL-rewrite batch.
///
/// Built once by the host before any file is touched and shared read-only
/// with every per-file pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConfig {
    pub base_url: Option<String>,
    /// `ms_*` entries in environment order.
    pub service_variables: Vec<(String, String)>,
}

impl BatchConfig {
    pub fn from_environment(environment: &EnvironmentConfig) -> Self {
        Self {
            base_url: environment.base_url().map(str::to_string),
            service_variables: environment
                .service_variables()
                .map(|v| (v.key.clone(), v.value.clone()))
                .collect(),
        }
    }

    pub fn service_value(&self, token: &str) -> Option<&str> {
        self.service_variables
            .iter()
            .find(|(key, _)| key == token)
            .map(|(_, value)| value.as_str())
    }

    /// Picks the variable name a service routes through.
    ///
    /// Names already carrying the `ms_` prefix are used as-is; otherwise
    /// `ms_<name>` is used when the environment defines it. Falls back to the
    /// bare name, returning `false` to flag the miss.
    pub fn service_token(&self, service: &str) -> (String, bool) {
        if service.starts_with(SERVICE_VARIABLE_PREFIX) {
            let known = self.service_value(service).is_some();
            return (service.to_string(), known);
        }

        let prefixed = format!("{SERVICE_VARIABLE_PREFIX}{service}");
        if self.service_value(&prefixed).is_some() {
            return (prefixed, true);
        }

        (service.to_string(), false)
    }
}
