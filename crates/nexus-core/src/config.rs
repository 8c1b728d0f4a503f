//! Process-wide configuration, read from the environment once at startup.

const DEFAULT_WEATHER_CITY: &str = "London";

/// Settings for the backend services.
///
/// Absence of the optional weather key selects the fallback weather response
/// rather than failing startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub weather_api_key: Option<String>,
    pub weather_city: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            weather_api_key: non_empty(std::env::var("NEXUS_WEATHER_API_KEY").ok()),
            weather_city: non_empty(std::env::var("NEXUS_WEATHER_CITY").ok())
                .unwrap_or_else(|| String::from(DEFAULT_WEATHER_CITY)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let config = Config::default();
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn blank_values_count_as_absent() {
        assert_eq!(non_empty(Some(String::from("  "))), None);
        assert_eq!(
            non_empty(Some(String::from("key"))),
            Some(String::from("key"))
        );
    }
}
