use std::env;

const API_SCHEME: &str = "GH_FOLLOWERS_API_SCHEME";
const API_HOST: &str = "GH_FOLLOWERS_API_HOST";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSettings {
    pub scheme: String,
    pub host: String,
}

impl ApiSettings {
    pub fn new_from_env() -> Self {
        Self::new_from_lookup(|key| env::var(key).ok())
    }

    // Empty values fall back to the defaults, same as unset ones
    pub fn new_from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            scheme: read(API_SCHEME).unwrap_or(defaults.scheme),
            host: read(API_HOST).unwrap_or(defaults.host),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "api.github.com".to_string(),
        }
    }
}

pub struct FollowersSettings {
    pub api: ApiSettings,
}

impl FollowersSettings {
    pub fn new_from_env() -> Self {
        Self {
            api: ApiSettings::new_from_env(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_to_github() {
        let settings = ApiSettings::new_from_lookup(|_| None);
        assert_eq!(settings.scheme, "https");
        assert_eq!(settings.host, "api.github.com");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars = HashMap::from([(API_SCHEME, "http"), (API_HOST, "localhost:8080")]);
        let settings = ApiSettings::new_from_lookup(lookup_in(vars));
        assert_eq!(
            settings,
            ApiSettings {
                scheme: "http".to_string(),
                host: "localhost:8080".to_string()
            }
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let vars = HashMap::from([(API_HOST, "  ")]);
        let settings = ApiSettings::new_from_lookup(lookup_in(vars));
        assert_eq!(settings.host, "api.github.com");
    }
}
