use std::path::PathBuf;

use labdesk_catalogue::DEFAULT_CATALOGUE_KEY;

/// Store directory used when `LABDESK_STORE_DIR` is unset.
pub const DEFAULT_STORE_DIR: &str = ".labdesk";

/// Settings for a single inspection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub store_dir: PathBuf,
    pub catalogue_key: String,
    /// Also call the chemistry API health endpoint.
    pub probe_api: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            catalogue_key: DEFAULT_CATALOGUE_KEY.to_string(),
            probe_api: false,
        }
    }
}

impl InspectConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let store_dir = non_blank("LABDESK_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
        let catalogue_key = non_blank("LABDESK_CATALOGUE_KEY")
            .unwrap_or_else(|| DEFAULT_CATALOGUE_KEY.to_string());
        let probe_api = non_blank("LABDESK_PROBE_API")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            store_dir,
            catalogue_key,
            probe_api,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = InspectConfig::from_lookup(lookup(&[]));
        assert_eq!(config, InspectConfig::default());
        assert_eq!(config.catalogue_key, "asset-catalogue");
        assert!(!config.probe_api);
    }

    #[test]
    fn overrides_are_read() {
        let config = InspectConfig::from_lookup(lookup(&[
            ("LABDESK_STORE_DIR", "/var/lib/labdesk"),
            ("LABDESK_CATALOGUE_KEY", "staging-assets"),
            ("LABDESK_PROBE_API", "TRUE"),
        ]));
        assert_eq!(config.store_dir, PathBuf::from("/var/lib/labdesk"));
        assert_eq!(config.catalogue_key, "staging-assets");
        assert!(config.probe_api);
    }

    #[test]
    fn unrecognised_flag_is_off() {
        let config = InspectConfig::from_lookup(lookup(&[
            ("LABDESK_PROBE_API", "maybe"),
            ("LABDESK_CATALOGUE_KEY", "  "),
        ]));
        assert!(!config.probe_api);
        assert_eq!(config.catalogue_key, DEFAULT_CATALOGUE_KEY);
    }
}
