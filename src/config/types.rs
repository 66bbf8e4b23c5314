use std::collections::BTreeMap;

use serde::Deserialize;

/// On-disk overrides for the built-in run settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "config")]
    pub config_name: Option<String>,
    #[serde(alias = "default")]
    pub default_endpoint: Option<String>,
    pub url: Option<String>,
    pub endpoints: Option<BTreeMap<String, String>>,
    pub corpora: Option<Vec<String>>,
    pub requests: Option<BTreeMap<String, String>>,
}
