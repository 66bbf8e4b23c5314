//! Named deployments of the count service and selector resolution.
use std::collections::BTreeMap;

use crate::error::{ConfigError, ValidationError};

pub const LOCAL_SELECTOR: &str = "local";
pub const PROD_SELECTOR: &str = "prod";

pub(crate) const LOCAL_URL: &str = "http://localhost:4242";
pub(crate) const PROD_URL: &str = "https://count.grew.fr";

/// Mapping from a short selector name to the base URL of a deployment.
///
/// A table is never empty. When it carries a default selector, that entry is
/// used for runs that do not name one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    entries: BTreeMap<String, String>,
    default_selector: Option<String>,
}

impl EndpointTable {
    /// Builds a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns an error when the table is empty, a selector is blank, or the
    /// default selector does not name an entry.
    pub fn new(
        entries: BTreeMap<String, String>,
        default_selector: Option<String>,
    ) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyEndpoints);
        }
        if entries.keys().any(|selector| selector.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                source: ValidationError::EmptySelector,
            });
        }
        let table = Self {
            entries,
            default_selector: None,
        };
        match default_selector {
            Some(selector) if !table.entries.contains_key(&selector) => {
                Err(ConfigError::UnknownDefaultSelector {
                    selector,
                    valid: table.selector_list(),
                })
            }
            default_selector => Ok(Self {
                default_selector,
                ..table
            }),
        }
    }

    /// The deployments known out of the box. No default: a selector is required.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BTreeMap::from([
            (LOCAL_SELECTOR.to_owned(), LOCAL_URL.to_owned()),
            (PROD_SELECTOR.to_owned(), PROD_URL.to_owned()),
        ]);
        Self {
            entries,
            default_selector: None,
        }
    }

    /// A single hard-wired deployment, selected implicitly.
    #[must_use]
    pub fn single(url: String) -> Self {
        Self {
            entries: BTreeMap::from([(LOCAL_SELECTOR.to_owned(), url)]),
            default_selector: Some(LOCAL_SELECTOR.to_owned()),
        }
    }

    /// Returns the same entries with `selector` as the implicit choice.
    ///
    /// # Errors
    ///
    /// Returns an error when `selector` does not name an entry.
    pub fn with_default(self, selector: String) -> Result<Self, ConfigError> {
        Self::new(self.entries, Some(selector))
    }

    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.entries.get(selector).map(String::as_str)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn default_selector(&self) -> Option<&str> {
        self.default_selector.as_deref()
    }

    /// Comma-separated selector names, for diagnostics.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors().collect::<Vec<_>>().join(", ")
    }
}

/// Resolves the base URL a run should target.
///
/// Falls back to the table's default selector when none is given.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSelector`] when no selector is given and the
/// table has no default, and [`ConfigError::UnknownSelector`] when the selector
/// is not a key of the table.
pub fn resolve_endpoint<'table>(
    selector: Option<&str>,
    endpoints: &'table EndpointTable,
) -> Result<&'table str, ConfigError> {
    let Some(selector) = selector.or_else(|| endpoints.default_selector()) else {
        return Err(ConfigError::MissingSelector {
            valid: endpoints.selector_list(),
        });
    };
    endpoints
        .get(selector)
        .ok_or_else(|| ConfigError::UnknownSelector {
            selector: selector.to_owned(),
            valid: endpoints.selector_list(),
        })
}
