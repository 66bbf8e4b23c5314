//! The batch query sent to `/count`.
use std::collections::BTreeMap;

use crate::error::{AppResult, ValidationError};

/// Grammar configuration pushed to `/set_config` before counting.
pub const DEFAULT_CONFIG_NAME: &str = "sud";

pub(crate) const CORPORA_FIELD: &str = "corpora";
pub(crate) const REQUESTS_FIELD: &str = "requests";

const DEFAULT_CORPORA: [&str; 20] = [
    "SUD_Arabic-PUD@2.14",
    "SUD_Chinese-PUD@2.14",
    "SUD_Czech-PUD@2.14",
    "SUD_English-PUD@2.14",
    "SUD_Finnish-PUD@2.14",
    "SUD_French-PUD@2.14",
    "SUD_German-PUD@2.14",
    "SUD_Hindi-PUD@2.14",
    "SUD_Icelandic-PUD@2.14",
    "SUD_Indonesian-PUD@2.14",
    "SUD_Italian-PUD@2.14",
    "SUD_Japanese-PUD@2.14",
    "SUD_Korean-PUD@2.14",
    "SUD_Polish-PUD@2.14",
    "SUD_Portuguese-PUD@2.14",
    "SUD_Russian-PUD@2.14",
    "SUD_Spanish-PUD@2.14",
    "SUD_Swedish-PUD@2.14",
    "SUD_Thai-PUD@2.14",
    "SUD_Turkish-PUD@2.14",
];

const DEFAULT_REQUESTS: [(&str, &str); 2] = [
    ("sv", "pattern { V -[subj]-> S; S << V }"),
    ("vs", "pattern { V -[subj]-> S; V << S }"),
];

/// Corpora and named patterns for one count call.
///
/// Pattern expressions are opaque: they are forwarded as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPayload {
    pub corpora: Vec<String>,
    pub requests: BTreeMap<String, String>,
}

impl QueryPayload {
    /// Builds a payload from operator-provided values.
    ///
    /// # Errors
    ///
    /// Returns an error when either the corpus list or the request map is empty.
    pub fn new(
        corpora: Vec<String>,
        requests: BTreeMap<String, String>,
    ) -> Result<Self, ValidationError> {
        if corpora.is_empty() {
            return Err(ValidationError::EmptyCorpora);
        }
        if requests.is_empty() {
            return Err(ValidationError::EmptyRequests);
        }
        Ok(Self { corpora, requests })
    }

    /// Subject/verb order over the SUD PUD treebanks.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            corpora: DEFAULT_CORPORA.iter().map(|&corpus| corpus.to_owned()).collect(),
            requests: DEFAULT_REQUESTS
                .iter()
                .map(|&(name, pattern)| (name.to_owned(), pattern.to_owned()))
                .collect(),
        }
    }

    /// Text blob for the `corpora` form field: a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn corpora_text(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.corpora)?)
    }

    /// Text blob for the `requests` form field: a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn requests_text(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.requests)?)
    }

    /// Both form fields, `corpora` first.
    ///
    /// # Errors
    ///
    /// Returns an error if either field cannot be serialized.
    pub fn form_fields(&self) -> AppResult<Vec<(String, String)>> {
        Ok(vec![
            (CORPORA_FIELD.to_owned(), self.corpora_text()?),
            (REQUESTS_FIELD.to_owned(), self.requests_text()?),
        ])
    }
}
