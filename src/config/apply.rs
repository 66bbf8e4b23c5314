use crate::driver::CountPlan;
use crate::endpoints::EndpointTable;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::payload::QueryPayload;

use super::types::ConfigFile;

/// Overlays a loaded config file onto `plan`.
///
/// Only fields present in the file change; the CLI selector is left alone.
///
/// # Errors
///
/// Returns an error when the file sets conflicting fields or a value that
/// would leave the run without a usable endpoint table or payload.
pub fn apply_config(plan: &mut CountPlan, config: ConfigFile) -> AppResult<()> {
    let ConfigFile {
        config_name,
        default_endpoint,
        url,
        endpoints,
        corpora,
        requests,
    } = config;

    if let Some(config_name) = config_name {
        if config_name.trim().is_empty() {
            return Err(invalid_value(ValidationError::EmptyConfigName));
        }
        plan.config_name = config_name;
    }

    plan.endpoints = match (url, endpoints) {
        (Some(_), Some(_)) => {
            return Err(AppError::config(ConfigError::Conflict {
                left: "url",
                right: "endpoints",
            }));
        }
        (Some(url), None) => match default_endpoint {
            Some(selector) => EndpointTable::single(url).with_default(selector)?,
            None => EndpointTable::single(url),
        },
        (None, Some(entries)) => EndpointTable::new(entries, default_endpoint)?,
        (None, None) => match default_endpoint {
            Some(selector) => plan.endpoints.clone().with_default(selector)?,
            None => plan.endpoints.clone(),
        },
    };

    if corpora.is_some() || requests.is_some() {
        let payload = QueryPayload::new(
            corpora.unwrap_or_else(|| plan.payload.corpora.clone()),
            requests.unwrap_or_else(|| plan.payload.requests.clone()),
        )
        .map_err(invalid_value)?;
        plan.payload = payload;
    }

    Ok(())
}

fn invalid_value(source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidValue { source })
}
