use clap::Parser;

use crate::args::CountArgs;
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::driver::CountPlan;
use crate::error::{AppError, AppResult};

/// Parses whitespace-separated CLI tokens as if they followed the binary name.
///
/// # Errors
///
/// Returns an error when clap rejects the arguments.
pub fn parse_cli_input(input: &str) -> AppResult<CountArgs> {
    let tokens = std::iter::once("grewcount").chain(input.split_whitespace().take(16));
    CountArgs::try_parse_from(tokens).map_err(AppError::from)
}

/// Parses TOML config text and applies it to the built-in plan.
///
/// # Errors
///
/// Returns an error when the TOML is invalid or the config is rejected.
pub fn apply_config_from_toml(input: &str) -> AppResult<CountPlan> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(crate::error::ConfigError::ParseToml {
            path: "<fuzz>".into(),
            source: err,
        })
    })?;
    let mut plan = CountPlan::builtin(None);
    apply_config(&mut plan, config)?;
    Ok(plan)
}

/// Parses JSON config text and applies it to the built-in plan.
///
/// # Errors
///
/// Returns an error when the JSON is invalid or the config is rejected.
pub fn apply_config_from_json(input: &str) -> AppResult<CountPlan> {
    let config: ConfigFile = serde_json::from_str(input)?;
    let mut plan = CountPlan::builtin(None);
    apply_config(&mut plan, config)?;
    Ok(plan)
}
