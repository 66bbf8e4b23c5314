use clap::Parser;

use super::parsers::parse_bool_env;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Push a grammar configuration to a Grew count service and submit a batch pattern-count query."
)]
pub struct CountArgs {
    /// Deployment to target (e.g. local, prod)
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to a config file (.toml or .json) overriding endpoints, corpora, or requests
    #[arg(long, short)]
    pub config: Option<String>,

    /// Enable debug logging (unless overridden by GREWCOUNT_LOG/RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
