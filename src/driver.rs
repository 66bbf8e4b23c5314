//! Request driver: resolve the deployment, push the grammar configuration,
//! submit the count query, and print what the service answers.
use std::io::Write;

use crate::endpoints::{EndpointTable, resolve_endpoint};
use crate::error::AppResult;
use crate::http::{FormTransport, endpoint_url};
use crate::payload::{DEFAULT_CONFIG_NAME, QueryPayload};

pub(crate) const SET_CONFIG_PATH: &str = "set_config";
pub(crate) const COUNT_PATH: &str = "count";
pub(crate) const CONFIG_FIELD: &str = "config";

/// Everything a run needs before the first request goes out.
#[derive(Debug, Clone)]
pub struct CountPlan {
    pub endpoints: EndpointTable,
    pub selector: Option<String>,
    pub config_name: String,
    pub payload: QueryPayload,
}

impl CountPlan {
    /// Built-in endpoints, `sud` configuration, and the built-in payload.
    #[must_use]
    pub fn builtin(selector: Option<String>) -> Self {
        Self {
            endpoints: EndpointTable::builtin(),
            selector,
            config_name: DEFAULT_CONFIG_NAME.to_owned(),
            payload: QueryPayload::builtin(),
        }
    }
}

/// Posts `config = config_name` to `{base_url}/set_config`.
///
/// The response is not inspected.
///
/// # Errors
///
/// Returns an error when the URL is invalid or the request fails in transport.
pub async fn set_remote_configuration<T>(
    transport: &T,
    base_url: &str,
    config_name: &str,
) -> AppResult<()>
where
    T: FormTransport + Sync + ?Sized,
{
    let url = endpoint_url(base_url, SET_CONFIG_PATH)?;
    tracing::debug!("Setting remote configuration '{}' via {}", config_name, url);
    let fields = [(CONFIG_FIELD.to_owned(), config_name.to_owned())];
    drop(transport.post_form(url, &fields).await?);
    Ok(())
}

/// Posts the payload to `{base_url}/count` and returns the response body bytes undecoded.
///
/// # Errors
///
/// Returns an error when the URL is invalid, the payload cannot be serialized,
/// or the request fails in transport.
pub async fn submit_count_query<T>(
    transport: &T,
    base_url: &str,
    payload: &QueryPayload,
) -> AppResult<Vec<u8>>
where
    T: FormTransport + Sync + ?Sized,
{
    let url = endpoint_url(base_url, COUNT_PATH)?;
    let fields = payload.form_fields()?;
    tracing::debug!(
        "Submitting {} patterns over {} corpora to {}",
        payload.requests.len(),
        payload.corpora.len(),
        url
    );
    transport.post_form(url, &fields).await
}

/// Runs the whole sequence and writes the `/count` body to `out` verbatim.
///
/// The endpoint is resolved before anything is sent, and `/set_config` finishes
/// before `/count` starts.
///
/// # Errors
///
/// Returns a configuration error for a missing or unknown selector (no request
/// is sent in that case), and propagates transport and output errors.
pub async fn run_count<T, W>(plan: &CountPlan, transport: &T, out: &mut W) -> AppResult<()>
where
    T: FormTransport + Sync + ?Sized,
    W: Write,
{
    let base_url = resolve_endpoint(plan.selector.as_deref(), &plan.endpoints)?;
    tracing::debug!("Using endpoint {}", base_url);

    set_remote_configuration(transport, base_url, &plan.config_name).await?;
    let body = submit_count_query(transport, base_url, &plan.payload).await?;

    out.write_all(&body)?;
    out.flush()?;
    Ok(())
}
