#![no_main]

use grewcount::endpoints::resolve_endpoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(plan) = grewcount::fuzzing::apply_config_from_toml(input) {
            debug_assert!(plan.endpoints.selectors().next().is_some());
            debug_assert!(!plan.payload.corpora.is_empty());
            debug_assert!(!plan.payload.requests.is_empty());
            if let Some(selector) = plan.endpoints.default_selector() {
                debug_assert!(resolve_endpoint(Some(selector), &plan.endpoints).is_ok());
            }
        }
    }
});
