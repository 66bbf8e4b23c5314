#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(plan) = grewcount::fuzzing::apply_config_from_json(input) {
            debug_assert!(!plan.config_name.trim().is_empty());
            debug_assert!(plan.payload.form_fields().is_ok());
        }
    }
});
