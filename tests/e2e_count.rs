
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use support_count::{MockReplies, run_grewcount, spawn_count_server_or_skip};

fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("grewcount.toml");
    fs::write(&path, content).map_err(|err| format!("write config failed: {}", err))?;
    Ok((dir, path))
}

fn endpoints_config(local_url: &str) -> String {
    format!(
        "[endpoints]\nlocal = \"{}\"\nprod = \"http://127.0.0.1:9\"\n",
        local_url
    )
}

fn describe(output: &std::process::Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_local_prints_count_body_verbatim() -> Result<(), String> {
    let Some((url, server)) = spawn_count_server_or_skip(MockReplies::ok(b"OK: 42"))? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
        "local".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if output.stdout != b"OK: 42" {
        return Err(format!("Unexpected stdout.\n{}", describe(&output)));
    }

    let requests = server.requests()?;
    let lines: Vec<(&str, &str)> = requests
        .iter()
        .map(|request| (request.method.as_str(), request.path.as_str()))
        .collect();
    if lines != [("POST", "/set_config"), ("POST", "/count")] {
        return Err(format!("Unexpected requests: {:?}", lines));
    }
    Ok(())
}

#[test]
fn e2e_form_bodies_carry_config_and_payload() -> Result<(), String> {
    let Some((url, server)) = spawn_count_server_or_skip(MockReplies::ok(b"{}"))? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "-c".to_owned(),
        config.to_string_lossy().into_owned(),
        "local".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let requests = server.requests()?;
    let (Some(set_config), Some(count)) = (requests.first(), requests.get(1)) else {
        return Err(format!("Expected two requests, got {:?}", requests));
    };
    if set_config.body != "config=sud" {
        return Err(format!("Unexpected set_config body: {}", set_config.body));
    }
    if !count.body.starts_with("corpora=") || !count.body.contains("&requests=") {
        return Err(format!("Unexpected count body: {}", count.body));
    }
    if !count.body.contains("SUD_English-PUD%402.14") {
        return Err(format!("Expected built-in corpora in: {}", count.body));
    }
    Ok(())
}

#[test]
fn e2e_unknown_selector_exits_one_without_contact() -> Result<(), String> {
    let Some((url, server)) = spawn_count_server_or_skip(MockReplies::ok(b"OK: 42"))? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
        "staging".to_owned(),
    ])?;
    if output.status.code() != Some(1) {
        return Err(format!("Expected exit code 1.\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("staging") || !stderr.contains("local, prod") {
        return Err(format!("Expected selector diagnostic.\n{}", describe(&output)));
    }
    if !output.stdout.is_empty() {
        return Err(format!("Expected empty stdout.\n{}", describe(&output)));
    }
    if !server.requests()?.is_empty() {
        return Err("Mock server was contacted".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_builtin_table_rejects_unknown_selector() -> Result<(), String> {
    let output = run_grewcount(["staging"])?;
    if output.status.code() != Some(1) {
        return Err(format!("Expected exit code 1.\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Valid endpoints: local, prod") {
        return Err(format!("Expected valid selector list.\n{}", describe(&output)));
    }
    if stderr.lines().filter(|line| !line.trim().is_empty()).count() != 1 {
        return Err(format!("Expected a single diagnostic line.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_missing_selector_exits_one() -> Result<(), String> {
    let output = run_grewcount(Vec::<String>::new())?;
    if output.status.code() != Some(1) {
        return Err(format!("Expected exit code 1.\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Missing endpoint") {
        return Err(format!("Expected missing endpoint diagnostic.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_single_url_variant_runs_without_selector() -> Result<(), String> {
    let replies = MockReplies::ok(b"sv: 12\nvs: 3");
    let Some((url, server)) = spawn_count_server_or_skip(replies)? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&format!("url = \"{}\"\n", url))?;

    let output = run_grewcount(["--config".to_owned(), config.to_string_lossy().into_owned()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if output.stdout != b"sv: 12\nvs: 3" {
        return Err(format!("Unexpected stdout.\n{}", describe(&output)));
    }
    let requests = server.requests()?;
    if requests.first().map(|request| request.body.as_str()) != Some("config=sud") {
        return Err(format!("Unexpected set_config request: {:?}", requests.first()));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_service_fails() -> Result<(), String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    drop(listener);
    let (_dir, config) = write_config(&format!("url = \"http://{}\"\n", addr))?;

    let output = run_grewcount(["--config".to_owned(), config.to_string_lossy().into_owned()])?;
    if output.status.code() != Some(1) {
        return Err(format!("Expected exit code 1.\n{}", describe(&output)));
    }
    if !output.stdout.is_empty() {
        return Err(format!("Expected empty stdout.\n{}", describe(&output)));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("/set_config") {
        return Err(format!("Expected failing endpoint in error.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_set_config_error_status_still_counts() -> Result<(), String> {
    let replies = MockReplies {
        set_config_status: 500,
        ..MockReplies::ok(b"OK: 42")
    };
    let Some((url, server)) = spawn_count_server_or_skip(replies)? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
        "local".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if output.stdout != b"OK: 42" {
        return Err(format!("Unexpected stdout.\n{}", describe(&output)));
    }
    let paths: Vec<String> = server
        .requests()?
        .into_iter()
        .map(|request| request.path)
        .collect();
    if paths != ["/set_config", "/count"] {
        return Err(format!("Unexpected requests: {:?}", paths));
    }
    Ok(())
}

#[test]
fn e2e_count_error_status_body_is_printed() -> Result<(), String> {
    let replies = MockReplies {
        count_status: 500,
        ..MockReplies::ok(b"pattern error: unexpected token\n")
    };
    let Some((url, _server)) = spawn_count_server_or_skip(replies)? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
        "local".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if output.stdout != b"pattern error: unexpected token\n" {
        return Err(format!("Unexpected stdout.\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_non_utf8_body_reaches_stdout_unchanged() -> Result<(), String> {
    let body: &[u8] = b"\xEF\xBB\xBFOK \xFF";
    let Some((url, _server)) = spawn_count_server_or_skip(MockReplies::ok(body))? else {
        return Ok(());
    };
    let (_dir, config) = write_config(&endpoints_config(&url))?;

    let output = run_grewcount([
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
        "local".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if output.stdout != body {
        return Err(format!("Unexpected stdout bytes: {:?}", output.stdout));
    }
    Ok(())
}
