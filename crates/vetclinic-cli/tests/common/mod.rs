#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use wiremock::MockServer;

/// Base URL of a mock API server.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Run the CLI with a custom HOME directory for isolated session storage.
pub fn run_cli_with_env(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vetclinic"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("VETCLINIC_API_URL", api_url);
    cmd.env("NO_COLOR", "1");
    for var in [
        "VETCLINIC_LOCALE",
        "VETCLINIC_PAGE_SIZE",
        "VETCLINIC_TIMEOUT_SECS",
        "VETCLINIC_TOKEN",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with a custom HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli_with_env(args, home, api_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with a custom HOME and expect failure; returns stderr.
pub fn run_cli_with_env_failure(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli_with_env(args, home, api_url);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Log in without contacting the API.
pub fn login_as(home: &Path, api_url: &str, role: &str) {
    run_cli_with_env_success(
        &[
            "login", "--user-id", "u1", "--username", "lgomez", "--role", role,
        ],
        home,
        api_url,
    );
}
