use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const ADMIN_KEY: &str = "admin-secret";

fn bare_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("usermanager"));
    cmd.current_dir(workdir)
        .env_remove("BASE_URL")
        .env_remove("ADMIN_KEY")
        .env_remove("USERMANAGER_APP_VERSION")
        .env_remove("USERMANAGER_TIMEOUT_SECS");
    cmd
}

fn base_cmd(workdir: &Path, base_url: &str) -> Command {
    let mut cmd = bare_cmd(workdir);
    cmd.env("BASE_URL", base_url).env("ADMIN_KEY", ADMIN_KEY);
    cmd
}

#[test]
fn create_prints_message_only() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/user")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "userId": "alice",
            "authKey": ADMIN_KEY
        })))
        .with_status(200)
        .with_body(r#"{"message":"ok"}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["create", "alice"])
        .assert()
        .success()
        .stdout("Response: ok\n")
        .stderr("");
    mock.assert();
}

#[test]
fn delete_and_reset_use_user_endpoint_methods() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/user")
        .match_body(Matcher::PartialJson(json!({"userId": "bob"})))
        .with_status(200)
        .with_body(r#"{"message":"User deleted"}"#)
        .create();
    let reset = server
        .mock("PUT", "/user")
        .match_body(Matcher::PartialJson(json!({"userId": "bob"})))
        .with_status(200)
        .with_body(r#"{"message":"User key reset"}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["delete", "bob"])
        .assert()
        .success()
        .stdout("Response: User deleted\n");
    base_cmd(workdir.path(), &server.url())
        .args(["reset", "bob"])
        .assert()
        .success()
        .stdout("Response: User key reset\n");
    delete.assert();
    reset.assert();
}

#[test]
fn list_prints_each_user_once_in_order() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let body = json!({
        "users": [
            {"userId": "carol", "deviceId": "", "timestamp": "1700000000"},
            {"userId": "alice", "deviceId": "x", "timestamp": "1700000001"},
            {"userId": "bob", "deviceId": "", "timestamp": "1700000002"}
        ]
    });
    server
        .mock("POST", "/users")
        .with_status(200)
        .with_body(body.to_string())
        .create();

    base_cmd(workdir.path(), &server.url())
        .arg("list")
        .assert()
        .success()
        .stdout("Users:\n\tcarol\n\talice\n\tbob\n");
}

#[test]
fn error_status_reports_raw_body_and_exits_cleanly() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/user")
        .with_status(401)
        .with_body("not json at all")
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["create", "alice"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Request failed: 401"))
        .stderr(predicate::str::contains("not json at all"))
        .stderr(predicate::str::contains("Error parsing response").not());
}

#[test]
fn malformed_body_dumps_raw_response() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/users")
        .with_status(200)
        .with_body("{\"users\": [")
        .create();

    base_cmd(workdir.path(), &server.url())
        .arg("list")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Error parsing response"))
        .stderr(predicate::str::contains("Raw response: {\"users\": ["));
}

#[test]
fn auth_logs_render_in_korea_time() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let body = json!({
        "logs": [{
            "userId": "alice",
            "message": "401: Authentication failure",
            "timestamp": "0",
            "deviceId": "dev-1",
            "success": false,
            "ip": "203.0.113.7"
        }]
    });
    let mock = server
        .mock("POST", "/log/auth/alice")
        .match_body(Matcher::Json(json!({"authKey": ADMIN_KEY})))
        .with_status(200)
        .with_body(body.to_string())
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["auth-logs", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Auth Logs:"))
        .stdout(predicate::str::contains(
            "Timestamp (KST): 1970-01-01 09:00:00 KST",
        ))
        .stdout(predicate::str::contains("Success: false"))
        .stdout(predicate::str::contains("IP: 203.0.113.7"));
    mock.assert();
}

#[test]
fn auth_logs_without_entries_says_so() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/log/auth/ghost")
        .with_status(200)
        .with_body(r#"{"logs":[]}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["auth-logs", "ghost"])
        .assert()
        .success()
        .stdout("No logs found.\n");
}

#[test]
fn cleanup_and_clear_logs_hit_log_endpoints() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let cleanup = server
        .mock("POST", "/log/cleanup")
        .match_body(Matcher::Json(json!({"authKey": ADMIN_KEY})))
        .with_status(200)
        .with_body(r#"{"message":"Cleanup started"}"#)
        .create();
    let clear = server
        .mock("DELETE", "/log")
        .match_body(Matcher::Json(json!({"authKey": ADMIN_KEY})))
        .with_status(200)
        .with_body(r#"{"message":"Logs cleared"}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .arg("cleanup-logs")
        .assert()
        .success()
        .stdout("Response: Cleanup started\n");
    base_cmd(workdir.path(), &server.url())
        .arg("clear-logs")
        .assert()
        .success()
        .stdout("Response: Logs cleared\n");
    cleanup.assert();
    clear.assert();
}

#[test]
fn missing_admin_key_halts_before_request() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mock = server.mock("POST", "/users").expect(0).create();

    bare_cmd(workdir.path())
        .env("BASE_URL", server.url())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "BASE_URL and ADMIN_KEY must be set",
        ));
    mock.assert();
}

#[test]
fn missing_base_url_halts_before_request() {
    let workdir = tempdir().expect("tempdir");

    bare_cmd(workdir.path())
        .env("ADMIN_KEY", ADMIN_KEY)
        .args(["create", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "BASE_URL and ADMIN_KEY must be set",
        ));
}

#[test]
fn dotenv_file_supplies_configuration() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/user")
        .match_body(Matcher::Json(json!({
            "userId": "dana",
            "authKey": "from-dotenv",
            "appVersion": "3.1.0"
        })))
        .with_status(201)
        .with_body(r#"{"message":"User created"}"#)
        .create();
    fs::write(
        workdir.path().join(".env"),
        format!(
            "BASE_URL={}\nADMIN_KEY=from-dotenv\nUSERMANAGER_APP_VERSION=3.1.0\n",
            server.url()
        ),
    )
    .expect("write .env");

    bare_cmd(workdir.path())
        .args(["create", "dana"])
        .assert()
        .success()
        .stdout("Response: User created\n");
    mock.assert();
}

#[test]
fn flags_override_environment() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/users")
        .match_body(Matcher::Json(json!({"authKey": "flag-key"})))
        .with_status(200)
        .with_body(r#"{"users":[]}"#)
        .create();

    base_cmd(workdir.path(), "http://127.0.0.1:1")
        .args(["--base-url", &server.url(), "--admin-key", "flag-key", "list"])
        .assert()
        .success()
        .stdout("");
    mock.assert();
}

#[test]
fn authenticate_and_log_activity_use_device_endpoints() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let device_id = "123e4567-e89b-12d3-a456-426614174000";
    let auth = server
        .mock("POST", "/auth")
        .match_body(Matcher::Json(json!({
            "userId": "alice",
            "deviceId": device_id
        })))
        .with_status(200)
        .with_body(r#"{"message":"Authentication successful"}"#)
        .create();
    let log = server
        .mock("POST", "/log")
        .match_body(Matcher::Json(json!({
            "userId": "alice",
            "message": "exported report"
        })))
        .with_status(200)
        .with_body(r#"{"message":"Log recorded"}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["authenticate", "alice", device_id])
        .assert()
        .success()
        .stdout("Response: Authentication successful\n");
    base_cmd(workdir.path(), &server.url())
        .args(["log-activity", "alice", "exported report"])
        .assert()
        .success()
        .stdout("Response: Log recorded\n");
    auth.assert();
    log.assert();
}

#[test]
fn device_mismatch_is_reported_without_failing() {
    let workdir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/auth")
        .with_status(401)
        .with_body(r#"{"message":"Device ID mismatch"}"#)
        .create();

    base_cmd(workdir.path(), &server.url())
        .args(["authenticate", "alice", "123e4567-e89b-12d3-a456-426614174000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Device ID mismatch"));
}
