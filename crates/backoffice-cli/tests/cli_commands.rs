use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("backoffice"));
    cmd.env("HOME", home)
        .env_remove("BACKOFFICE_ADDR")
        .env_remove("BACKOFFICE_TOKEN")
        .env_remove("BACKOFFICE_PASSWORD");
    cmd
}

fn acme() -> serde_json::Value {
    json!({
        "client_id": 1,
        "name": "Acme",
        "email": "a@x.com",
        "enabled": true,
        "date_created": "2024-01-01T00:00:00Z"
    })
}

#[test]
fn server_info_is_public() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/info")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({ "name": "backoffice", "version": "1.0.0" }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--insecure", "server", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"1.0.0\""));
}

#[test]
fn whoami_command_uses_access_token() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(json!({ "name": "root", "email": "root@example.com" }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--token", "token", "--insecure", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root@example.com"));
}

#[test]
fn clients_list_renders_table() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/clients/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(json!([acme()]).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "clients",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTIONS"))
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("Active"))
        .stdout(predicate::str::contains("Inactive").not());
}

#[test]
fn empty_admin_list_prints_placeholder() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/admins/")
        .match_query(Matcher::UrlEncoded("enabled_only".into(), "true".into()))
        .with_status(200)
        .with_body("[]")
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "admins",
            "list",
            "--enabled-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No admins found."))
        .stdout(predicate::str::contains("ID").not());
}

#[test]
fn failed_list_exits_with_notification() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let list = server
        .mock("GET", "/clients/")
        .with_status(503)
        .with_body(json!({ "detail": "maintenance" }).to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "clients",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load clients"))
        .stderr(predicate::str::contains("maintenance"));
    list.assert();
}

#[test]
fn confirmed_delete_reloads_list() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/clients/1")
        .with_status(204)
        .expect(1)
        .create();
    let reload = server
        .mock("GET", "/clients/")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "--yes",
            "clients",
            "delete",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client deleted"))
        .stdout(predicate::str::contains("No clients found."));
    delete.assert();
    reload.assert();
}

#[test]
fn delete_without_terminal_is_cancelled() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let delete = server.mock("DELETE", Matcher::Any).expect(0).create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "admins",
            "delete",
            "3",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
    delete.assert();
}

#[test]
fn unauthorized_without_refresh_token_asks_for_login() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/clients/")
        .with_status(401)
        .expect(1)
        .create();
    let refresh = server.mock("POST", "/refresh").expect(0).create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "stale",
            "--insecure",
            "clients",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("backoffice login"));
    refresh.assert();
}

#[test]
fn client_status_posts_query_flag() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mut disabled = acme();
    disabled["enabled"] = json!(false);
    let status = server
        .mock("POST", "/clients/1/status")
        .match_query(Matcher::UrlEncoded("enabled".into(), "false".into()))
        .with_status(200)
        .with_body(disabled.to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "clients",
            "status",
            "1",
            "--enabled",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inactive"));
    status.assert();
}

#[test]
fn client_exists_needs_no_token() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/clients/check/Acme/exists")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({ "exists": false }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "",
            "--insecure",
            "clients",
            "exists",
            "Acme",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn config_contexts_persist_between_runs() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["config", "set-context", "prod", "--addr", "https://prod.example.com"])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .args(["config", "get-contexts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* prod"));

    let saved = std::fs::read_to_string(home_dir.path().join(".backoffice").join("config.json"))
        .expect("config file");
    assert!(saved.contains("https://prod.example.com"));
}
