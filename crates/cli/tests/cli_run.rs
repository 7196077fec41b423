//! Runs the compiled binary against a local page and checks exit codes,
//! the status line and the snapshot file.

use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use housing_watch_core::testing::{fixtures, StaticHttpServer, StaticSmtpServer};
use housing_watch_core::Listing;

const PAGE_PATH: &str = "/wohnen/aktuelle-wohnangebote";

/// Find a local port nobody listens on
fn closed_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

struct Run {
    dir: TempDir,
    snapshot: PathBuf,
}

impl Run {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let snapshot = dir.path().join("snapshots").join("stwdo.json");
        Self { dir, snapshot }
    }

    fn seed_snapshot(&self, listings: &[Listing]) -> Vec<u8> {
        fs::create_dir_all(self.snapshot.parent().unwrap()).unwrap();
        let data = serde_json::to_string_pretty(listings).unwrap();
        fs::write(&self.snapshot, &data).unwrap();
        data.into_bytes()
    }

    /// Command with a clean, fully specified environment
    fn command(&self, page_url: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_housing-watch"));
        cmd.current_dir(self.dir.path());

        for (key, _) in std::env::vars() {
            if key.starts_with("HOUSING_WATCH_") || key.starts_with("EMAIL_") {
                cmd.env_remove(key);
            }
        }

        cmd.env("RUST_LOG", "info")
            .env("NO_COLOR", "1")
            .env("HOUSING_WATCH_TARGET__URL", page_url)
            .env("HOUSING_WATCH_TARGET__TIMEOUT_SECS", "5")
            .env("HOUSING_WATCH_SNAPSHOT__PATH", &self.snapshot)
            .env("HOUSING_WATCH_SMTP__HOST", "127.0.0.1")
            .env("HOUSING_WATCH_SMTP__PORT", closed_port().to_string())
            .env("HOUSING_WATCH_SMTP__SECURITY", "plain")
            .env("HOUSING_WATCH_SMTP__TIMEOUT_SECS", "5")
            .env("EMAIL_SENDER", "watch@example.com")
            .env("EMAIL_PASSWORD", "app-password");
        cmd
    }
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to spawn housing-watch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn offer_on(server: &StaticHttpServer, title: &str, slug: &str) -> Listing {
    Listing::new(title, server.url(&format!("/wohnen/angebot/{}", slug)))
}

fn page(entries: &[(&str, &str)]) -> String {
    let hrefs: Vec<(String, String)> = entries
        .iter()
        .map(|(title, slug)| (title.to_string(), format!("/wohnen/angebot/{}", slug)))
        .collect();
    let borrowed: Vec<(&str, &str)> = hrefs
        .iter()
        .map(|(t, h)| (t.as_str(), h.as_str()))
        .collect();
    fixtures::listings_page(&borrowed)
}

fn assert_file_eq(path: &Path, expected: &[u8]) {
    assert_eq!(fs::read(path).unwrap(), expected, "snapshot changed");
}

#[test]
fn test_no_new_listings_exits_zero() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a"), ("Room B", "b")])).unwrap();
    let run_dir = Run::new();
    let before = run_dir.seed_snapshot(&[
        offer_on(&server, "Room A", "a"),
        offer_on(&server, "Room B", "b"),
    ]);

    let output = run(&mut run_dir.command(&server.url(PAGE_PATH)));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "ℹ️ No new listings.");
    assert_eq!(server.requests().len(), 1);
    assert_file_eq(&run_dir.snapshot, &before);
}

#[test]
fn test_new_listing_is_emailed_and_saved() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a"), ("Room B", "b")])).unwrap();
    let smtp = StaticSmtpServer::start().unwrap();
    let run_dir = Run::new();
    let room_a = offer_on(&server, "Room A", "a");
    let room_b = offer_on(&server, "Room B", "b");
    run_dir.seed_snapshot(&[room_a.clone()]);

    let output = run(run_dir
        .command(&server.url(PAGE_PATH))
        .env("HOUSING_WATCH_SMTP__PORT", smtp.port().to_string()));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "✅ 1 new listing(s) found. Email sent.");

    let sessions = smtp.sessions();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].auth_command().is_some());
    assert_eq!(sessions[0].messages.len(), 1);
    let data = &sessions[0].messages[0];
    assert!(data.contains("- Room B"));
    assert!(data.contains(&room_b.url));
    assert!(!data.contains("Room A"));

    let saved: Vec<Listing> =
        serde_json::from_str(&fs::read_to_string(&run_dir.snapshot).unwrap()).unwrap();
    assert_eq!(saved, vec![room_a, room_b]);
}

#[test]
fn test_missing_credentials_fail_fast() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a")])).unwrap();
    let run_dir = Run::new();

    let output = run(run_dir
        .command(&server.url(PAGE_PATH))
        .env_remove("EMAIL_SENDER"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("EMAIL_SENDER"));
    assert!(stdout(&output).is_empty());
    // Failed before fetching
    assert!(server.requests().is_empty());
    assert!(!run_dir.snapshot.exists());
}

#[test]
fn test_http_error_exits_non_zero() {
    let server = StaticHttpServer::start(500, "oops").unwrap();
    let run_dir = Run::new();

    let output = run(&mut run_dir.command(&server.url(PAGE_PATH)));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("HTTP 500"));
    assert!(!run_dir.snapshot.exists());
}

#[test]
fn test_failed_email_keeps_snapshot() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a"), ("Room B", "b")])).unwrap();
    let run_dir = Run::new();
    let before = run_dir.seed_snapshot(&[offer_on(&server, "Room A", "a")]);

    let output = run(&mut run_dir.command(&server.url(PAGE_PATH)));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("sending notification failed"));
    assert!(stdout(&output).is_empty());
    assert_file_eq(&run_dir.snapshot, &before);
}

#[test]
fn test_corrupt_snapshot_exits_non_zero() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a")])).unwrap();
    let run_dir = Run::new();
    fs::create_dir_all(run_dir.snapshot.parent().unwrap()).unwrap();
    fs::write(&run_dir.snapshot, "not json").unwrap();

    let output = run(&mut run_dir.command(&server.url(PAGE_PATH)));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("corrupt"));
    assert_eq!(fs::read_to_string(&run_dir.snapshot).unwrap(), "not json");
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let server = StaticHttpServer::start(200, page(&[("Room A", "a")])).unwrap();
    let run_dir = Run::new();

    let output = run(run_dir
        .command(&server.url(PAGE_PATH))
        .env("HOUSING_WATCH_SMTP__PORT", "0"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("smtp.port"));
    assert!(server.requests().is_empty());
}
