//! End-to-end runs of the `oxford` binary against a mock service.

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, starts_with};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn oxford(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oxford"));
    for (name, _) in std::env::vars_os() {
        if name.to_string_lossy().starts_with("OXFORD_") {
            cmd.env_remove(name);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

fn write_config(dir: &TempDir, contents: &Value) -> PathBuf {
    let path = dir.path().join(".projectoxford.json");
    std::fs::write(&path, serde_json::to_vec_pretty(contents).expect("json")).expect("write config");
    path
}

fn config_for(dir: &TempDir, base_url: &str) -> PathBuf {
    write_config(
        dir,
        &json!({
            "apikeys": {"face": "face-key", "vision": "vision-key"},
            "oxford_url": base_url,
        }),
    )
}

fn unused_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    format!("http://127.0.0.1:{port}/")
}

#[test]
fn detect_prints_sorted_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/face/v0/detections")
            .query_param("analyzesAge", "false")
            .query_param("analyzesGender", "true")
            .header("ocp-apim-subscription-key", "face-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"zeta": 1, "alpha": {"b": 2, "a": 1}}"#);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());
    let image = dir.path().join("face.jpg");
    std::fs::write(&image, b"\xFF\xD8\xFF").expect("write image");

    oxford(&config)
        .args(["face", "detect", "--no-analyzesage"])
        .arg(&image)
        .assert()
        .success()
        .stdout("{\n  \"alpha\": {\n    \"a\": 1,\n    \"b\": 2\n  },\n  \"zeta\": 1\n}\n");
    mock.assert();
}

#[test]
fn service_error_message_goes_to_stderr() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/face/v0/persongroups");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"message": "invalid key"}"#);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());

    oxford(&config)
        .args(["face", "persongroup", "list"])
        .assert()
        .failure()
        .stdout("")
        .stderr("invalid key\n");
}

#[test]
fn missing_image_fails_before_any_request() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &unused_port_url());
    let missing = dir.path().join("nope.jpg");

    oxford(&config)
        .args(["vision", "ocr"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(starts_with("Cannot read image file").and(contains("nope.jpg")));
}

#[test]
fn unreachable_service_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &unused_port_url());

    oxford(&config)
        .args(["face", "persongroup", "get", "family"])
        .assert()
        .failure()
        .stderr(starts_with("Request failed:"));
}

#[test]
fn environment_key_overrides_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/face/v0/persongroups/family/training")
            .header("ocp-apim-subscription-key", "env-key");
        then.status(200).body(r#"{"status": "succeeded"}"#);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = write_config(&dir, &json!({"oxford_url": server.base_url()}));

    oxford(&config)
        .env("OXFORD_FACE_APIKEY", "env-key")
        .args(["face", "persongroup", "training-status", "family"])
        .assert()
        .success()
        .stdout("{\n  \"status\": \"succeeded\"\n}\n");
    mock.assert();
}

#[test]
fn persongroup_create_reports_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PUT")
            .path("/face/v0/persongroups/family")
            .json_body(json!({"name": "Family", "userData": "relatives"}));
        then.status(200);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());

    oxford(&config)
        .args([
            "face",
            "persongroup",
            "create",
            "Family",
            "--persongroupid",
            "family",
            "--customdata",
            "relatives",
        ])
        .assert()
        .success()
        .stdout("Created PersonGroup with id family\n");
    mock.assert();
}

#[test]
fn person_create_prints_new_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/face/v0/persongroups/family/persons")
            .json_body(json!({"name": "Ada", "faceIds": ["f1", "f2"]}));
        then.status(200).body(r#"{"personId": "p-42"}"#);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());

    oxford(&config)
        .args([
            "face",
            "person",
            "create",
            "Ada",
            "--persongroupid",
            "family",
            "--faceid",
            "f1",
            "f2",
        ])
        .assert()
        .success()
        .stdout("Created Person with id p-42\n");
    mock.assert();
}

#[test]
fn thumbnail_is_written_to_requested_path() {
    let server = MockServer::start();
    let thumb: Vec<u8> = (0..=255u8).collect();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/vision/v1/thumbnails")
            .query_param("width", "120")
            .query_param("height", "50")
            .query_param("smartCropping", "true")
            .header("ocp-apim-subscription-key", "vision-key")
            .json_body(json!({"Url": "https://img.example.com/cat.jpg"}));
        then.status(200)
            .header("content-type", "image/jpeg")
            .body(&thumb);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());
    let dest = dir.path().join("thumb.jpg");

    oxford(&config)
        .args(["vision", "thumbnail", "--width", "120", "--thumbnail"])
        .arg(&dest)
        .arg("https://img.example.com/cat.jpg")
        .assert()
        .success()
        .stdout(contains("thumb.jpg"));

    mock.assert();
    assert_eq!(std::fs::read(&dest).expect("read thumbnail"), thumb);
}

#[test]
fn command_options_can_come_from_the_environment() {
    let server = MockServer::start();
    let from_env = server.mock(|when, then| {
        when.method("POST")
            .path("/vision/v1/thumbnails")
            .query_param("width", "120")
            .query_param("height", "80");
        then.status(200).body("jpeg");
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());
    let dest = dir.path().join("env-thumb.jpg");

    oxford(&config)
        .env("OXFORD_VISION_THUMBNAIL_WIDTH", "120")
        .env("OXFORD_VISION_THUMBNAIL_HEIGHT", "80")
        .env("OXFORD_VISION_THUMBNAIL_THUMBNAIL", &dest)
        .args(["vision", "thumbnail", "https://img.example.com/cat.jpg"])
        .assert()
        .success();

    from_env.assert();
    assert_eq!(std::fs::read(&dest).expect("read thumbnail"), b"jpeg");
}

#[test]
fn command_line_beats_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/vision/v1/ocr")
            .query_param("language", "de");
        then.status(200).body(r#"{"language": "de"}"#);
    });

    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, &server.base_url());

    oxford(&config)
        .env("OXFORD_VISION_OCR_LANGUAGE", "fr")
        .args(["vision", "ocr", "--language", "de", "https://img.example.com/sign.jpg"])
        .assert()
        .success();
    mock.assert();
}

#[test]
fn save_api_key_keeps_other_settings() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(
        &dir,
        &json!({
            "apikeys": {"vision": "vision-key"},
            "oxford_url": "https://example.test/",
            "theme": "dark",
        }),
    );

    oxford(&config)
        .args(["face", "save-api-key", "new-face-key"])
        .assert()
        .success()
        .stdout(contains("Saved face API key"));

    let saved: Value =
        serde_json::from_slice(&std::fs::read(&config).expect("read config")).expect("parse");
    assert_eq!(saved["apikeys"]["face"], "new-face-key");
    assert_eq!(saved["apikeys"]["vision"], "vision-key");
    assert_eq!(saved["oxford_url"], "https://example.test/");
    assert_eq!(saved["theme"], "dark");
}

#[test]
fn save_api_key_creates_missing_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("fresh.json");

    oxford(&config)
        .args(["vision", "save-api-key", "v-key"])
        .assert()
        .success();

    let saved: Value =
        serde_json::from_slice(&std::fs::read(&config).expect("read config")).expect("parse");
    assert_eq!(saved["apikeys"]["vision"], "v-key");
}

#[test]
fn missing_config_is_an_error_for_remote_commands() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("absent.json");

    oxford(&config)
        .args(["face", "persongroup", "list"])
        .assert()
        .failure()
        .stderr(contains("Config file not found"));
}

#[test]
fn config_show_masks_keys() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_for(&dir, "https://example.test/");

    oxford(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("****-key").and(contains("face-key").not()));
}
