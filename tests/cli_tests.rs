use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn textsum(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textsum").expect("textsum binary");
    cmd.current_dir(dir.path()).env_remove("OPENAI_API_KEY");
    cmd
}

#[test]
fn missing_input_file_fails_without_summary() {
    let dir = TempDir::new().expect("temp dir");

    textsum(&dir)
        .arg(dir.path().join("missing.txt"))
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .failure()
        .stdout(predicate::str::contains("--- Summary ---").not())
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn missing_credential_fails_before_any_request() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("input.txt");
    fs::write(&input, "The quick brown fox jumps over the lazy dog.").expect("write input");

    textsum(&dir)
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn oversized_input_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("input.txt");
    fs::write(&input, "0123456789").expect("write input");

    textsum(&dir)
        .arg(&input)
        .args(["--max-chars", "5"])
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("limit is 5"));
}

#[test]
fn input_file_argument_is_required() {
    let dir = TempDir::new().expect("temp dir");

    textsum(&dir).assert().failure().code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_header_and_trimmed_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "\n A fox jumps over a dog on a sunny day.  "},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let base_url = format!("{}/v1", server.uri());

    tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("input.txt");
        fs::write(
            &input,
            "The quick brown fox jumps over the lazy dog. It was a sunny day.",
        )
        .expect("write input");

        textsum(&dir)
            .arg(&input)
            .args(["--base-url", base_url.as_str()])
            .env("OPENAI_API_KEY", "sk-test")
            .assert()
            .success()
            .stdout("\n--- Summary ---\n\nA fox jumps over a dog on a sunny day.\n");
    })
    .await
    .expect("command task");
}

#[tokio::test(flavor = "multi_thread")]
async fn service_error_prints_no_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;
    let base_url = format!("{}/v1", server.uri());

    tokio::task::spawn_blocking(move || {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("input.txt");
        fs::write(&input, "Some text.").expect("write input");

        textsum(&dir)
            .arg(&input)
            .args(["--base-url", base_url.as_str()])
            .env("OPENAI_API_KEY", "sk-test")
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("500"));
    })
    .await
    .expect("command task");
}
