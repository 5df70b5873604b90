//! End-to-end exercises against a mocked completion backend over HTTP.

mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

fn completion_body(text: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": text}}]
    })
    .to_string()
}

fn write_backend_config(ctx: &TestContext, server_url: &str) {
    ctx.write_config(&format!(
        r#"[api]
api_url = "{}/"
model = "gpt-4"
timeout_secs = 5
"#,
        server_url
    ));
}

#[test]
fn full_pipeline_round_trips_through_the_backend() {
    let mut server = mockito::Server::new();
    let ctx = TestContext::new();
    let profile = ctx.write_profile();
    write_backend_config(&ctx, &server.url());

    let _pitch = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("elevator pitch".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Short pitch here\nLine 2\nLine 3"))
        .create();
    let _script = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("call script".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Scripted call opening."))
        .create();
    let _email = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("cold email".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Subject: Widgets for SMBs"))
        .create();

    ctx.cli()
        .env("OPENAI_API_KEY", "test-key")
        .args(["generate", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Short pitch here"))
        .stdout(predicate::str::contains("Line 2\nLine 3"))
        .stdout(predicate::str::contains("Scripted call opening."))
        .stdout(predicate::str::contains("Subject: Widgets for SMBs"));
}

#[test]
fn failed_cold_email_still_yields_a_partial_toolkit() {
    let mut server = mockito::Server::new();
    let ctx = TestContext::new();
    let profile = ctx.write_profile();
    write_backend_config(&ctx, &server.url());

    let _pitch = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("elevator pitch".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Short pitch here\nLonger pitch body."))
        .create();
    let _script = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("call script".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Scripted call opening."))
        .create();
    let email = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("cold email".to_string()))
        .with_status(503)
        .expect(1)
        .create();

    ctx.cli()
        .env("OPENAI_API_KEY", "test-key")
        .args(["generate", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Short pitch here"))
        .stdout(predicate::str::contains("Scripted call opening."))
        .stdout(predicate::str::contains("**Cold Email**\n\n**Discovery Questions**"))
        .stderr(predicate::str::contains("Generation failed for cold email"))
        .stderr(predicate::str::contains("server error (503)"));

    // One round trip, no client-side retry.
    email.assert();
}

#[test]
fn rejected_credential_surfaces_as_a_section_warning() {
    let mut server = mockito::Server::new();
    let ctx = TestContext::new();
    let profile = ctx.write_profile();
    write_backend_config(&ctx, &server.url());

    let _any = server
        .mock("POST", "/")
        .with_status(401)
        .with_body("invalid key")
        .expect(3)
        .create();

    ctx.cli()
        .env("OPENAI_API_KEY", "bad-key")
        .args(["generate", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Discovery Questions**"))
        .stderr(predicate::str::contains("Authentication failed (401)"));
}
