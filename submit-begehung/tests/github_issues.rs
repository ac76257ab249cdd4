use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use submit_begehung::{handle, FunctionConfig, GitHubIssues, SubmissionOutcome};

const ISSUES_PATH: &str = "/repos/acme/safety/issues";

fn config_for(server: &ServerGuard) -> FunctionConfig {
    FunctionConfig::new("acme", "safety", "secret").with_api_base_url(server.url())
}

#[tokio::test]
async fn created_issue_is_reported() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .match_header("authorization", "Bearer secret")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "title": "Begehung – Unbekanntes Datum",
            "labels": ["begehung"],
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"html_url": "https://github.com/x/y/issues/1", "number": 1}"#)
        .expect(1)
        .create_async()
        .await;

    let response = handle(None, &config_for(&server), &GitHubIssues::new()).await;

    mock.assert_async().await;
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body(),
        json!({"ok": true, "issue": "https://github.com/x/y/issues/1", "number": 1})
    );
}

#[tokio::test]
async fn request_body_carries_rendered_issue() {
    let mut server = Server::new_async().await;
    let expected_body = "**Ort:** Hamburg\n\
                         **Datum:** 2024-05-02\n\
                         **Sifa:** M. Muster\n\
                         **Wetter:** -\n\
                         **Zusammenfassung:** -\n\
                         \n\
                         ---\n\
                         ### Bewertung\n\
                         | Kategorie | Status | Bemerkung |\n\
                         |------------|--------|------------|\n\
                         | PSA & Zutritt | ok |  |\n\
                         | Elektrik | Mangel | Kabel beschädigt |\n";
    let mock = server
        .mock("POST", ISSUES_PATH)
        .match_body(Matcher::Json(json!({
            "title": "Wochenbegehung – 2024-05-02",
            "body": expected_body,
            "labels": ["arbeitsschutz"],
        })))
        .with_status(201)
        .with_body(r#"{"html_url": "https://github.com/acme/safety/issues/7", "number": 7}"#)
        .expect(1)
        .create_async()
        .await;

    let submission = json!({
        "title": "Wochenbegehung",
        "datum": "2024-05-02",
        "ort": "Hamburg",
        "sifa": "M. Muster",
        "categories": [
            {"label": "PSA & Zutritt", "status": "ok"},
            {"label": "Elektrik", "status": "Mangel", "remark": "Kabel beschädigt"},
        ],
    })
    .to_string();
    let config = config_for(&server).with_default_label("arbeitsschutz");

    let response = handle(Some(submission.as_str()), &config, &GitHubIssues::new()).await;

    mock.assert_async().await;
    assert_eq!(
        response.outcome,
        SubmissionOutcome::Created {
            issue: "https://github.com/acme/safety/issues/7".to_string(),
            number: 7,
        }
    );
}

#[tokio::test]
async fn upstream_error_status_and_text_are_reported() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(422)
        .with_body("validation failed")
        .expect(1)
        .create_async()
        .await;

    let response = handle(Some("{}"), &config_for(&server), &GitHubIssues::new()).await;

    mock.assert_async().await;
    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body(),
        json!({"ok": false, "error": "GitHub API Error: 422 - validation failed"})
    );
}

#[tokio::test]
async fn missing_configuration_never_calls_github() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for (owner, repo, token) in [("", "safety", "secret"), ("acme", "", "secret"), ("acme", "safety", "")] {
        let config = FunctionConfig::new(owner, repo, token).with_api_base_url(server.url());

        let response = handle(Some("{}"), &config, &GitHubIssues::new()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body()["ok"], json!(false));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn configuration_from_environment_without_token_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = temp_env::with_vars(
        [
            ("REPO_OWNER", Some("acme")),
            ("REPO_NAME", Some("safety")),
            ("GH_TOKEN", None),
            ("GITHUB_API_URL", Some(server.url().as_str())),
        ],
        FunctionConfig::from_env,
    );

    let response = handle(None, &config, &GitHubIssues::new()).await;

    mock.assert_async().await;
    assert_eq!(
        response.body(),
        json!({
            "ok": false,
            "error": "GitHub-Konfiguration unvollständig. Bitte Environment-Variablen prüfen.",
        })
    );
}

#[tokio::test]
async fn malformed_body_never_calls_github() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let response = handle(Some("{ort: Hamburg}"), &config_for(&server), &GitHubIssues::new()).await;

    mock.assert_async().await;
    assert_eq!(response.status_code, 500);
    assert!(response.body()["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid request body")));
}

#[tokio::test]
async fn identical_submissions_create_two_issues() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .with_body(r#"{"html_url": "https://github.com/x/y/issues/1", "number": 1}"#)
        .expect(2)
        .create_async()
        .await;
    let config = config_for(&server);
    let issues = GitHubIssues::new();

    handle(Some(r#"{"ort": "Kai"}"#), &config, &issues).await;
    handle(Some(r#"{"ort": "Kai"}"#), &config, &issues).await;

    mock.assert_async().await;
}

#[tokio::test]
async fn success_without_issue_fields_is_a_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ISSUES_PATH)
        .with_status(201)
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    let response = handle(None, &config_for(&server), &GitHubIssues::new()).await;

    assert_eq!(response.status_code, 500);
    assert!(!response.is_ok());
}

#[tokio::test]
async fn array_body_never_calls_github() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let response = handle(
        Some(r#"["Baustelle Nord", "2024-05-02"]"#),
        &config_for(&server),
        &GitHubIssues::new(),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(
        response.body(),
        json!({
            "ok": false,
            "error": "Invalid request body: expected a JSON object, found an array",
        })
    );
}
