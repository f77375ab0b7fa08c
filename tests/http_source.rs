use std::time::Duration;

use tsq::{SourceError, StateError, TsqError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATE: &str = r#"{
    "version": 4,
    "terraform_version": "1.7.5",
    "serial": 9,
    "resources": [
        {
            "mode": "managed",
            "type": "aws_instance",
            "name": "web",
            "instances": [
                { "attributes": { "id": "i-123", "public_ip": "203.0.113.10" } }
            ]
        }
    ]
}"#;

#[tokio::test]
async fn test_load_fetches_state_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env/prod/terraform.tfstate"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(STATE, "application/json"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/env/prod/terraform.tfstate", mock_server.uri());
    let state = tsq::load(&url, None).await.unwrap();

    assert_eq!(
        state.lookup("aws_instance.web.id").unwrap().bytes(),
        b"\"i-123\""
    );
    assert_eq!(
        state.list(),
        vec![
            "aws_instance.web",
            "aws_instance.web.id",
            "aws_instance.web.public_ip",
        ]
    );
}

#[tokio::test]
async fn test_load_reports_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terraform.tfstate"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/terraform.tfstate", mock_server.uri());
    let err = tsq::load(&url, None).await.unwrap_err();

    if let TsqError::Source(SourceError::HttpStatus { location, status }) = &err {
        assert_eq!(*status, 404);
        assert_eq!(location, &url);
    } else {
        panic!("Expected SourceError::HttpStatus, got {:?}", err);
    }
}

#[tokio::test]
async fn test_load_times_out_on_slow_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terraform.tfstate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(STATE, "application/json")
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/terraform.tfstate", mock_server.uri());
    let err = tsq::load(&url, Some(Duration::from_millis(100)))
        .await
        .unwrap_err();

    if let TsqError::Source(SourceError::Timeout { location, timeout }) = &err {
        assert_eq!(location, &url);
        assert_eq!(*timeout, Duration::from_millis(100));
    } else {
        panic!("Expected SourceError::Timeout, got {:?}", err);
    }
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_load_within_timeout_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terraform.tfstate"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(STATE, "application/json"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/terraform.tfstate", mock_server.uri());
    let state = tsq::load(&url, Some(Duration::from_secs(30))).await.unwrap();

    assert!(state.lookup("aws_instance.web").is_ok());
}

#[tokio::test]
async fn test_load_rejects_non_state_http_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/terraform.tfstate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>login required</html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/terraform.tfstate", mock_server.uri());
    let err = tsq::load(&url, None).await.unwrap_err();

    assert!(matches!(err, TsqError::State(StateError::Format(_))));
}

#[tokio::test]
async fn test_load_reads_file_url() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("terraform.tfstate");
    std::fs::write(&file_path, STATE).unwrap();

    let url = format!("file://{}", file_path.display());
    let state = tsq::load(&url, None).await.unwrap();

    assert_eq!(
        state.lookup("aws_instance.web.public_ip").unwrap().bytes(),
        b"\"203.0.113.10\""
    );
}
