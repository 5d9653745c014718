#![forbid(unsafe_code)]

use std::{io::Read, time::Duration};

use axum::{Router, response::Response, routing::get};
use bytes::Bytes;
use pedestal_net::{HttpClient, NetError, NetOptions};
use rstest::rstest;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use url::Url;

async fn asset_endpoint() -> Response {
    let data = Bytes::from_static(b"PXR-USDC test model bytes");
    Response::builder()
        .status(200)
        .body(axum::body::Body::from(data))
        .unwrap()
}

async fn missing_endpoint() -> Response {
    Response::builder()
        .status(404)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn test_app() -> Router {
    Router::new()
        .route("/model.usdz", get(asset_endpoint))
        .route("/missing.usdz", get(missing_endpoint))
}

async fn run_test_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, test_app()).await.unwrap();
    });
    format!("http://{addr}")
}

#[rstest]
#[tokio::test]
#[timeout(Duration::from_secs(10))]
async fn download_stages_body_in_dir() {
    let base = run_test_server().await;
    let dir = TempDir::new().unwrap();
    let client = HttpClient::new(NetOptions::default());

    let url = Url::parse(&format!("{base}/model.usdz")).unwrap();
    let tmp = client.download(url, dir.path()).await.unwrap();

    assert_eq!(tmp.path().parent(), Some(dir.path()));

    let mut contents = Vec::new();
    tmp.reopen().unwrap().read_to_end(&mut contents).unwrap();
    assert_eq!(contents, b"PXR-USDC test model bytes");
}

#[rstest]
#[tokio::test]
#[timeout(Duration::from_secs(10))]
async fn non_success_status_is_an_error() {
    let base = run_test_server().await;
    let dir = TempDir::new().unwrap();
    let client = HttpClient::new(NetOptions::default());

    let url = Url::parse(&format!("{base}/missing.usdz")).unwrap();
    let err = client.download(url, dir.path()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[rstest]
#[tokio::test]
#[timeout(Duration::from_secs(10))]
async fn failed_download_leaves_no_temp_file() {
    let base = run_test_server().await;
    let dir = TempDir::new().unwrap();
    let client = HttpClient::new(NetOptions::default());

    let url = Url::parse(&format!("{base}/missing.usdz")).unwrap();
    let _ = client.download(url, dir.path()).await.unwrap_err();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "staging dir should be clean: {leftovers:?}");
}

#[rstest]
#[tokio::test]
#[timeout(Duration::from_secs(10))]
async fn cancelled_token_aborts_before_request() {
    let base = run_test_server().await;
    let dir = TempDir::new().unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let client = HttpClient::new(NetOptions::default()).with_cancel(cancel);

    let url = Url::parse(&format!("{base}/model.usdz")).unwrap();
    let err = client.download(url, dir.path()).await.unwrap_err();
    assert!(matches!(err, NetError::Cancelled));
}

#[rstest]
#[tokio::test]
#[timeout(Duration::from_secs(10))]
async fn unreachable_host_is_http_error() {
    let dir = TempDir::new().unwrap();
    let client =
        HttpClient::new(NetOptions::default().with_timeout(Duration::from_millis(500)));

    // Reserved TEST-NET-1 address, nothing listens there.
    let url = Url::parse("http://192.0.2.1/model.usdz").unwrap();
    let err = client.download(url, dir.path()).await.unwrap_err();
    assert!(matches!(err, NetError::Http(_) | NetError::Timeout));
}
