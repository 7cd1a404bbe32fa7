use std::net::SocketAddr;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tokio::net::TcpListener;

use quiz_core::model::BankSource;
use services::{BankLoader, LoadError, MalformedBank};

const BANK: &str = r#"{
    "questions": [
        {
            "question": "Which macro prints a line to stdout?",
            "answerOptions": [
                { "text": "println!", "isCorrect": true, "rationale": "Adds a newline." },
                { "text": "format!", "isCorrect": false, "rationale": "format! returns a String." }
            ]
        }
    ]
}"#;

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route(
            "/quiz_data.json",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], BANK) }),
        )
        .route(
            "/empty.json",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"{"questions":[]}"#) }),
        )
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source(addr: SocketAddr, path: &str) -> BankSource {
    BankSource::parse(&format!("http://{addr}{path}")).unwrap()
}

#[tokio::test]
async fn fetches_bank_over_http() {
    let addr = serve().await;
    let bank = BankLoader::new()
        .load(&source(addr, "/quiz_data.json"))
        .await
        .unwrap();
    assert_eq!(bank.len(), 1);
    assert_eq!(bank.questions()[0].correct_index(), Some(0));
}

#[tokio::test]
async fn not_found_carries_status() {
    let addr = serve().await;
    let err = BankLoader::new()
        .load(&source(addr, "/missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Unavailable { .. }));
    assert_eq!(err.status(), Some(reqwest_status(404)));
}

#[tokio::test]
async fn server_error_carries_status() {
    let addr = serve().await;
    let err = BankLoader::new()
        .load(&source(addr, "/broken"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest_status(500)));
}

#[tokio::test]
async fn empty_remote_bank_is_malformed() {
    let addr = serve().await;
    let err = BankLoader::new()
        .load(&source(addr, "/empty.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Malformed(MalformedBank::Invalid(_))));
}

#[tokio::test]
async fn refused_connection_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = BankLoader::new()
        .load(&source(addr, "/quiz_data.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Unavailable { status: None, .. }));
}

fn reqwest_status(code: u16) -> reqwest::StatusCode {
    reqwest::StatusCode::from_u16(code).unwrap()
}
