//! HTTP transport tests against an in-process server.
//!
//! Each test spawns an axum server answering every POST with a canned
//! status and body, and records the JSON envelopes it receives.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use zkrpc_core::{RpcError, RpcId, RpcTransport};
use zkrpc_http::HttpRpcClient;

// ─── Helpers ──────────────────────────────────────────────────────────────────

struct CannedServer {
    url: String,
    seen: Arc<Mutex<Vec<Value>>>,
}

async fn serve(status: StatusCode, body: &str) -> CannedServer {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let body = body.to_string();

    let app = Router::new().route(
        "/jsrpc",
        post(move |Json(req): Json<Value>| {
            let recorder = recorder.clone();
            let body = body.clone();
            async move {
                recorder.lock().unwrap().push(req);
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    CannedServer {
        url: format!("http://{addr}/jsrpc"),
        seen,
    }
}

fn client(server: &CannedServer) -> HttpRpcClient {
    HttpRpcClient::default_for(server.url.clone()).unwrap()
}

// ─── Success ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ok_result_is_returned() {
    let server = serve(
        StatusCode::OK,
        r#"{"jsonrpc":"2.0","id":1,"result":{"mainContract":"0xaa","govContract":"0xbb"}}"#,
    )
    .await;

    let result = client(&server)
        .request("contract_address", vec![])
        .await
        .unwrap();
    assert_eq!(result, json!({"mainContract": "0xaa", "govContract": "0xbb"}));
}

#[tokio::test]
async fn envelope_matches_wire_contract() {
    let server = serve(StatusCode::OK, r#"{"jsonrpc":"2.0","id":1,"result":null}"#).await;

    client(&server)
        .request("account_info", vec![json!("0xabc")])
        .await
        .unwrap();

    let seen = server.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        json!({"id": 1, "jsonrpc": "2.0", "method": "account_info", "params": ["0xabc"]})
    );
}

#[tokio::test]
async fn concurrent_calls_use_distinct_ids() {
    let server = serve(StatusCode::OK, r#"{"result":3}"#).await;
    let client = client(&server);

    let calls = (0..4).map(|_| client.request("get_confirmations_for_eth_op_amount", vec![]));
    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(|r| matches!(r, Ok(v) if *v == json!(3))));

    let mut ids: Vec<u64> = server
        .seen
        .lock()
        .unwrap()
        .iter()
        .map(|req| req["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

// ─── Protocol errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn error_object_becomes_response_error() {
    let server = serve(
        StatusCode::OK,
        r#"{"jsonrpc":"2.0","error":{"id":5,"message":"Nonce mismatch"}}"#,
    )
    .await;

    let err = client(&server).request("tx_submit", vec![]).await.unwrap_err();
    match err {
        RpcError::Response { id, message } => {
            assert_eq!(id, RpcId::Number(5));
            assert_eq!(message, "Nonce mismatch");
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_ids_are_carried_verbatim() {
    for id in [json!(-1), json!({"seq": 5})] {
        let body = json!({"jsonrpc": "2.0", "error": {"id": id.clone(), "message": "rejected"}});
        let server = serve(StatusCode::OK, &body.to_string()).await;

        let err = client(&server).request("tx_submit", vec![]).await.unwrap_err();
        assert!(err.is_protocol(), "id {id}: {err:?}");
        match err {
            RpcError::Response { id: got, message } => {
                assert_eq!(serde_json::to_value(&got).unwrap(), id);
                assert_eq!(message, "rejected");
            }
            other => panic!("expected Response error, got {other:?}"),
        }
    }
}

// ─── Transport errors ─────────────────────────────────────────────────────────

#[tokio::test]
async fn non_ok_status_is_provider_error_even_with_result_body() {
    let server = serve(StatusCode::INTERNAL_SERVER_ERROR, r#"{"result":"0x1"}"#).await;

    let err = client(&server).request("tokens", vec![]).await.unwrap_err();
    match err {
        RpcError::Provider {
            status,
            body,
            reason,
        } => {
            assert_eq!(status, Some(500));
            assert_eq!(body, r#"{"result":"0x1"}"#);
            assert_eq!(reason, "Unexpected status code");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_success_codes_are_still_unexpected() {
    let server = serve(StatusCode::ACCEPTED, r#"{"result":1}"#).await;

    let err = client(&server).request("tokens", vec![]).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn connection_refused_is_provider_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpRpcClient::default_for(format!("http://{addr}/jsrpc")).unwrap();
    let err = client.request("tokens", vec![]).await.unwrap_err();
    assert!(matches!(err, RpcError::Provider { status: None, .. }));
}

// ─── Malformed ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = serve(StatusCode::OK, "<html>gateway</html>").await;

    let err = client(&server).request("tokens", vec![]).await.unwrap_err();
    match err {
        RpcError::Malformed { method, .. } => assert_eq!(method, "tokens"),
        other => panic!("expected Malformed error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_without_result_is_malformed() {
    let server = serve(StatusCode::OK, r#"{"jsonrpc":"2.0","id":1}"#).await;
    let client = client(&server);

    for method in ["submit_txs_batch", "get_eth_tx_for_withdrawal"] {
        let err = client.request(method, vec![]).await.unwrap_err();
        match err {
            RpcError::Malformed { method: got, .. } => assert_eq!(got, method),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }
}
