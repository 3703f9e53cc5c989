//! Round-trip tests against an in-process stub of the character store.
//!
//! The stub mimics the real document store: GET wraps the last stored
//! document in a `body` envelope, POST overwrites it wholesale.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use sheetforge::application::services::{RosterMode, RosterService};
use sheetforge::domain::value_objects::Attribute;
use sheetforge::infrastructure::store::HttpCharacterStore;

type StoredDocument = Arc<Mutex<Option<Value>>>;

async fn get_document(State(stored): State<StoredDocument>) -> Json<Value> {
    let stored = stored.lock().unwrap();
    match stored.as_ref() {
        Some(document) => Json(json!({ "body": document })),
        None => Json(json!({})),
    }
}

async fn put_document(
    State(stored): State<StoredDocument>,
    Json(document): Json<Value>,
) -> Json<Value> {
    *stored.lock().unwrap() = Some(document);
    Json(json!({ "status": "ok" }))
}

/// Serve the stub on an ephemeral port; returns its address and the shared
/// document slot.
async fn spawn_stub_store() -> (SocketAddr, StoredDocument) {
    init_tracing();
    let stored: StoredDocument = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/api/tester/character", get(get_document).post(put_document))
        .with_state(stored.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, stored)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetforge=debug".into()),
        )
        .try_init();
}

fn store_for(addr: SocketAddr) -> Arc<HttpCharacterStore> {
    Arc::new(HttpCharacterStore::new(
        &format!("http://{}/api", addr),
        "tester",
    ))
}

#[tokio::test]
async fn roster_round_trips_through_the_store() {
    let (addr, _stored) = spawn_stub_store().await;

    let mut service = RosterService::new(store_for(addr));
    service.load().await;
    assert!(service.is_empty());

    // Build two characters and persist them.
    service.begin_create().unwrap();
    {
        let sheet = service.active_mut().unwrap();
        assert!(sheet.adjust_attribute(Attribute::Strength, 4).is_applied());
        assert!(sheet.adjust_skill("Athletics", 3).unwrap().is_applied());
    }
    assert!(service.save().await);

    service.begin_create().unwrap();
    {
        let sheet = service.active_mut().unwrap();
        assert!(sheet.adjust_attribute(Attribute::Intelligence, 4).is_applied());
        assert!(sheet.adjust_skill("Arcana", 5).unwrap().is_applied());
    }
    assert!(service.save().await);
    assert_eq!(service.len(), 2);

    // A fresh coordinator sees the same roster by value.
    let mut reloaded = RosterService::new(store_for(addr));
    reloaded.load().await;
    assert_eq!(reloaded.characters(), service.characters());
    assert_eq!(reloaded.mode(), RosterMode::Viewing(0));
    assert_eq!(
        reloaded.characters()[0].achieved_classes(),
        ["Barbarian".to_string()]
    );
    assert_eq!(
        reloaded.characters()[1].achieved_classes(),
        ["Wizard".to_string()]
    );
    assert_eq!(reloaded.characters()[1].skill_totals().get("Arcana"), 7);
}

#[tokio::test]
async fn malformed_document_degrades_to_empty_roster() {
    let (addr, stored) = spawn_stub_store().await;

    // Something that is not a character list at all.
    *stored.lock().unwrap() = Some(json!({ "characters": [{ "bogus": true }] }));

    let mut service = RosterService::new(store_for(addr));
    service.load().await;
    assert!(service.is_empty());
    assert_eq!(service.mode(), RosterMode::Empty);
}

#[tokio::test]
async fn save_failure_leaves_roster_in_memory() {
    // No stub listening: every request fails at the transport level.
    let unreachable = Arc::new(HttpCharacterStore::new("http://127.0.0.1:1/api", "tester"));
    let mut service = RosterService::new(unreachable);
    service.begin_create().unwrap();
    assert!(!service.save().await);
    assert_eq!(service.len(), 1);
}
