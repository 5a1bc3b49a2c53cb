#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

use account_api::application::ports::account_repository::{AccountRepository, NewAccount};
use account_api::bootstrap::app_context::{AppContext, AppServices};
use account_api::bootstrap::config::Config;
use account_api::domain::accounts::account::Account;

/// Ordered in-memory stand-in for the Postgres store.
#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<BTreeMap<i64, Account>>,
    next_id: AtomicI64,
    pub fail: AtomicBool,
}

impl InMemoryAccounts {
    fn check(&self) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn create(&self, account: &NewAccount) -> anyhow::Result<Account> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Account {
            id,
            name: account.name.clone(),
            email: account.email.clone(),
            address: account.address.clone(),
            phone_number: account.phone_number.clone(),
            date_joined: account.date_joined,
        };
        self.rows.lock().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Account>> {
        self.check()?;
        Ok(self.rows.lock().await.get(&id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Account>> {
        self.check()?;
        Ok(self.rows.lock().await.values().cloned().collect())
    }

    async fn update(&self, account: &Account) -> anyhow::Result<Option<Account>> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        match rows.get_mut(&account.id) {
            Some(row) => {
                *row = account.clone();
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        self.check()?;
        Ok(self.rows.lock().await.remove(&id).is_some())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAccounts>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAccounts::default());
        let ctx = AppContext::new(Config::default(), AppServices::new(store.clone()));
        Self {
            router: account_api::presentation::http::router(ctx),
            store,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("POST", uri, body, "application/json"))
            .await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body, "application/json"))
            .await
    }

    /// Creates an account through the API and returns the response body.
    pub async fn create(&self, body: &Value) -> Value {
        let res = self.post_json("/accounts", body).await;
        assert_eq!(res.status(), StatusCode::CREATED, "could not create account");
        read_json(res).await
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value, content_type: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_body(res: Response<Body>) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn read_json(res: Response<Body>) -> Value {
    serde_json::from_slice(&read_body(res).await).unwrap()
}

pub fn assert_envelope(body: &Value, status: StatusCode) {
    assert_eq!(body["status"], status.as_u16(), "envelope: {body}");
    assert_eq!(
        body["error"],
        status.canonical_reason().unwrap(),
        "envelope: {body}"
    );
    assert!(body["message"].is_string(), "envelope: {body}");
}

pub fn sample_account(n: usize) -> Value {
    serde_json::json!({
        "name": format!("Customer {n}"),
        "email": format!("customer{n}@example.com"),
        "address": format!("{n} Market St"),
        "phone_number": format!("555-01{n:02}"),
        "date_joined": "2021-03-14",
    })
}
