//! In-process `ItemsApi` whose calls block until the test resolves them,
//! so remote completion order can be chosen explicitly.

#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use optimist::optimistic::{Item, ItemId};
use optimist::remote::{ItemsApi, RemoteCallFailed};
use parking_lot::Mutex;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Item),
    Delete(ItemId),
    List(Option<String>),
}

#[derive(Default)]
pub struct GatedApi {
    calls: Mutex<Vec<(Call, Option<oneshot::Sender<Reply>>)>>,
}

enum Reply {
    Ok(Vec<Item>),
    Fail(u16),
}

impl GatedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Wait until at least `n` calls have been issued.
    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.calls.lock().len() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("timed out waiting for remote calls");
    }

    pub fn succeed(&self, index: usize) {
        self.reply(index, Reply::Ok(Vec::new()));
    }

    /// Resolve a `list` call with `items`.
    pub fn respond(&self, index: usize, items: Vec<Item>) {
        self.reply(index, Reply::Ok(items));
    }

    pub fn fail(&self, index: usize, status: u16) {
        self.reply(index, Reply::Fail(status));
    }

    fn reply(&self, index: usize, reply: Reply) {
        let sender = self.calls.lock()[index]
            .1
            .take()
            .expect("call already resolved");
        let _ = sender.send(reply);
    }

    async fn register(&self, call: Call) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push((call, Some(tx)));
        rx.await.unwrap_or(Reply::Fail(499))
    }
}

fn failure(method: &'static str, status: u16) -> RemoteCallFailed {
    RemoteCallFailed::Status {
        method,
        url: "gated://items".to_string(),
        status,
    }
}

#[async_trait]
impl ItemsApi for GatedApi {
    async fn create(&self, item: &Item) -> Result<Item, RemoteCallFailed> {
        match self.register(Call::Create(item.clone())).await {
            Reply::Ok(_) => Ok(item.clone()),
            Reply::Fail(status) => Err(failure("POST", status)),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<(), RemoteCallFailed> {
        match self.register(Call::Delete(id)).await {
            Reply::Ok(_) => Ok(()),
            Reply::Fail(status) => Err(failure("DELETE", status)),
        }
    }

    async fn list(&self, name: Option<&str>) -> Result<Vec<Item>, RemoteCallFailed> {
        match self.register(Call::List(name.map(str::to_string))).await {
            Reply::Ok(items) => Ok(items),
            Reply::Fail(status) => Err(failure("GET", status)),
        }
    }
}
