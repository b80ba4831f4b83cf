use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};

use crate::config::RemoteConfig;
use crate::optimistic::{Item, ItemId};
use crate::remote::error::RemoteCallFailed;

/// The remote CRUD collaborator behind an item list.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    /// Create `item`; returns the item as stored by the endpoint.
    async fn create(&self, item: &Item) -> Result<Item, RemoteCallFailed>;

    /// Delete the item with `id`.
    async fn delete(&self, id: ItemId) -> Result<(), RemoteCallFailed>;

    /// List items, optionally filtered by name.
    async fn list(&self, name: Option<&str>) -> Result<Vec<Item>, RemoteCallFailed>;
}

#[async_trait]
impl<T: ItemsApi + ?Sized> ItemsApi for Arc<T> {
    async fn create(&self, item: &Item) -> Result<Item, RemoteCallFailed> {
        (**self).create(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), RemoteCallFailed> {
        (**self).delete(id).await
    }

    async fn list(&self, name: Option<&str>) -> Result<Vec<Item>, RemoteCallFailed> {
        (**self).list(name).await
    }
}

/// [`ItemsApi`] over HTTP.
///
/// - `POST   {base_url}/{resource}` with the item as JSON
/// - `DELETE {base_url}/{resource}/{id}`
/// - `GET    {base_url}/{resource}[?name=...]`
pub struct HttpItemsApi {
    client: Client,
    collection_url: String,
}

impl HttpItemsApi {
    pub fn new(config: &RemoteConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            collection_url: config.collection_url(),
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Item>,
    ) -> Result<Response, RemoteCallFailed> {
        let method_name = method_name(&method);
        let url_text = url.to_string();

        let mut builder = self.client.request(method, url);
        if let Some(item) = body {
            builder = builder.json(item);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| RemoteCallFailed::Transport {
                method: method_name,
                url: url_text.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteCallFailed::Status {
                method: method_name,
                url: url_text,
                status: status.as_u16(),
            });
        }

        tracing::debug!(method = method_name, url = %url_text, status = status.as_u16(), "Remote call succeeded");
        Ok(response)
    }
}

#[async_trait]
impl ItemsApi for HttpItemsApi {
    async fn create(&self, item: &Item) -> Result<Item, RemoteCallFailed> {
        let url = parse_url(&self.collection_url, &[])?;
        let response = self.send(Method::POST, url, Some(item)).await?;
        response
            .json::<Item>()
            .await
            .map_err(|source| RemoteCallFailed::Transport {
                method: "POST",
                url: self.collection_url.clone(),
                source,
            })
    }

    async fn delete(&self, id: ItemId) -> Result<(), RemoteCallFailed> {
        let url = parse_url(&self.item_url(id), &[])?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn list(&self, name: Option<&str>) -> Result<Vec<Item>, RemoteCallFailed> {
        let params: Vec<(&str, &str)> = match name {
            Some(name) if !name.is_empty() => vec![("name", name)],
            _ => Vec::new(),
        };
        let url = parse_url(&self.collection_url, &params)?;
        let url_text = url.to_string();
        let response = self.send(Method::GET, url, None).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|source| RemoteCallFailed::Transport {
                method: "GET",
                url: url_text,
                source,
            })
    }
}

fn parse_url(url: &str, params: &[(&str, &str)]) -> Result<Url, RemoteCallFailed> {
    let parsed = if params.is_empty() {
        Url::parse(url)
    } else {
        Url::parse_with_params(url, params)
    };
    parsed.map_err(|e| RemoteCallFailed::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::GET {
        "GET"
    } else if *method == Method::POST {
        "POST"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "OTHER"
    }
}
