//! HTTP access to the catalog API.

use async_trait::async_trait;
use domain_catalog::{CreateItem, Item, ListQuery, PageResult};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};

/// API base baked in at build time through `CATALOG_API_BASE`.
pub const DEFAULT_API_BASE: &str = match option_env!("CATALOG_API_BASE") {
    Some(base) => base,
    None => "http://localhost:4000",
};

/// Operations the browse controller and CLI need from the server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /items` for one page
    async fn fetch_page(&self, query: &ListQuery) -> ClientResult<PageResult>;

    /// `GET /items/{id}`
    async fn get_item(&self, id: &str) -> ClientResult<Item>;

    /// `POST /items`
    async fn create_item(&self, input: &CreateItem) -> ClientResult<Item>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed implementation of [`CatalogApi`]
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: Url,
}

impl HttpCatalogApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// `{base}/items/{id}` with `id` percent-encoded as a single segment
    fn item_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push("items")
            .push(id);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        debug!(status = status.as_u16(), %message, "API returned an error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self), fields(q = %query.q, offset = query.offset, sort = %query.sort))]
    async fn fetch_page(&self, query: &ListQuery) -> ClientResult<PageResult> {
        let mut params = vec![
            ("q", query.q.clone()),
            ("offset", query.offset.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(sort) = query.sort.as_param() {
            params.push(("sort", sort.to_string()));
        }

        let response = self
            .client
            .get(self.endpoint("/items"))
            .query(&params)
            .send()
            .await?;

        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn get_item(&self, id: &str) -> ClientResult<Item> {
        let response = self
            .client
            .get(self.item_url(id)?)
            .send()
            .await?;

        Self::decode(response).await
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create_item(&self, input: &CreateItem) -> ClientResult<Item> {
        let response = self
            .client
            .post(self.endpoint("/items"))
            .json(input)
            .send()
            .await?;

        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = HttpCatalogApi::new("http://localhost:4000/").unwrap();
        assert_eq!(api.endpoint("/items"), "http://localhost:4000/items");

        let api = HttpCatalogApi::new("http://localhost:4000").unwrap();
        assert_eq!(api.endpoint("/items/7"), "http://localhost:4000/items/7");
    }

    #[test]
    fn test_item_url_escapes_id() {
        let api = HttpCatalogApi::new("http://localhost:4000").unwrap();
        assert_eq!(
            api.item_url("42").unwrap().as_str(),
            "http://localhost:4000/items/42"
        );
        assert_eq!(
            api.item_url("a/b?c#d").unwrap().as_str(),
            "http://localhost:4000/items/a%2Fb%3Fc%23d"
        );

        let api = HttpCatalogApi::new("http://localhost:4000/api/").unwrap();
        assert_eq!(
            api.item_url("7").unwrap().as_str(),
            "http://localhost:4000/api/items/7"
        );
    }

    #[test]
    fn test_non_hierarchical_base_has_no_item_url() {
        let api = HttpCatalogApi::new("mailto:catalog@example.com").unwrap();
        assert!(matches!(
            api.item_url("1"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpCatalogApi::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_build_time_base_is_a_valid_url() {
        assert!(HttpCatalogApi::new(DEFAULT_API_BASE).is_ok());
    }
}
