//! reqwest-backed implementation of [`LookupApi`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};

use super::{ApiResult, LookupApi};
use crate::lookup::LookupResource;
use crate::models::{NewItem, OrderableItem};

#[derive(Clone, Debug)]
pub struct RestClient {
    base_url: String,
    http: Client,
}

impl RestClient {
    /// `base_url` must be absolute; a trailing slash is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, resource: LookupResource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    pub fn item_url(&self, resource: LookupResource, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(resource),
            utf8_percent_encode(id, NON_ALPHANUMERIC)
        )
    }

    /// Send the session cookie owned by the host page along with every request
    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }
}

#[async_trait(?Send)]
impl LookupApi for RestClient {
    async fn list(&self, resource: LookupResource) -> ApiResult<Vec<OrderableItem>> {
        let items = Self::authorized(self.http.get(self.collection_url(resource)))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<OrderableItem>>()
            .await?;
        Ok(items)
    }

    async fn create(&self, resource: LookupResource, item: &NewItem) -> ApiResult<()> {
        Self::authorized(self.http.post(self.collection_url(resource)))
            .json(item)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, resource: LookupResource, item: &OrderableItem) -> ApiResult<()> {
        Self::authorized(self.http.put(self.item_url(resource, &item.id)))
            .json(item)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, resource: LookupResource, id: &str) -> ApiResult<()> {
        Self::authorized(self.http.delete(self.item_url(resource, id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
