//! [`ResourceClient`] over HTTP for one entity type.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument, warn};

use vetclinic_core::{
    Error, FilterSet, MutationEnvelope, PageRequest, PageResult, Payload, Resource, ResourceClient,
    ResourceId, Result,
};

use crate::client::{HttpClient, decode};
use crate::config::PaginationMode;
use crate::wire::{DeleteBody, ListBody};

/// An [`HttpClient`] bound to entity `R`.
///
/// Routes are `/{R::PATH}` for collections and `/{R::PATH}/{id}` for records.
pub struct HttpResource<R> {
    http: HttpClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResource<R> {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _marker: PhantomData,
        }
    }

    fn not_found(id: &ResourceId) -> impl FnOnce(Error) -> Error + '_ {
        move |err| err.not_found_as(R::PATH, id.as_str())
    }
}

impl<R> Clone for HttpResource<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for HttpResource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResource")
            .field("path", &R::PATH)
            .field("base", &self.http.base().as_str())
            .finish()
    }
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for HttpResource<R> {
    #[instrument(skip(self, filters), fields(resource = R::PATH, page = page.page(), limit = page.limit()))]
    async fn list(&self, page: &PageRequest, filters: &FilterSet) -> Result<PageResult<R>> {
        let mut query = vec![
            ("skip".to_string(), page.skip().to_string()),
            ("limit".to_string(), page.limit().to_string()),
        ];
        query.extend(filters.query_pairs());

        let url = self.http.base().collection_url(R::PATH);
        let value = self.http.get_value(url, &query).await?;
        let default_message = self.http.locale().listed(&R::LABELS);

        let result = match ListBody::<R>::from_value(value)? {
            ListBody::Envelope(body) => body.into_result(page, default_message),
            ListBody::Bare(data) => {
                if self.http.pagination() == PaginationMode::Strict {
                    return Err(Error::Decode {
                        message: format!(
                            "/{} answered a bare array; strict pagination needs a reported total",
                            R::PATH
                        ),
                    });
                }
                PageResult::from_bare(data, page, default_message)
            }
        };

        if result.total_pages.is_estimated() {
            warn!(
                received = result.data.len(),
                pages = result.pages(),
                "page count estimated from response length"
            );
        }
        debug!(received = result.data.len(), pages = result.pages(), "listed");
        Ok(result)
    }

    #[instrument(skip(self), fields(resource = R::PATH, %id))]
    async fn get(&self, id: &ResourceId) -> Result<R> {
        let url = self.http.base().record_url(R::PATH, id);
        self.http.get_json(url).await.map_err(Self::not_found(id))
    }

    #[instrument(skip(self, payload), fields(resource = R::PATH, fields = payload.len()))]
    async fn create(&self, payload: &Payload) -> Result<R> {
        let url = self.http.base().collection_url(R::PATH);
        let created: R = self.http.send_json(Method::POST, url, payload).await?;
        debug!(id = %created.id(), "created");
        Ok(created)
    }

    #[instrument(skip(self, payload), fields(resource = R::PATH, %id, fields = payload.len()))]
    async fn update(&self, id: &ResourceId, payload: &Payload) -> Result<R> {
        let url = self.http.base().record_url(R::PATH, id);
        self.http
            .send_json(Method::PUT, url, payload)
            .await
            .map_err(Self::not_found(id))
    }

    #[instrument(skip(self), fields(resource = R::PATH, %id))]
    async fn delete(&self, id: &ResourceId) -> Result<MutationEnvelope<()>> {
        let url = self.http.base().record_url(R::PATH, id);
        let (status, body) = self.http.delete(url).await.map_err(Self::not_found(id))?;

        let body = match body {
            Some(value) => serde_json::from_value::<DeleteBody>(value).map_err(decode)?,
            None => DeleteBody::default(),
        };
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.http.locale().deleted(&R::LABELS));

        Ok(MutationEnvelope::new(
            (),
            message,
            body.success.unwrap_or(true),
            status,
        ))
    }

    /// Relation lookups send only the foreign key: the API returns every match.
    #[instrument(skip(self), fields(resource = R::PATH, %foreign_key, %id))]
    async fn list_related(&self, foreign_key: &str, id: &ResourceId) -> Result<Vec<R>> {
        let url = self.http.base().collection_url(R::PATH);
        let query = [(foreign_key.to_string(), id.to_string())];
        let value = self.http.get_value(url, &query).await?;

        let data = match ListBody::<R>::from_value(value)? {
            ListBody::Bare(data) => data,
            ListBody::Envelope(body) => body.data,
        };
        debug!(received = data.len(), "related records");
        Ok(data)
    }
}
