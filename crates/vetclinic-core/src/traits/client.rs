//! Resource client trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::resource::{Payload, Resource};
use crate::types::{FilterSet, MutationEnvelope, PageRequest, PageResult, ResourceId};
use crate::Result;

/// Page size used when a relation lookup goes through [`ResourceClient::list`].
const RELATED_LIMIT: u32 = 100;

/// Translates list/get/create/update/delete intents for one entity type.
///
/// Implementations perform exactly one request per call: no retries and no
/// caching. Response shapes are normalised before they are returned.
#[async_trait]
pub trait ResourceClient<R: Resource>: Send + Sync {
    /// Fetch one page, applying every non-empty filter.
    async fn list(&self, page: &PageRequest, filters: &FilterSet) -> Result<PageResult<R>>;

    /// Fetch one record.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) on a 404.
    async fn get(&self, id: &ResourceId) -> Result<R>;

    /// Create a record; the server assigns the id and timestamps.
    async fn create(&self, payload: &Payload) -> Result<R>;

    /// Partially update a record.
    async fn update(&self, id: &ResourceId, payload: &Payload) -> Result<R>;

    /// Delete a record.
    async fn delete(&self, id: &ResourceId) -> Result<MutationEnvelope<()>>;

    /// Records whose `foreign_key` equals `id`, e.g. appointments of an animal.
    async fn list_related(&self, foreign_key: &str, id: &ResourceId) -> Result<Vec<R>> {
        let page = PageRequest::first(RELATED_LIMIT)?;
        let filters = FilterSet::new().with(foreign_key, id);
        Ok(self.list(&page, &filters).await?.data)
    }
}

#[async_trait]
impl<R, C> ResourceClient<R> for Arc<C>
where
    R: Resource,
    C: ResourceClient<R> + ?Sized,
{
    async fn list(&self, page: &PageRequest, filters: &FilterSet) -> Result<PageResult<R>> {
        (**self).list(page, filters).await
    }

    async fn get(&self, id: &ResourceId) -> Result<R> {
        (**self).get(id).await
    }

    async fn create(&self, payload: &Payload) -> Result<R> {
        (**self).create(payload).await
    }

    async fn update(&self, id: &ResourceId, payload: &Payload) -> Result<R> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &ResourceId) -> Result<MutationEnvelope<()>> {
        (**self).delete(id).await
    }

    async fn list_related(&self, foreign_key: &str, id: &ResourceId) -> Result<Vec<R>> {
        (**self).list_related(foreign_key, id).await
    }
}
