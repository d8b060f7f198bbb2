//! Lookup tables of related records, e.g. the animals offered when booking
//! an appointment.

use tracing::{debug, instrument};

use vetclinic_core::{FilterSet, PageRequest, Resource, ResourceClient, Result};

/// How many records a lookup table fetches.
pub const REFERENCE_LIMIT: u32 = 100;

/// Records of another entity, addressable by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceIndex<S> {
    records: Vec<S>,
}

impl<S: Resource> ReferenceIndex<S> {
    pub fn new(records: Vec<S>) -> Self {
        Self { records }
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }

    /// Display name for `id`, or the id itself if it is not in the table.
    pub fn name_of(&self, id: &str) -> String {
        self.get(id)
            .map(Resource::display_name)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn records(&self) -> &[S] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch the first [`REFERENCE_LIMIT`] records of `S`, unfiltered.
#[instrument(skip(client), fields(resource = S::PATH))]
pub async fn load_reference<S, C>(client: &C) -> Result<ReferenceIndex<S>>
where
    S: Resource,
    C: ResourceClient<S> + ?Sized,
{
    let page = PageRequest::first(REFERENCE_LIMIT)?;
    let result = client.list(&page, &FilterSet::new()).await?;
    debug!(received = result.data.len(), "reference data loaded");
    Ok(ReferenceIndex::new(result.data))
}
