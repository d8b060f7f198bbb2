//! Core value types.
//!
//! These types enforce their invariants at construction time, so a page
//! request with page zero or an empty record id cannot reach the network.

mod api_url;
mod envelope;
mod filter;
mod page;
mod resource_id;

pub use api_url::ApiUrl;
pub use envelope::MutationEnvelope;
pub use filter::FilterSet;
pub use page::{PageCount, PageRequest, PageResult, estimate_pages};
pub use resource_id::ResourceId;
