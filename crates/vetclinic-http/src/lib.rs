//! vetclinic-http - reqwest-backed resource client for the clinic API.
//!
//! [`HttpClient`] owns the connection pool and settings; [`HttpResource`]
//! binds it to one entity type and implements
//! [`ResourceClient`](vetclinic_core::ResourceClient).
//!
//! ```no_run
//! use vetclinic_core::models::Animal;
//! use vetclinic_core::{ApiUrl, FilterSet, PageRequest, ResourceClient};
//! use vetclinic_http::{ClientConfig, HttpClient};
//!
//! # async fn example() -> vetclinic_core::Result<()> {
//! let api = ApiUrl::new("http://localhost:8000")?;
//! let http = HttpClient::new(ClientConfig::new(api))?;
//! let animals = http.resource::<Animal>();
//!
//! let page = animals
//!     .list(&PageRequest::first(10)?, &FilterSet::new().with("especie_animal", "Perro"))
//!     .await?;
//! println!("{} of {} pages", page.data.len(), page.pages());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod resource;
mod wire;

pub use client::HttpClient;
pub use config::{ClientConfig, PaginationMode};
pub use resource::HttpResource;
