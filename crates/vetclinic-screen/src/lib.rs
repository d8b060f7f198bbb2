//! vetclinic-screen - The list screen every clinic entity shares.
//!
//! A [`ListScreen`] owns the record list of one entity type together with its
//! filters, pagination, load state and create/edit modal. It talks to the
//! backend only through a [`ResourceClient`](vetclinic_core::ResourceClient)
//! and to the user only through [`Notifier`](vetclinic_core::Notifier) and
//! [`Confirm`](vetclinic_core::Confirm), so the same controller drives every
//! screen and is testable with a fake client.
//!
//! Loads are sequenced: each one takes a [`LoadTicket`], and only the most
//! recently issued ticket may update the screen.

mod config;
mod reference;
mod screen;
mod state;

pub use config::ScreenConfig;
pub use reference::{REFERENCE_LIMIT, ReferenceIndex, load_reference};
pub use screen::ListScreen;
pub use state::{LoadState, LoadTicket, Modal, Pagination};
