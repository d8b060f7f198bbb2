//! Seams between the list-screen controller and its collaborators.

mod client;
mod confirm;
mod notify;

pub use client::ResourceClient;
pub use confirm::{AlwaysConfirm, Confirm};
pub use notify::{Notice, NoticeLevel, Notifier, SilentNotifier};
