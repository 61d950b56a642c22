//! Exceptions Core Library
//!
//! View-synchronization core for the list of sites excluded from a protective feature:
//! - Immutable state snapshots (`ExceptionsFragmentState`)
//! - A one-way interactor through which the view requests actions
//! - An adapter that applies minimal, identity-keyed render patches
//! - The view controller that ties them together
//!
//! The store side (`ExceptionsService`) is abstracted over `ExceptionsRepository`
//! so front ends can plug in their own storage.

pub mod adapter;
pub mod error;
pub mod interactor;
pub mod services;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use adapter::{AdapterStats, ExceptionsAdapter, PatchOp, RenderPatch, Row, RowId};
pub use error::{CoreError, CoreResult};
pub use interactor::{ChannelInteractor, ExceptionsAction, ExceptionsViewInteractor};
pub use services::ExceptionsService;
pub use traits::ExceptionsRepository;
pub use types::{ExceptionsFragmentState, ExceptionsItem};
pub use view::{ExceptionsView, ExceptionsWidgets, Label, ViewVisibility, Visibility};
