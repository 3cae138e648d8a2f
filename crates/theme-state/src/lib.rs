//! Theme state management
//!
//! Binds the pure token generator to an application: [`ThemeStore`]
//! holds the active configuration, regenerates the derived theme on
//! every change, pushes it to a [`ThemeBinding`], persists the
//! configuration, and notifies subscribers, all synchronously.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod store;

pub use binding::{MemoryBinding, ThemeBinding};
pub use store::{Result, StateError, SubscriptionId, ThemeStore};
