//! Domain logic for the Slate production backend.
//!
//! Holds the shooting-schedule types returned to the dashboards, the
//! instruction template sent to the text-generation provider, the strict
//! decoder for the provider's output, and the relay that ties them
//! together. Nothing in this crate performs I/O; the provider is reached
//! through the [`provider::TextGenerator`] trait.

pub mod error;
pub mod output;
pub mod prompt;
pub mod provider;
pub mod relay;
pub mod schedule;
pub mod validation;
