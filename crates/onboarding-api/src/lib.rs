//! Onboarding API
//!
//! The HTTP surface of the onboarding service: one submission endpoint, a
//! health probe, and the setup plumbing around them.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
