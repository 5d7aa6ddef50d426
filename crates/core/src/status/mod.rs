//! System status module - the singleton aggregate tracker.

mod status_model;
mod status_service;
mod status_traits;


// Re-export the public interface
pub use status_model::SystemStatus;
pub use status_service::StatusService;
pub use status_traits::{StatusRepositoryTrait, StatusServiceTrait};
