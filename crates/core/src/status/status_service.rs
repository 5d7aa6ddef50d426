//! Status tracking service.

use std::sync::Arc;

use async_trait::async_trait;

use super::status_model::SystemStatus;
use super::status_traits::{StatusRepositoryTrait, StatusServiceTrait};
use crate::errors::Result;

pub struct StatusService {
    repository: Arc<dyn StatusRepositoryTrait>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn StatusRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl StatusServiceTrait for StatusService {
    fn current(&self) -> Result<SystemStatus> {
        self.repository.get()
    }

    async fn recompute_from_storage(&self) -> Result<SystemStatus> {
        self.repository.recompute().await
    }

    async fn increment_on_insert(&self) -> Result<SystemStatus> {
        self.repository.adjust_total(1).await
    }

    async fn decrement_on_delete(&self) -> Result<SystemStatus> {
        self.repository.adjust_total(-1).await
    }
}
