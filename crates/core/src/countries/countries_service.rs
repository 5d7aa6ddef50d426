//! Country query/delete service.
//!
//! Thin pass-throughs over the repository plus filter normalization and
//! the status-counter adjustment on deletes. Record creation happens only
//! through the refresh engine, never here.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use super::countries_model::{Country, CountryFilters};
use super::countries_traits::{CountryRepositoryTrait, CountryServiceTrait};
use crate::errors::Result;
use crate::status::StatusServiceTrait;
use crate::Error;

pub struct CountryService {
    repository: Arc<dyn CountryRepositoryTrait>,
    status: Arc<dyn StatusServiceTrait>,
}

impl CountryService {
    pub fn new(
        repository: Arc<dyn CountryRepositoryTrait>,
        status: Arc<dyn StatusServiceTrait>,
    ) -> Self {
        Self { repository, status }
    }
}

#[async_trait]
impl CountryServiceTrait for CountryService {
    fn list_countries(&self, filters: &CountryFilters) -> Result<Vec<Country>> {
        // Currency codes are stored in canonical uppercase form; accept
        // any casing at the boundary.
        let filters = CountryFilters {
            region: filters.region.clone(),
            currency_code: filters.currency_code.as_deref().map(str::to_uppercase),
            sort: filters.sort,
        };
        self.repository.list(&filters)
    }

    fn get_country(&self, name: &str) -> Result<Country> {
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| Error::NotFound(format!("country '{}'", name)))
    }

    async fn delete_country(&self, name: &str) -> Result<()> {
        let removed = self.repository.delete_by_name(name).await?;
        if !removed {
            return Err(Error::NotFound(format!("country '{}'", name)));
        }

        // Counter drift here is transient; the next full refresh
        // recomputes from storage truth.
        if let Err(e) = self.status.decrement_on_delete().await {
            warn!("status decrement after delete failed: {}", e);
        }

        Ok(())
    }
}
