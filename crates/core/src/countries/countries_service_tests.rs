use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::countries_model::{Country, CountryFilters, CountryUpsert, SortMode};
use super::countries_service::CountryService;
use super::countries_traits::{CountryRepositoryTrait, CountryServiceTrait};
use crate::errors::Result;
use crate::status::{StatusServiceTrait, SystemStatus};
use crate::Error;

#[derive(Default)]
struct InMemoryRepository {
    rows: Mutex<HashMap<String, Country>>,
    seen_filters: Mutex<Vec<CountryFilters>>,
}

impl InMemoryRepository {
    fn seed(&self, name: &str) {
        self.rows.lock().unwrap().insert(
            name.to_lowercase(),
            Country {
                id: name.to_lowercase(),
                name: name.to_string(),
                capital: None,
                region: None,
                population: 1,
                currency_code: None,
                exchange_rate: None,
                estimated_gdp: None,
                flag_url: None,
                last_refreshed_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl CountryRepositoryTrait for InMemoryRepository {
    async fn upsert(&self, _record: CountryUpsert) -> Result<Country> {
        unimplemented!("the query service never writes")
    }

    fn list(&self, filters: &CountryFilters) -> Result<Vec<Country>> {
        self.seen_filters.lock().unwrap().push(filters.clone());
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Country>> {
        Ok(self.rows.lock().unwrap().get(&name.to_lowercase()).cloned())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .remove(&name.to_lowercase())
            .is_some())
    }
}

#[derive(Default)]
struct CountingStatus {
    decrements: AtomicI64,
}

#[async_trait]
impl StatusServiceTrait for CountingStatus {
    fn current(&self) -> Result<SystemStatus> {
        Ok(SystemStatus::default())
    }

    async fn recompute_from_storage(&self) -> Result<SystemStatus> {
        Ok(SystemStatus::default())
    }

    async fn increment_on_insert(&self) -> Result<SystemStatus> {
        Ok(SystemStatus::default())
    }

    async fn decrement_on_delete(&self) -> Result<SystemStatus> {
        self.decrements.fetch_add(1, Ordering::SeqCst);
        Ok(SystemStatus::default())
    }
}

fn service() -> (Arc<InMemoryRepository>, Arc<CountingStatus>, CountryService) {
    let repository = Arc::new(InMemoryRepository::default());
    let status = Arc::new(CountingStatus::default());
    let service = CountryService::new(repository.clone(), status.clone());
    (repository, status, service)
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let (repository, _, service) = service();
    repository.seed("Japan");

    assert_eq!(service.get_country("JAPAN").unwrap().name, "Japan");
    assert_eq!(service.get_country("japan").unwrap().name, "Japan");
}

#[tokio::test]
async fn missing_record_is_a_not_found_error() {
    let (_, _, service) = service();
    let err = service.get_country("Atlantis").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn currency_filter_is_uppercased_before_the_repository() {
    let (repository, _, service) = service();
    let filters = CountryFilters {
        region: Some("Asia".to_string()),
        currency_code: Some("jpy".to_string()),
        sort: Some(SortMode::NameAsc),
    };
    service.list_countries(&filters).unwrap();

    let seen = repository.seen_filters.lock().unwrap();
    assert_eq!(seen[0].currency_code.as_deref(), Some("JPY"));
    assert_eq!(seen[0].region.as_deref(), Some("Asia"));
    assert_eq!(seen[0].sort, Some(SortMode::NameAsc));
}

#[tokio::test]
async fn delete_reports_not_found_without_touching_the_counter() {
    let (_, status, service) = service();
    let err = service.delete_country("Atlantis").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(status.decrements.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_removes_case_insensitively_and_decrements() {
    let (repository, status, service) = service();
    repository.seed("Japan");

    service.delete_country("jApAn").await.unwrap();

    assert!(repository.get_by_name("Japan").unwrap().is_none());
    assert_eq!(status.decrements.load(Ordering::SeqCst), 1);
}
