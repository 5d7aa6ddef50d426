mod common;

use rust_decimal_macros::dec;

use atlas_core::countries::{CountryFilters, CountryRepositoryTrait, SortMode};
use atlas_storage_sqlite::countries::CountryRepository;
use common::{test_db, upsert_record};

fn repository(db: &common::TestDb) -> CountryRepository {
    CountryRepository::new(db.pool.clone(), db.writer.clone())
}

#[tokio::test]
async fn upsert_collapses_case_variants_onto_one_row() {
    let db = test_db();
    let repo = repository(&db);

    let mut first = upsert_record("Japan", 100);
    first.capital = Some("Tokyo".to_string());
    first.currency_code = Some("JPY".to_string());
    first.exchange_rate = Some(dec!(151.4));
    first.estimated_gdp = Some(dec!(990000.12));
    let created = repo.upsert(first).await.unwrap();

    // Same identity under a different casing; every field overwritten,
    // including the rate and estimate dropping back to NULL.
    let second = upsert_record("JAPAN", 200);
    let updated = repo.upsert(second).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "JAPAN");
    assert_eq!(updated.population, 200);
    assert_eq!(updated.capital, None);
    assert_eq!(updated.currency_code, None);
    assert_eq!(updated.exchange_rate, None);
    assert_eq!(updated.estimated_gdp, None);
    assert!(updated.last_refreshed_at >= created.last_refreshed_at);

    let all = repo.list(&CountryFilters::default()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "JAPAN");
}

#[tokio::test]
async fn decimal_fields_round_trip_through_text_storage() {
    let db = test_db();
    let repo = repository(&db);

    let mut record = upsert_record("Testland", 1000);
    record.currency_code = Some("ABC".to_string());
    record.exchange_rate = Some(dec!(2));
    record.estimated_gdp = Some(dec!(750000.25));
    repo.upsert(record).await.unwrap();

    let stored = repo.get_by_name("testland").unwrap().unwrap();
    assert_eq!(stored.exchange_rate, Some(dec!(2)));
    assert_eq!(stored.estimated_gdp, Some(dec!(750000.25)));
}

#[tokio::test]
async fn get_by_name_matches_case_insensitively() {
    let db = test_db();
    let repo = repository(&db);

    repo.upsert(upsert_record("Iceland", 370_000)).await.unwrap();

    assert!(repo.get_by_name("ICELAND").unwrap().is_some());
    assert!(repo.get_by_name("iceland").unwrap().is_some());
    assert!(repo.get_by_name("Atlantis").unwrap().is_none());
}

#[tokio::test]
async fn delete_by_name_reports_whether_a_row_was_removed() {
    let db = test_db();
    let repo = repository(&db);

    repo.upsert(upsert_record("Iceland", 370_000)).await.unwrap();

    assert!(repo.delete_by_name("ICELAND").await.unwrap());
    assert!(!repo.delete_by_name("Iceland").await.unwrap());
    assert!(repo.get_by_name("Iceland").unwrap().is_none());
}

#[tokio::test]
async fn list_filters_by_region_and_currency() {
    let db = test_db();
    let repo = repository(&db);

    let mut japan = upsert_record("Japan", 100);
    japan.region = Some("Asia".to_string());
    japan.currency_code = Some("JPY".to_string());
    japan.exchange_rate = Some(dec!(151.4));
    japan.estimated_gdp = Some(dec!(1));
    repo.upsert(japan).await.unwrap();

    let mut france = upsert_record("France", 100);
    france.region = Some("Europe".to_string());
    france.currency_code = Some("EUR".to_string());
    france.exchange_rate = Some(dec!(0.92));
    france.estimated_gdp = Some(dec!(2));
    repo.upsert(france).await.unwrap();

    let mut germany = upsert_record("Germany", 100);
    germany.region = Some("Europe".to_string());
    germany.currency_code = Some("EUR".to_string());
    germany.exchange_rate = Some(dec!(0.92));
    germany.estimated_gdp = Some(dec!(3));
    repo.upsert(germany).await.unwrap();

    let europe = repo
        .list(&CountryFilters {
            region: Some("Europe".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(europe.len(), 2);

    let eur = repo
        .list(&CountryFilters {
            currency_code: Some("EUR".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(eur.len(), 2);

    let both = repo
        .list(&CountryFilters {
            region: Some("Asia".to_string()),
            currency_code: Some("JPY".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].name, "Japan");
}

#[tokio::test]
async fn gdp_sort_is_numeric_with_missing_estimates_last() {
    let db = test_db();
    let repo = repository(&db);

    // Text storage would sort "900" above "21000" lexically; the cast
    // must make this numeric.
    let mut small = upsert_record("Smallland", 10);
    small.currency_code = Some("AAA".to_string());
    small.exchange_rate = Some(dec!(1));
    small.estimated_gdp = Some(dec!(900));
    repo.upsert(small).await.unwrap();

    let mut big = upsert_record("Bigland", 10);
    big.currency_code = Some("BBB".to_string());
    big.exchange_rate = Some(dec!(1));
    big.estimated_gdp = Some(dec!(21000));
    repo.upsert(big).await.unwrap();

    repo.upsert(upsert_record("Nulland", 10)).await.unwrap();

    let sorted = repo
        .list(&CountryFilters {
            sort: Some(SortMode::GdpDesc),
            ..Default::default()
        })
        .unwrap();
    let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bigland", "Smallland", "Nulland"]);
}

#[tokio::test]
async fn name_sort_is_alphabetical() {
    let db = test_db();
    let repo = repository(&db);

    repo.upsert(upsert_record("Chad", 1)).await.unwrap();
    repo.upsert(upsert_record("Albania", 1)).await.unwrap();
    repo.upsert(upsert_record("Brazil", 1)).await.unwrap();

    let sorted = repo
        .list(&CountryFilters {
            sort: Some(SortMode::NameAsc),
            ..Default::default()
        })
        .unwrap();
    let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Albania", "Brazil", "Chad"]);
}

#[tokio::test]
async fn invalid_records_are_rejected_before_the_write() {
    let db = test_db();
    let repo = repository(&db);

    let record = upsert_record("Badland", -5);
    assert!(repo.upsert(record).await.is_err());

    assert!(repo.list(&CountryFilters::default()).unwrap().is_empty());
}
