//! Tests for the in-memory catalogue store.

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

use super::*;
use crate::test_support::fixture_timestamp;

fn record(name: &str, category_id: i32) -> ProductRecord {
    ProductRecord {
        name: name.to_owned(),
        description: format!("{name} for workshop use"),
        price: Decimal::new(1999, 2),
        offer_price: None,
        category_id,
        sub_category1_id: None,
        sub_category2_id: None,
        image_url: None,
        created_at: None,
    }
}

fn dated(mut record: ProductRecord, days_ago: i64) -> ProductRecord {
    record.created_at = Some(fixture_timestamp() - Duration::days(days_ago));
    record
}

fn inbox_message(unique_id: &str, minutes_ago: i64) -> NewInboxMessage {
    NewInboxMessage {
        unique_id: unique_id.to_owned(),
        folder: crate::domain::CONTACT_FORM_FOLDER.to_owned(),
        from_name: "Asha Rao".to_owned(),
        from_email: "asha@example.com".to_owned(),
        subject: "Bulk order".to_owned(),
        snippet: "Need forty discs".to_owned(),
        text_body: "Need forty discs".to_owned(),
        received_at: fixture_timestamp() - Duration::minutes(minutes_ago),
        unread: true,
        is_contact_form: true,
        labels: Vec::new(),
        company: None,
        phone: None,
        gst_number: None,
        message: Some("Need forty discs".to_owned()),
    }
}

#[fixture]
fn store() -> InMemoryCatalogue {
    let mut drill = dated(record("Cordless Drill", 4), 1);
    drill.sub_category1_id = Some(10);
    drill.sub_category2_id = Some(100);
    let mut grinder = dated(record("Angle Grinder", 4), 3);
    grinder.sub_category1_id = Some(11);
    InMemoryCatalogue::from_seed(
        CatalogueSeed::storefront_categories()
            .sub_category1(10, 4, "Makita")
            .sub_category1(11, 4, "Bosch")
            .sub_category1(12, 1, "Norton")
            .sub_category2(100, 10, "Drills")
            .sub_category2(101, 10, "Impact Drivers")
            .product(1, grinder)
            .product(2, drill)
            .product(3, record("Flap Disc", 1))
            .message(1, inbox_message("older", 30))
            .message(2, inbox_message("newer", 5)),
    )
}

#[rstest]
#[tokio::test]
async fn categories_are_sorted_by_name(store: InMemoryCatalogue) {
    let names: Vec<String> = store
        .list_categories()
        .await
        .expect("categories")
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Abrasives", "Cutting Tools", "Pneumatic", "Power Tools"]);
}

#[rstest]
#[tokio::test]
async fn brands_are_scoped_to_their_category(store: InMemoryCatalogue) {
    let brands = store.list_sub_categories1(4).await.expect("brands");
    let names: Vec<&str> = brands.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Bosch", "Makita"]);
}

#[rstest]
#[case("makita", Some(10))]
#[case("MAKITA", Some(10))]
#[case("Maki", None)]
#[tokio::test]
async fn brand_lookup_is_exact_ignoring_case(
    store: InMemoryCatalogue,
    #[case] name: &str,
    #[case] expected: Option<i32>,
) {
    let found = store.find_sub_category1_by_name(name).await.expect("lookup");
    assert_eq!(found.map(|b| b.id), expected);
}

#[rstest]
#[tokio::test]
async fn products_are_newest_first_with_undated_last(store: InMemoryCatalogue) {
    let ids: Vec<i32> = store
        .list_all()
        .await
        .expect("products")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[rstest]
#[tokio::test]
async fn products_carry_taxonomy_names(store: InMemoryCatalogue) {
    let drill = store.find_by_id(2).await.expect("find").expect("drill");
    assert_eq!(drill.category_name.as_deref(), Some("Power Tools"));
    assert_eq!(drill.sub_category1_name.as_deref(), Some("Makita"));
    assert_eq!(drill.sub_category2_name.as_deref(), Some("Drills"));
}

fn hex_bit_set() -> ProductRecord {
    let mut bits = dated(record("Hex Bit Set", 4), 2);
    bits.description = "Chrome vanadium bits".to_owned();
    bits.sub_category1_id = Some(10);
    bits.sub_category2_id = Some(101);
    bits
}

async fn search_ids(store: &InMemoryCatalogue, term: &str) -> Vec<i32> {
    store
        .search(term)
        .await
        .expect("search")
        .into_iter()
        .map(|p| p.id)
        .collect()
}

#[rstest]
#[case("impact")]
#[case("VANADIUM")]
#[tokio::test]
async fn search_reaches_descriptions_and_second_level_names(
    store: InMemoryCatalogue,
    #[case] term: &str,
) {
    let bits = store.insert(&hex_bit_set()).await.expect("insert");

    assert_eq!(search_ids(&store, term).await, [bits.id]);
}

#[rstest]
#[tokio::test]
async fn repeated_search_returns_the_same_order(store: InMemoryCatalogue) {
    let bits = store.insert(&hex_bit_set()).await.expect("insert");

    let first = search_ids(&store, "power").await;
    let second = search_ids(&store, "power").await;

    assert_eq!(first, [2, bits.id, 1]);
    assert_eq!(first, second);
}

#[rstest]
#[case("drill", vec![2])]
#[case("bosch", vec![1])]
#[case("abrasives", vec![3])]
#[case("   ", vec![2, 1, 3])]
#[tokio::test]
async fn search_matches_product_and_taxonomy_names(
    store: InMemoryCatalogue,
    #[case] term: &str,
    #[case] expected: Vec<i32>,
) {
    let ids: Vec<i32> = store
        .search(term)
        .await
        .expect("search")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
#[tokio::test]
async fn insert_update_and_delete_round_trip(store: InMemoryCatalogue) {
    let created = store.insert(&record("Belt Sander", 4)).await.expect("insert");
    assert_eq!(created.id, 4);
    assert_eq!(created.category_name.as_deref(), Some("Power Tools"));

    let mut changed = record("Belt Sander XL", 4);
    changed.offer_price = Some(Decimal::new(1500, 2));
    assert!(store.update(created.id, &changed).await.expect("update"));
    let reloaded = store.find_by_id(created.id).await.expect("find").expect("present");
    assert_eq!(reloaded.name, "Belt Sander XL");

    assert!(store.delete(created.id).await.expect("delete"));
    assert!(!store.delete(created.id).await.expect("second delete"));
    assert!(!store.update(99, &changed).await.expect("missing update"));
}

#[rstest]
#[tokio::test]
async fn create_category_assigns_next_id(store: InMemoryCatalogue) {
    let created = store.create_category("Safety").await.expect("create");
    assert_eq!(created.id, 5);
    let duplicate = store.create_category("Safety").await;
    assert!(matches!(duplicate, Err(TaxonomyRepositoryError::Query { .. })));
}

#[rstest]
#[tokio::test]
async fn messages_list_newest_first_and_mark_read(store: InMemoryCatalogue) {
    let ids: Vec<i32> = store
        .list_messages()
        .await
        .expect("messages")
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, [2, 1]);

    let read_at = Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).single().expect("timestamp");
    assert!(store.mark_read(1, read_at).await.expect("mark"));
    assert!(!store.mark_read(42, read_at).await.expect("missing"));
    let messages = store.list_messages().await.expect("messages");
    let read = messages.iter().find(|m| m.id == 1).expect("message 1");
    assert!(!read.unread);
    assert_eq!(read.updated_at, read_at);
}

#[rstest]
#[tokio::test]
async fn saved_messages_receive_fresh_ids(store: InMemoryCatalogue) {
    let saved = store.save(&inbox_message("fresh", 0)).await.expect("save");
    assert_eq!(saved.id, 3);
    assert_eq!(saved.created_at, saved.received_at);
}

#[rstest]
#[tokio::test]
async fn unavailable_store_fails_every_port(store: InMemoryCatalogue) {
    store.set_unavailable(true);
    assert!(matches!(
        store.list_categories().await,
        Err(TaxonomyRepositoryError::Connection { .. })
    ));
    assert!(matches!(
        store.list_all().await,
        Err(ProductRepositoryError::Connection { .. })
    ));
    assert!(matches!(
        store.list_messages().await,
        Err(InboxRepositoryError::Connection { .. })
    ));

    store.set_unavailable(false);
    assert!(store.list_all().await.is_ok());
}
