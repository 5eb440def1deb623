use std::io::Write;

use catalog::{open, CatalogError, CatalogSource, FixtureCatalog};
use shared::domain::OrderStatus;

const FIXTURE: &str = r#"{
    "products": [
        {"id": "p-1", "name": "Шампунь", "barcode": "2000000000015", "price": 350, "stock": 7, "category": "Уход"}
    ],
    "orders": [
        {"id": "ORD-100", "customer": "Ольга Т.", "items": 1, "status": "issued"},
        {"id": "ORD-101", "customer": "Ирина В.", "items": 4, "status": "pending"}
    ],
    "deliveries": [
        {"box_number": 77, "item_count": 12, "received_on": "2026-10-01"}
    ]
}"#;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn loads_fixture_from_disk() {
    let file = write_fixture(FIXTURE);
    let catalog = FixtureCatalog::load(file.path()).expect("load fixture");

    assert_eq!(catalog.products().len(), 1);
    assert_eq!(
        catalog
            .find_by_barcode("2000000000015")
            .map(|p| p.stock),
        Some(7)
    );
    let issued = catalog.filter_orders(OrderStatus::Issued);
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].customer, "Ольга Т.");
    assert_eq!(catalog.deliveries()[0].box_number, 77);
}

#[test]
fn deliveries_are_optional_in_fixtures() {
    let file = write_fixture(r#"{"products": [], "orders": []}"#);
    let catalog = FixtureCatalog::load(file.path()).expect("load fixture");
    assert!(catalog.deliveries().is_empty());
}

#[test]
fn open_without_fixture_uses_builtin_mock() {
    let catalog = open(None).expect("mock catalog");
    assert_eq!(catalog.products().len(), 3);
    assert_eq!(catalog.orders().len(), 3);
}

#[test]
fn open_with_fixture_uses_the_file() {
    let file = write_fixture(FIXTURE);
    let catalog = open(Some(file.path())).expect("fixture catalog");
    assert!(catalog.find_by_barcode("4607086567890").is_none());
    assert!(catalog.find_by_barcode("2000000000015").is_some());
}

#[test]
fn missing_fixture_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = FixtureCatalog::load(&path).expect_err("missing file");
    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
