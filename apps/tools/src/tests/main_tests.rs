use catalog::MockCatalog;

use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("date")
}

struct Captured {
    status: Result<Status>,
    out: String,
    err: String,
}

fn invoke(args: &[&str]) -> Captured {
    let cli = Cli::try_parse_from(std::iter::once("podruzhka-tools").chain(args.iter().copied()))
        .expect("valid arguments");
    let catalog = MockCatalog::for_date(today());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(&cli, &catalog, today(), &mut out, &mut err);
    Captured {
        status,
        out: String::from_utf8(out).expect("utf-8 stdout"),
        err: String::from_utf8(err).expect("utf-8 stderr"),
    }
}

#[test]
fn scan_hit_prints_product_card() {
    let cmd = invoke(&["scan", "4607086567890"]);
    assert_eq!(cmd.status.expect("scan runs"), Status::Success);
    assert!(cmd.out.contains("Помада Matt Luxe №45"));
    assert!(cmd.out.contains("599 ₽"));
    assert!(cmd.err.is_empty());
}

#[test]
fn scan_miss_fails_with_notice() {
    let cmd = invoke(&["scan", "0000000000000"]);
    let status = cmd.status.expect("scan runs");
    assert_eq!(status, Status::NotFound);
    assert_eq!(cmd.err.trim(), "Товар не найден");
    assert!(cmd.out.is_empty());
}

#[test]
fn scan_miss_as_json_reports_error_code() {
    let cmd = invoke(&["--json", "scan", "123"]);
    assert_eq!(cmd.status.expect("scan runs"), Status::NotFound);
    let body: serde_json::Value = serde_json::from_str(&cmd.out).expect("json body");
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["barcode"], "123");
    assert_eq!(body["message"], "Товар не найден");
}

#[test]
fn orders_filter_by_status_in_catalog_order() {
    let cmd = invoke(&["orders", "--status", "pending"]);
    assert_eq!(cmd.status.expect("orders runs"), Status::Success);
    let ids: Vec<&str> = cmd
        .out
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(ids, ["ORD-001", "ORD-003"]);
}

#[test]
fn orders_as_json_keep_status_field() {
    let cmd = invoke(&["orders", "--status", "Assembled", "--json"]);
    assert_eq!(cmd.status.expect("orders runs"), Status::Success);
    let orders: Vec<serde_json::Value> = serde_json::from_str(&cmd.out).expect("json list");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], "ORD-002");
    assert_eq!(orders[0]["status"], "assembled");
}

#[test]
fn unknown_order_status_is_an_error() {
    let cmd = invoke(&["orders", "--status", "shipped"]);
    let err = cmd.status.expect_err("unknown status");
    assert!(err.to_string().contains("unknown order status 'shipped'"));
}

#[test]
fn deliveries_use_relative_arrival_labels() {
    let cmd = invoke(&["deliveries"]);
    assert_eq!(cmd.status.expect("deliveries runs"), Status::Success);
    let lines: Vec<&str> = cmd.out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Коробка #1234"));
    assert!(lines[0].contains("24 товара"));
    assert!(lines[0].ends_with("Сегодня"));
    assert!(lines[1].ends_with("Вчера"));
}
