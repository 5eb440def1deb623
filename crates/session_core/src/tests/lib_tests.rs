use super::*;
use catalog::MockCatalog;
use chrono::NaiveDate;

fn session() -> Session<MockCatalog> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("date");
    Session::new(MockCatalog::for_date(today))
}

#[test]
fn starts_on_home_with_empty_session() {
    let session = session();
    let state = session.state();
    assert_eq!(state.screen, Screen::Home);
    assert!(state.scan_input.is_empty());
    assert!(state.scanned_product.is_none());
    assert_eq!(state.inventory_count, 0);
    assert_eq!(state.box_count, 0);
    assert_eq!(state.assemble_tab, AssembleTab::Pending);
    assert!(state.notification.is_none());
    assert!(!state.can_go_back());
}

#[test]
fn scan_resolves_lipstick_barcode() {
    let mut session = session();
    let product = session.scan("4607086567890").expect("known barcode");

    assert_eq!(product.name, "Помада Matt Luxe №45");
    assert_eq!(product.price, 599);
    assert_eq!(product.stock, 24);
    assert_eq!(session.state().scanned_product.as_ref(), Some(&product));
    assert!(session.state().notification.is_none());
}

#[test]
fn scan_resolves_every_catalog_barcode() {
    let mut session = session();
    let barcodes: Vec<String> = session
        .catalog()
        .products()
        .iter()
        .map(|p| p.barcode.clone())
        .collect();

    for barcode in barcodes {
        let product = session.scan(&barcode).expect("catalog barcode");
        assert_eq!(product.barcode, barcode);
        let scanned = session.state().scanned_product.as_ref().expect("scanned");
        assert_eq!(scanned.barcode, session.state().scan_input);
    }
}

#[test]
fn unknown_barcode_clears_product_and_raises_notice() {
    let mut session = session();
    session.scan("4607086567891").expect("known barcode");

    let err = session.scan("0000000000000").expect_err("unknown barcode");
    assert_eq!(err, ScanError::not_found("0000000000000"));
    assert!(session.state().scanned_product.is_none());
    let notification = session.state().notification.as_ref().expect("notice");
    assert_eq!(notification.message(), "Товар не найден");
    assert_eq!(
        notification,
        &Notification::ProductNotFound {
            barcode: "0000000000000".to_string()
        }
    );
}

#[test]
fn empty_input_is_not_found() {
    let mut session = session();
    assert!(session.scan("").is_err());
    assert!(session.state().scanned_product.is_none());
    assert!(session.state().notification.is_some());
}

#[test]
fn scan_input_is_matched_verbatim() {
    let mut session = session();
    assert!(session.scan(" 4607086567890").is_err());
    assert!(session.scan("4607086567890\n").is_err());
}

#[test]
fn successful_scan_replaces_pending_notice() {
    let mut session = session();
    session.scan("nope").expect_err("miss");
    session.scan("4607086567892").expect("hit");
    assert!(session.state().notification.is_none());
}

#[test]
fn dismissing_notice_keeps_session_going() {
    let mut session = session();
    session.scan("nope").expect_err("miss");

    assert_eq!(
        session.dispatch(Action::DismissNotification),
        Outcome::NotificationDismissed
    );
    assert!(session.state().notification.is_none());
    assert_eq!(
        session.dispatch(Action::DismissNotification),
        Outcome::Unchanged
    );
    assert_eq!(session.state().scan_input, "nope");
}

#[test]
fn submit_uses_typed_input() {
    let mut session = session();
    session.dispatch(Action::ScanInputChanged("4607086567891".to_string()));
    let outcome = session.dispatch(Action::SubmitScan);
    match outcome {
        Outcome::Scanned(product) => assert_eq!(product.name, "Тушь для ресниц Mega Volume"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn filters_orders_by_status() {
    let session = session();
    let pending: Vec<_> = session
        .filter_orders(OrderStatus::Pending)
        .into_iter()
        .map(|o| o.id.0)
        .collect();
    assert_eq!(pending, vec!["ORD-001", "ORD-003"]);

    let assembled = session.filter_orders(OrderStatus::Assembled);
    assert_eq!(assembled.len(), 1);
    assert_eq!(assembled[0].id, OrderId::new("ORD-002"));
}

#[test]
fn assemble_tab_selects_order_list() {
    let mut session = session();
    assert_eq!(session.assemble_orders().len(), 2);

    assert_eq!(
        session.dispatch(Action::SelectAssembleTab(AssembleTab::Assembled)),
        Outcome::TabSelected(AssembleTab::Assembled)
    );
    let ids: Vec<_> = session.assemble_orders().into_iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec!["ORD-002"]);
    assert_eq!(session.ready_for_issue().len(), 1);
}

#[test]
fn counters_increment_by_one() {
    let mut session = session();
    for n in 1..=7 {
        assert_eq!(session.increment_inventory_count(), n);
    }
    assert_eq!(session.state().inventory_count, 7);
    assert_eq!(session.state().box_count, 0);

    assert_eq!(session.increment_box_count(), 1);
    assert_eq!(session.increment_box_count(), 2);
    assert_eq!(session.state().inventory_count, 7);
}

#[test]
fn counters_saturate_instead_of_overflowing() {
    let mut state = SessionState {
        inventory_count: u64::MAX,
        ..SessionState::default()
    };
    let catalog = MockCatalog::default();
    assert_eq!(
        reduce(&mut state, &catalog, Action::IncrementInventoryCount),
        Outcome::InventoryCount(u64::MAX)
    );
}

#[test]
fn home_is_reachable_from_any_path() {
    let mut session = session();
    let paths: [&[Screen]; 3] = [
        &[Screen::Scan],
        &[Screen::Inventory, Screen::Unbox, Screen::Assemble],
        &[Screen::Issue, Screen::Issue, Screen::Scan],
    ];

    for path in paths {
        session.set_screen(Screen::Home);
        for screen in path {
            session.set_screen(*screen);
            assert_eq!(session.state().screen, *screen);
            assert!(session.state().can_go_back());
        }
        session.set_screen(Screen::Home);
        assert_eq!(session.state().screen, Screen::Home);
    }
}

#[test]
fn back_always_returns_home() {
    let mut session = session();
    session.set_screen(Screen::Inventory);
    session.set_screen(Screen::Assemble);
    assert_eq!(session.dispatch(Action::Back), Outcome::Navigated(Screen::Home));
    assert_eq!(session.state().screen, Screen::Home);
}

#[test]
fn navigation_keeps_scan_session_and_counters() {
    let mut session = session();
    session.set_screen(Screen::Scan);
    session.scan("4607086567890").expect("hit");
    session.increment_box_count();
    session.set_screen(Screen::Home);
    session.set_screen(Screen::Scan);

    assert_eq!(session.state().scan_input, "4607086567890");
    assert!(session.state().scanned_product.is_some());
    assert_eq!(session.state().box_count, 1);
}

#[test]
fn unwired_controls_leave_state_untouched() {
    let mut session = session();
    session.scan("4607086567890").expect("hit");
    let before = session.state().clone();

    let controls = [
        UnwiredControl::OpenCamera,
        UnwiredControl::AddStock(ProductId::new("1")),
        UnwiredControl::WriteOffStock(ProductId::new("1")),
        UnwiredControl::StartAssembly(OrderId::new("ORD-001")),
        UnwiredControl::FindOrder,
        UnwiredControl::IssueOrder(OrderId::new("ORD-002")),
    ];
    for control in controls {
        assert_eq!(session.dispatch(Action::Unwired(control)), Outcome::Unchanged);
    }

    assert_eq!(session.state(), &before);
    assert_eq!(session.filter_orders(OrderStatus::Pending).len(), 2);
    assert_eq!(
        session
            .catalog()
            .find_by_barcode("4607086567890")
            .map(|p| p.stock),
        Some(24)
    );
}

#[test]
fn issue_query_is_stored_verbatim() {
    let mut session = session();
    session.dispatch(Action::IssueQueryChanged("ORD-002".to_string()));
    assert_eq!(session.state().issue_query, "ORD-002");
}

#[test]
fn works_over_a_boxed_catalog() {
    let boxed: Box<dyn CatalogSource> = Box::new(MockCatalog::default());
    let mut session = Session::new(boxed);
    assert!(session.scan("4607086567892").is_ok());
}
