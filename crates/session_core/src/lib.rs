//! Session state of the worker app and the reducer that drives it.
//!
//! All state lives in one [`SessionState`] value. UI code never mutates it
//! directly: it sends [`Action`]s through [`reduce`] (or the [`Session`]
//! wrapper) and reads the resulting [`Outcome`].

use catalog::CatalogSource;
use shared::{
    domain::{AssembleTab, Order, OrderId, OrderStatus, Product, ProductId, Screen},
    error::ScanError,
};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ProductNotFound { barcode: String },
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ProductNotFound { .. } => shared::error::NOT_FOUND_NOTICE,
        }
    }
}

impl From<&ScanError> for Notification {
    fn from(err: &ScanError) -> Self {
        Self::ProductNotFound {
            barcode: err.barcode().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub screen: Screen,
    pub scan_input: String,
    /// Product resolved by the last submitted scan, if any.
    pub scanned_product: Option<Product>,
    pub inventory_count: u64,
    pub box_count: u64,
    pub assemble_tab: AssembleTab,
    pub issue_query: String,
    pub notification: Option<Notification>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_go_back(&self) -> bool {
        !self.screen.is_home()
    }
}

/// Controls that render but have no effect on state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnwiredControl {
    OpenCamera,
    AddStock(ProductId),
    WriteOffStock(ProductId),
    StartAssembly(OrderId),
    FindOrder,
    IssueOrder(OrderId),
}

impl UnwiredControl {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenCamera => "open_camera",
            Self::AddStock(_) => "add_stock",
            Self::WriteOffStock(_) => "write_off_stock",
            Self::StartAssembly(_) => "start_assembly",
            Self::FindOrder => "find_order",
            Self::IssueOrder(_) => "issue_order",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Screen),
    Back,
    ScanInputChanged(String),
    SubmitScan,
    IncrementInventoryCount,
    IncrementBoxCount,
    SelectAssembleTab(AssembleTab),
    IssueQueryChanged(String),
    DismissNotification,
    Unwired(UnwiredControl),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Back => "back",
            Self::ScanInputChanged(_) => "scan_input_changed",
            Self::SubmitScan => "submit_scan",
            Self::IncrementInventoryCount => "increment_inventory_count",
            Self::IncrementBoxCount => "increment_box_count",
            Self::SelectAssembleTab(_) => "select_assemble_tab",
            Self::IssueQueryChanged(_) => "issue_query_changed",
            Self::DismissNotification => "dismiss_notification",
            Self::Unwired(control) => control.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Navigated(Screen),
    InputUpdated,
    Scanned(Product),
    ScanMissed(ScanError),
    InventoryCount(u64),
    BoxCount(u64),
    TabSelected(AssembleTab),
    NotificationDismissed,
}

pub fn reduce<C>(state: &mut SessionState, catalog: &C, action: Action) -> Outcome
where
    C: CatalogSource + ?Sized,
{
    match action {
        Action::Navigate(screen) => navigate(state, screen),
        Action::Back => navigate(state, Screen::Home),
        Action::ScanInputChanged(text) => {
            state.scan_input = text;
            Outcome::InputUpdated
        }
        Action::SubmitScan => match submit_scan(state, catalog) {
            Ok(product) => Outcome::Scanned(product),
            Err(err) => Outcome::ScanMissed(err),
        },
        Action::IncrementInventoryCount => {
            state.inventory_count = state.inventory_count.saturating_add(1);
            debug!(count = state.inventory_count, "inventory item checked");
            Outcome::InventoryCount(state.inventory_count)
        }
        Action::IncrementBoxCount => {
            state.box_count = state.box_count.saturating_add(1);
            debug!(count = state.box_count, "box unpacking started");
            Outcome::BoxCount(state.box_count)
        }
        Action::SelectAssembleTab(tab) => {
            state.assemble_tab = tab;
            Outcome::TabSelected(tab)
        }
        Action::IssueQueryChanged(text) => {
            state.issue_query = text;
            Outcome::InputUpdated
        }
        Action::DismissNotification => {
            if state.notification.take().is_some() {
                Outcome::NotificationDismissed
            } else {
                Outcome::Unchanged
            }
        }
        Action::Unwired(control) => {
            debug!(control = control.name(), ?control, "control is not wired to any state");
            Outcome::Unchanged
        }
    }
}

fn navigate(state: &mut SessionState, screen: Screen) -> Outcome {
    info!(from = %state.screen, to = %screen, "navigate");
    state.screen = screen;
    Outcome::Navigated(screen)
}

fn submit_scan<C>(state: &mut SessionState, catalog: &C) -> Result<Product, ScanError>
where
    C: CatalogSource + ?Sized,
{
    match catalog.find_by_barcode(&state.scan_input) {
        Some(product) => {
            info!(barcode = %state.scan_input, product = %product.id, "scan resolved");
            state.scanned_product = Some(product.clone());
            state.notification = None;
            Ok(product.clone())
        }
        None => {
            info!(barcode = %state.scan_input, "scan found no product");
            let err = ScanError::not_found(state.scan_input.clone());
            state.scanned_product = None;
            state.notification = Some(Notification::from(&err));
            Err(err)
        }
    }
}

/// A worker session over a catalog: the state plus the operations the
/// screens need.
pub struct Session<C> {
    catalog: C,
    state: SessionState,
}

impl<C: CatalogSource> Session<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            state: SessionState::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        reduce(&mut self.state, &self.catalog, action)
    }

    /// Submits `barcode` as if typed into the scan field.
    pub fn scan(&mut self, barcode: &str) -> Result<Product, ScanError> {
        self.dispatch(Action::ScanInputChanged(barcode.to_string()));
        submit_scan(&mut self.state, &self.catalog)
    }

    pub fn filter_orders(&self, status: OrderStatus) -> Vec<Order> {
        self.catalog.filter_orders(status)
    }

    /// Orders shown under the currently selected assembly tab.
    pub fn assemble_orders(&self) -> Vec<Order> {
        self.filter_orders(self.state.assemble_tab.status())
    }

    /// Orders listed as ready on the issue screen.
    pub fn ready_for_issue(&self) -> Vec<Order> {
        self.filter_orders(OrderStatus::Assembled)
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.dispatch(Action::Navigate(screen));
    }

    pub fn increment_inventory_count(&mut self) -> u64 {
        self.dispatch(Action::IncrementInventoryCount);
        self.state.inventory_count
    }

    pub fn increment_box_count(&mut self) -> u64 {
        self.dispatch(Action::IncrementBoxCount);
        self.state.box_count
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
