use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use chrono::{Days, Local, NaiveDate};
use serde::Deserialize;
use shared::{
    domain::{Delivery, Order, OrderId, OrderStatus, Product, ProductId},
    error::ErrorCode,
};
use thiserror::Error;
use tracing::info;

/// Read-only source of products, orders and box arrivals.
pub trait CatalogSource {
    fn products(&self) -> &[Product];
    fn orders(&self) -> &[Order];
    fn deliveries(&self) -> &[Delivery];

    /// Exact barcode match, no normalization.
    fn find_by_barcode(&self, code: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.barcode == code)
    }

    /// Orders with `status`, in catalog order.
    fn filter_orders(&self, status: OrderStatus) -> Vec<Order> {
        self.orders()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }
}

impl<C: CatalogSource + ?Sized> CatalogSource for &C {
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn orders(&self) -> &[Order] {
        (**self).orders()
    }

    fn deliveries(&self) -> &[Delivery] {
        (**self).deliveries()
    }
}

impl<C: CatalogSource + ?Sized> CatalogSource for Box<C> {
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn orders(&self) -> &[Order] {
        (**self).orders()
    }

    fn deliveries(&self) -> &[Delivery] {
        (**self).deliveries()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog fixture '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id '{0}'")]
    DuplicateProductId(ProductId),
    #[error("duplicate barcode '{barcode}' (product '{product_id}')")]
    DuplicateBarcode {
        barcode: String,
        product_id: ProductId,
    },
    #[error("product '{0}' has an empty barcode")]
    EmptyBarcode(ProductId),
    #[error("duplicate order id '{0}'")]
    DuplicateOrderId(OrderId),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::Internal,
            _ => ErrorCode::Validation,
        }
    }
}

/// The built-in demo data of the store.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    orders: Vec<Order>,
    deliveries: Vec<Delivery>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Box arrivals are dated relative to `today`.
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            products: mock_products(),
            orders: mock_orders(),
            deliveries: mock_deliveries(today),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MockCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

fn product(id: &str, name: &str, barcode: &str, price: u32, stock: u32, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        barcode: barcode.to_string(),
        price,
        stock,
        category: category.to_string(),
    }
}

fn order(id: &str, customer: &str, items: u32, status: OrderStatus) -> Order {
    Order {
        id: OrderId::new(id),
        customer: customer.to_string(),
        items,
        status,
    }
}

fn mock_products() -> Vec<Product> {
    vec![
        product("1", "Помада Matt Luxe №45", "4607086567890", 599, 24, "Макияж"),
        product("2", "Тушь для ресниц Mega Volume", "4607086567891", 749, 18, "Макияж"),
        product("3", "Крем для рук Питательный", "4607086567892", 299, 45, "Уход"),
    ]
}

fn mock_orders() -> Vec<Order> {
    vec![
        order("ORD-001", "Анна К.", 3, OrderStatus::Pending),
        order("ORD-002", "Мария П.", 5, OrderStatus::Assembled),
        order("ORD-003", "Елена С.", 2, OrderStatus::Pending),
    ]
}

fn mock_deliveries(today: NaiveDate) -> Vec<Delivery> {
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    vec![
        Delivery {
            box_number: 1234,
            item_count: 24,
            received_on: today,
        },
        Delivery {
            box_number: 1233,
            item_count: 18,
            received_on: yesterday,
        },
    ]
}

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    products: Vec<Product>,
    orders: Vec<Order>,
    #[serde(default)]
    deliveries: Vec<Delivery>,
}

/// Catalog loaded from a JSON document with `products`, `orders` and
/// optional `deliveries` arrays.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    products: Vec<Product>,
    orders: Vec<Order>,
    deliveries: Vec<Delivery>,
}

impl FixtureCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: FixtureDocument = serde_json::from_str(raw)?;
        validate(&doc)?;
        Ok(Self {
            products: doc.products,
            orders: doc.orders,
            deliveries: doc.deliveries,
        })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            orders = catalog.orders.len(),
            "loaded catalog fixture"
        );
        Ok(catalog)
    }
}

impl CatalogSource for FixtureCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

fn validate(doc: &FixtureDocument) -> Result<(), CatalogError> {
    let mut product_ids = HashSet::new();
    let mut barcodes = HashSet::new();
    for product in &doc.products {
        if !product_ids.insert(&product.id) {
            return Err(CatalogError::DuplicateProductId(product.id.clone()));
        }
        if product.barcode.is_empty() {
            return Err(CatalogError::EmptyBarcode(product.id.clone()));
        }
        if !barcodes.insert(product.barcode.as_str()) {
            return Err(CatalogError::DuplicateBarcode {
                barcode: product.barcode.clone(),
                product_id: product.id.clone(),
            });
        }
    }

    let mut order_ids = HashSet::new();
    for order in &doc.orders {
        if !order_ids.insert(&order.id) {
            return Err(CatalogError::DuplicateOrderId(order.id.clone()));
        }
    }

    Ok(())
}

/// Built-in mock unless a fixture path is given.
pub fn open(fixture: Option<&Path>) -> Result<Box<dyn CatalogSource>, CatalogError> {
    match fixture {
        Some(path) => Ok(Box::new(FixtureCatalog::load(path)?)),
        None => Ok(Box::new(MockCatalog::new())),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
