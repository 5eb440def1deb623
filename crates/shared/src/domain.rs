use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(ProductId);
id_newtype!(OrderId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub barcode: String,
    /// Whole rubles.
    pub price: u32,
    pub stock: u32,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Assembled,
    Issued,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Assembled, Self::Issued];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assembled => "assembled",
            Self::Issued => "issued",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub items: u32,
    pub status: OrderStatus,
}

/// A box received at the store, listed under recent arrivals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub box_number: u32,
    pub item_count: u32,
    pub received_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Scan,
    Inventory,
    Unbox,
    Assemble,
    Issue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Screen {
    /// Process screens in home-menu order.
    pub const PROCESSES: [Screen; 5] = [
        Self::Scan,
        Self::Inventory,
        Self::Unbox,
        Self::Assemble,
        Self::Issue,
    ];

    pub fn is_home(self) -> bool {
        self == Self::Home
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Scan => "Сканирование",
            Self::Inventory => "Инвентаризация",
            Self::Unbox => "Разборка коробок",
            Self::Assemble => "Сборка заказа",
            Self::Issue => "Выдача заказа",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Добро пожаловать!",
            Self::Scan => "Сканирование товара",
            other => other.menu_label(),
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Self::Home => "Выберите процесс для работы",
            Self::Scan => "Отсканируйте штрих-код товара",
            Self::Inventory => "Учёт остатков товаров",
            Self::Unbox => "Регистрация поступлений",
            Self::Assemble => "Подготовка заказов к выдаче",
            Self::Issue => "Передача заказа покупателю",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Self::Inventory | Self::Assemble => Accent::Secondary,
            _ => Accent::Primary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Scan => "scan",
            Self::Inventory => "inventory",
            Self::Unbox => "unbox",
            Self::Assemble => "assemble",
            Self::Issue => "issue",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssembleTab {
    #[default]
    Pending,
    Assembled,
}

impl AssembleTab {
    pub const ALL: [AssembleTab; 2] = [Self::Pending, Self::Assembled];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Ожидают",
            Self::Assembled => "Собранные",
        }
    }

    pub fn status(self) -> OrderStatus {
        match self {
            Self::Pending => OrderStatus::Pending,
            Self::Assembled => OrderStatus::Assembled,
        }
    }
}

pub const TIP_OF_THE_DAY: &str =
    "Сканируйте товары сразу при получении коробки для быстрой инвентаризации";
