//! Russian labels for counts and dates.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Few,
    Many,
}

pub fn plural_form(n: u64) -> PluralForm {
    let tens = n % 100;
    if (11..=14).contains(&tens) {
        return PluralForm::Many;
    }
    match n % 10 {
        1 => PluralForm::One,
        2..=4 => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

pub fn plural<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match plural_form(n) {
        PluralForm::One => one,
        PluralForm::Few => few,
        PluralForm::Many => many,
    }
}

/// "1 товар", "3 товара", "18 товаров".
pub fn items_label(n: u64) -> String {
    format!("{n} {}", plural(n, "товар", "товара", "товаров"))
}

/// Caption under the inventory counter: "1 товар проверен", "5 товаров проверено".
pub fn checked_caption(n: u64) -> &'static str {
    plural(n, "товар проверен", "товара проверено", "товаров проверено")
}

pub fn unboxed_caption(n: u64) -> &'static str {
    plural(
        n,
        "коробка разобрана сегодня",
        "коробки разобрано сегодня",
        "коробок разобрано сегодня",
    )
}

pub fn pieces_label(n: u64) -> String {
    format!("{n} шт")
}

pub fn price_label(rubles: u32) -> String {
    format!("{rubles} ₽")
}

pub fn arrival_label(received_on: NaiveDate, today: NaiveDate) -> String {
    match (today - received_on).num_days() {
        0 => "Сегодня".to_string(),
        1 => "Вчера".to_string(),
        _ => received_on.format("%d.%m.%Y").to_string(),
    }
}
