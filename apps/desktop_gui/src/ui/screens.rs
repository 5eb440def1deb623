//! One function per screen. Screens only read the session and queue actions.

use catalog::CatalogSource;
use chrono::NaiveDate;
use session_core::{Action, Session, UnwiredControl};
use shared::{
    domain::{AssembleTab, Order, Screen, TIP_OF_THE_DAY},
    i18n::{
        arrival_label, checked_caption, items_label, pieces_label, price_label, unboxed_caption,
    },
};

use crate::controller::orchestration::ActionQueue;
use crate::ui::{theme, widgets};

pub fn screen_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "🏠",
        Screen::Scan => "🔍",
        Screen::Inventory => "📋",
        Screen::Unbox => "📦",
        Screen::Assemble => "🛒",
        Screen::Issue => "✔",
    }
}

pub fn show<C: CatalogSource>(
    ui: &mut egui::Ui,
    session: &Session<C>,
    today: NaiveDate,
    actions: &mut ActionQueue,
) {
    match session.state().screen {
        Screen::Home => show_home(ui, actions),
        Screen::Scan => show_scan(ui, session, actions),
        Screen::Inventory => show_inventory(ui, session, actions),
        Screen::Unbox => show_unbox(ui, session, today, actions),
        Screen::Assemble => show_assemble(ui, session, actions),
        Screen::Issue => show_issue(ui, session, actions),
    }
}

fn show_home(ui: &mut egui::Ui, actions: &mut ActionQueue) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(Screen::Home.heading())
                .size(24.0)
                .strong(),
        );
        ui.label(widgets::muted(Screen::Home.subheading()));
    });
    ui.add_space(12.0);

    let spacing = ui.spacing().item_spacing.x;
    let tile_width = ((ui.available_width() - spacing) / 2.0).max(120.0);
    for row in Screen::PROCESSES.chunks(2) {
        ui.horizontal(|ui| {
            for &screen in row {
                if process_tile(ui, screen, tile_width).clicked() {
                    actions.push(Action::Navigate(screen));
                }
            }
        });
    }

    ui.add_space(8.0);
    widgets::card_frame()
        .fill(theme::tint(theme::PRIMARY, 0.95))
        .stroke(egui::Stroke::new(1.0, theme::tint(theme::PRIMARY, 0.8)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.label(egui::RichText::new("ℹ").size(18.0).color(theme::PRIMARY));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Совет дня").strong());
                    ui.add(egui::Label::new(widgets::muted(TIP_OF_THE_DAY)).wrap());
                });
            });
        });
}

fn process_tile(ui: &mut egui::Ui, screen: Screen, width: f32) -> egui::Response {
    widgets::card_frame()
        .show(ui, |ui| {
            ui.set_width(width - 32.0);
            ui.vertical_centered(|ui| {
                widgets::icon_tile(
                    ui,
                    screen_icon(screen),
                    theme::accent_color(screen.accent()),
                    64.0,
                    false,
                );
                ui.label(egui::RichText::new(screen.menu_label()).strong());
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn show_scan<C: CatalogSource>(ui: &mut egui::Ui, session: &Session<C>, actions: &mut ActionQueue) {
    let state = session.state();
    widgets::screen_heading(ui, Screen::Scan);

    ui.horizontal(|ui| {
        let mut input = state.scan_input.clone();
        let button_width = 44.0;
        let field = ui.add_sized(
            [ui.available_width() - button_width - 8.0, 36.0],
            egui::TextEdit::singleline(&mut input)
                .id_salt("scan_input")
                .hint_text("Введите штрих-код"),
        );
        if field.changed() {
            actions.push(Action::ScanInputChanged(input));
        }
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let search = ui.add_sized([button_width, 36.0], widgets::primary_button("🔍"));
        if enter || search.clicked() {
            actions.push(Action::SubmitScan);
        }
    });

    if widgets::full_width(ui, widgets::outline_button("📷 Открыть камеру")).clicked() {
        actions.push(Action::Unwired(UnwiredControl::OpenCamera));
    }

    let Some(product) = &state.scanned_product else {
        return;
    };

    ui.add_space(8.0);
    widgets::card(ui, |ui| {
        widgets::badge(ui, &product.category, theme::PRIMARY, false);
        ui.label(egui::RichText::new(&product.name).size(18.0).strong());
        ui.label(widgets::muted(format!("Артикул: {}", product.barcode)));
        ui.separator();
        ui.columns(2, |columns| {
            columns[0].label(widgets::muted("Цена"));
            columns[0].label(
                egui::RichText::new(price_label(product.price))
                    .size(24.0)
                    .strong()
                    .color(theme::PRIMARY),
            );
            columns[1].label(widgets::muted("Остаток"));
            columns[1].label(
                egui::RichText::new(pieces_label(product.stock.into()))
                    .size(24.0)
                    .strong(),
            );
        });
        ui.columns(2, |columns| {
            if widgets::full_width(&mut columns[0], widgets::primary_button("➕ Добавить"))
                .clicked()
            {
                actions.push(Action::Unwired(UnwiredControl::AddStock(product.id.clone())));
            }
            if widgets::full_width(&mut columns[1], widgets::outline_button("➖ Списать"))
                .clicked()
            {
                actions.push(Action::Unwired(UnwiredControl::WriteOffStock(
                    product.id.clone(),
                )));
            }
        });
    });
}

fn show_inventory<C: CatalogSource>(
    ui: &mut egui::Ui,
    session: &Session<C>,
    actions: &mut ActionQueue,
) {
    widgets::screen_heading(ui, Screen::Inventory);

    widgets::card(ui, |ui| {
        ui.vertical_centered(|ui| {
            widgets::icon_tile(
                ui,
                screen_icon(Screen::Inventory),
                theme::tint(theme::SECONDARY, 0.9),
                96.0,
                true,
            );
            let checked = session.state().inventory_count;
            widgets::big_counter(ui, checked, checked_caption(checked));
        });
    });

    for product in session.catalog().products() {
        widgets::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&product.name).strong());
                    ui.label(widgets::muted(format!(
                        "Остаток: {}",
                        pieces_label(product.stock.into())
                    )));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(widgets::primary_button("✔ Проверено")).clicked() {
                        actions.push(Action::IncrementInventoryCount);
                    }
                });
            });
        });
    }
}

fn show_unbox<C: CatalogSource>(
    ui: &mut egui::Ui,
    session: &Session<C>,
    today: NaiveDate,
    actions: &mut ActionQueue,
) {
    widgets::screen_heading(ui, Screen::Unbox);

    widgets::card_frame()
        .fill(theme::tint(theme::SECONDARY, 0.95))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                widgets::icon_tile(ui, screen_icon(Screen::Unbox), theme::PRIMARY, 96.0, true);
                let boxes = session.state().box_count;
                widgets::big_counter(ui, boxes, unboxed_caption(boxes));
                let start = widgets::primary_button("➕ Начать разборку новой коробки");
                if widgets::full_width(ui, start).clicked() {
                    actions.push(Action::IncrementBoxCount);
                }
            });
        });

    widgets::card(ui, |ui| {
        ui.label(egui::RichText::new("Последние поступления").strong());
        let deliveries = session.catalog().deliveries();
        for (index, delivery) in deliveries.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Коробка #{}", delivery.box_number)).strong(),
                    );
                    ui.label(widgets::muted(items_label(delivery.item_count.into())));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::badge(
                        ui,
                        arrival_label(delivery.received_on, today),
                        theme::CARD,
                        true,
                    );
                });
            });
            if index + 1 < deliveries.len() {
                ui.separator();
            }
        }
    });
}

fn show_assemble<C: CatalogSource>(
    ui: &mut egui::Ui,
    session: &Session<C>,
    actions: &mut ActionQueue,
) {
    widgets::screen_heading(ui, Screen::Assemble);

    let selected = session.state().assemble_tab;
    ui.columns(AssembleTab::ALL.len(), |columns| {
        for (column, tab) in columns.iter_mut().zip(AssembleTab::ALL) {
            let button = egui::Button::new(egui::RichText::new(tab.label()).strong())
                .selected(tab == selected);
            if column
                .add_sized([column.available_width(), 32.0], button)
                .clicked()
            {
                actions.push(Action::SelectAssembleTab(tab));
            }
        }
    });

    for order in session.assemble_orders() {
        match selected {
            AssembleTab::Pending => pending_order_card(ui, &order, actions),
            AssembleTab::Assembled => assembled_order_card(ui, &order),
        }
    }
}

fn order_summary(ui: &mut egui::Ui, order: &Order) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(order.id.as_str()).size(18.0).strong());
        ui.label(widgets::muted(&order.customer));
    });
}

fn pending_order_card(ui: &mut egui::Ui, order: &Order, actions: &mut ActionQueue) {
    widgets::card(ui, |ui| {
        ui.horizontal(|ui| {
            order_summary(ui, order);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, items_label(order.items.into()), theme::SECONDARY, false);
            });
        });
        if widgets::full_width(ui, widgets::primary_button("🛒 Начать сборку")).clicked() {
            actions.push(Action::Unwired(UnwiredControl::StartAssembly(
                order.id.clone(),
            )));
        }
    });
}

fn assembled_order_card(ui: &mut egui::Ui, order: &Order) {
    widgets::card_frame()
        .fill(theme::SUCCESS_FILL)
        .stroke(egui::Stroke::new(1.0, theme::SUCCESS_STROKE))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                order_summary(ui, order);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("✔").size(22.0).color(theme::SUCCESS));
                });
            });
        });
}

fn show_issue<C: CatalogSource>(ui: &mut egui::Ui, session: &Session<C>, actions: &mut ActionQueue) {
    widgets::screen_heading(ui, Screen::Issue);

    widgets::card(ui, |ui| {
        ui.vertical_centered(|ui| {
            widgets::icon_tile(ui, "▦", theme::PRIMARY, 80.0, true);
            ui.label(egui::RichText::new("Отсканируйте QR-код заказа").strong());
        });

        let mut query = session.state().issue_query.clone();
        let field = ui.add_sized(
            [ui.available_width(), 36.0],
            egui::TextEdit::singleline(&mut query)
                .id_salt("issue_query")
                .hint_text("Или введите номер заказа"),
        );
        if field.changed() {
            actions.push(Action::IssueQueryChanged(query));
        }
        if widgets::full_width(ui, widgets::primary_button("🔍 Найти заказ")).clicked() {
            actions.push(Action::Unwired(UnwiredControl::FindOrder));
        }
    });

    ui.label(egui::RichText::new("Готовы к выдаче").strong());
    for order in session.ready_for_issue() {
        widgets::card(ui, |ui| {
            ui.horizontal(|ui| {
                order_summary(ui, &order);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::badge(ui, items_label(order.items.into()), theme::PRIMARY, false);
                });
            });
            if widgets::full_width(ui, widgets::outline_button("✔ Выдать заказ")).clicked() {
                actions.push(Action::Unwired(UnwiredControl::IssueOrder(
                    order.id.clone(),
                )));
            }
        });
    }
}
