use catalog::CatalogSource;
use chrono::{Local, NaiveDate};
use session_core::{Action, Session};

use crate::controller::orchestration::{apply_actions, ActionQueue};
use crate::ui::{screens, theme};

pub const APP_TITLE: &str = "Подружка";

pub struct PodruzhkaApp {
    session: Session<Box<dyn CatalogSource>>,
    actions: ActionQueue,
    today: NaiveDate,
}

impl PodruzhkaApp {
    pub fn new(catalog: Box<dyn CatalogSource>) -> Self {
        Self {
            session: Session::new(catalog),
            actions: ActionQueue::new(),
            today: Local::now().date_naive(),
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::NONE
                    .fill(theme::CARD)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.session.state().can_go_back() {
                        let back = egui::Button::new(egui::RichText::new("⬅").size(18.0))
                            .frame(false);
                        if ui.add(back).on_hover_text("На главную").clicked() {
                            self.actions.push(Action::Back);
                        }
                    }
                    ui.label(
                        egui::RichText::new(APP_TITLE)
                            .size(20.0)
                            .strong()
                            .color(theme::PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("👤")
                                .size(20.0)
                                .color(theme::MUTED_TEXT),
                        );
                    });
                });
            });
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.session.state().notification.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("scan_notification")).show(ctx, |ui| {
            ui.set_width(260.0);
            ui.label(egui::RichText::new(notification.message()).strong());
            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });

        let enter = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        if modal.inner || modal.should_close() || enter {
            self.actions.push(Action::DismissNotification);
        }
    }
}

impl eframe::App for PodruzhkaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(16, 20)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        screens::show(ui, &self.session, self.today, &mut self.actions);
                    });
            });

        self.show_notification(ctx);

        if !self.actions.is_empty() {
            apply_actions(&mut self.session, &mut self.actions);
            ctx.request_repaint();
        }
    }
}
