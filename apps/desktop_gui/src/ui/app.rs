use catalog::Catalog;
use eframe::egui;

use crate::controller::{events::UiEvent, reducer::TableController};
use crate::ui::{panels::show_filter_panel, table::show_product_table};

pub struct ProductTableApp {
    catalog: Catalog,
    controller: TableController,
    title: String,
    pending: Vec<UiEvent>,
}

impl ProductTableApp {
    pub fn new(catalog: Catalog, title: impl Into<String>) -> Self {
        let controller = TableController::new(&catalog);
        Self {
            catalog,
            controller,
            title: title.into(),
            pending: Vec::new(),
        }
    }

    fn process_ui_events(&mut self) {
        for event in std::mem::take(&mut self.pending) {
            self.controller.dispatch(&self.catalog, event);
        }
    }
}

impl eframe::App for ProductTableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());
            ui.add_space(12.0);

            show_filter_panel(
                ui,
                &self.catalog,
                self.controller.state(),
                &mut self.pending,
            );
            ui.add_space(12.0);

            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    show_product_table(
                        ui,
                        self.controller.table(),
                        self.controller.state(),
                        &mut self.pending,
                    );
                });
        });

        // Events collected while drawing are applied after it; repaint to show the new state.
        if !self.pending.is_empty() {
            self.process_ui_events();
            ctx.request_repaint();
        }
    }
}
