//! Product table with sortable headers, or the no-match message.

use table_core::{SortColumn, TableView, ViewState, NO_MATCHES_MESSAGE};

use crate::controller::events::UiEvent;
use crate::ui::theme;

pub fn show_product_table(
    ui: &mut egui::Ui,
    table: &TableView,
    state: &ViewState,
    events: &mut Vec<UiEvent>,
) {
    let TableView::Rows(rows) = table else {
        ui.add_space(8.0);
        ui.label(NO_MATCHES_MESSAGE);
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("product_table_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("product_table")
                .striped(true)
                .num_columns(SortColumn::ALL.len())
                .min_col_width(60.0)
                .spacing(egui::vec2(24.0, 6.0))
                .show(ui, |ui| {
                    for column in SortColumn::ALL {
                        let glyph = theme::sort_glyph(state.sort_indicator(column));
                        let header = egui::Button::new(
                            egui::RichText::new(format!("{} {glyph}", column.title())).strong(),
                        )
                        .frame(false);
                        if ui.add(header).clicked() {
                            events.push(UiEvent::HeaderClicked(column));
                        }
                    }
                    ui.end_row();

                    for row in rows {
                        ui.label(egui::RichText::new(row.id.to_string()).strong());
                        ui.label(row.name.as_str());
                        ui.label(row.category.as_str());
                        ui.label(
                            egui::RichText::new(&row.user)
                                .color(theme::user_tone_color(row.user_tone)),
                        );
                        ui.end_row();
                    }
                });
        });
}
