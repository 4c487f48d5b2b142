//! Filter panel: user tabs, search box, category toggles, and reset.

use catalog::Catalog;
use table_core::ViewState;

use crate::controller::events::UiEvent;
use crate::ui::theme;

pub fn show_filter_panel(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    state: &ViewState,
    events: &mut Vec<UiEvent>,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Filters").strong().size(16.0));
            ui.add_space(6.0);

            show_user_tabs(ui, catalog, state, events);
            ui.separator();
            show_search_box(ui, state, events);
            ui.separator();
            show_category_buttons(ui, catalog, state, events);
            ui.separator();

            let reset = egui::Button::new("Reset all filters").min_size(egui::vec2(
                ui.available_width(),
                28.0,
            ));
            if ui.add(reset).clicked() {
                events.push(UiEvent::ResetAllClicked);
            }
        });
}

fn show_user_tabs(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    state: &ViewState,
    events: &mut Vec<UiEvent>,
) {
    ui.horizontal_wrapped(|ui| {
        if ui
            .selectable_label(state.is_user_selected(None), egui::RichText::new("All").strong())
            .clicked()
        {
            events.push(UiEvent::AllUsersClicked);
        }
        for user in catalog.users() {
            let selected = state.is_user_selected(Some(&user.name));
            if ui
                .selectable_label(selected, egui::RichText::new(&user.name).strong())
                .clicked()
            {
                events.push(UiEvent::UserTabClicked(user.name.clone()));
            }
        }
    });
}

fn show_search_box(ui: &mut egui::Ui, state: &ViewState, events: &mut Vec<UiEvent>) {
    let mut query = state.search_query.clone();
    ui.horizontal(|ui| {
        ui.label("🔍");
        let clear_width = if query.is_empty() { 0.0 } else { 28.0 };
        let edit = egui::TextEdit::singleline(&mut query)
            .id_salt("search_field")
            .hint_text("Search")
            .desired_width(ui.available_width() - clear_width);
        if ui.add(edit).changed() {
            events.push(UiEvent::SearchEdited(query.clone()));
        }
        if !query.is_empty() && ui.small_button("✖").on_hover_text("Clear search").clicked() {
            events.push(UiEvent::ClearSearchClicked);
        }
    });
}

fn show_category_buttons(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    state: &ViewState,
    events: &mut Vec<UiEvent>,
) {
    ui.horizontal_wrapped(|ui| {
        let all_fill = if state.has_category_filter() {
            egui::Color32::TRANSPARENT
        } else {
            theme::SUCCESS
        };
        let all = egui::Button::new(egui::RichText::new("All").strong())
            .fill(all_fill)
            .stroke(egui::Stroke::new(1.0, theme::SUCCESS));
        if ui.add(all).clicked() {
            events.push(UiEvent::AllCategoriesClicked);
        }
        ui.add_space(16.0);

        for category in catalog.categories() {
            let selected = state.is_category_selected(category.id);
            let mut button = egui::Button::new(category.title.as_str()).selected(selected);
            if selected {
                button = button.fill(theme::INFO);
            }
            if ui.add(button).clicked() {
                events.push(UiEvent::CategoryClicked(category.id));
            }
        }
    });
}
