//! Owns the current [`ViewState`] and the table computed from it.

use catalog::Catalog;
use table_core::{TableView, ViewEvent, ViewState};

use crate::controller::events::UiEvent;

pub struct TableController {
    state: ViewState,
    table: TableView,
}

impl TableController {
    pub fn new(catalog: &Catalog) -> Self {
        let state = ViewState::default();
        let table = TableView::build(catalog, &state);
        Self { state, table }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Replaces the state with the result of `event`; returns whether anything changed.
    pub fn dispatch(&mut self, catalog: &Catalog, event: UiEvent) -> bool {
        let name = event.name();
        let next = self.state.clone().apply(ViewEvent::from(event));
        if next == self.state {
            tracing::trace!(event = name, "ui event left view state unchanged");
            return false;
        }

        self.table = TableView::build(catalog, &next);
        tracing::debug!(
            event = name,
            user = ?next.selected_user,
            categories = next.selected_categories.len(),
            sort_column = ?next.sort_column,
            sort_order = ?next.sort_order,
            visible = self.table.len(),
            "view state replaced"
        );
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::CategoryId;
    use table_core::SortColumn;

    fn catalog() -> Catalog {
        catalog::load(None).expect("bundled catalog")
    }

    #[test]
    fn starts_with_every_product_visible() {
        let catalog = catalog();
        let controller = TableController::new(&catalog);
        assert_eq!(controller.table().len(), catalog.len());
        assert_eq!(controller.state(), &ViewState::default());
    }

    #[test]
    fn recomputes_table_on_state_change() {
        let catalog = catalog();
        let mut controller = TableController::new(&catalog);

        assert!(controller.dispatch(&catalog, UiEvent::SearchEdited("mi".to_string())));
        let names: Vec<_> = controller
            .table()
            .rows()
            .iter()
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(names, vec!["Milk"]);

        assert!(controller.dispatch(&catalog, UiEvent::ClearSearchClicked));
        assert_eq!(controller.table().len(), catalog.len());
    }

    #[test]
    fn unchanged_state_is_reported() {
        let catalog = catalog();
        let mut controller = TableController::new(&catalog);
        assert!(!controller.dispatch(&catalog, UiEvent::AllUsersClicked));
        assert!(!controller.dispatch(&catalog, UiEvent::ResetAllClicked));
    }

    #[test]
    fn header_clicks_drive_sort_cycle() {
        let catalog = catalog();
        let mut controller = TableController::new(&catalog);
        for _ in 0..3 {
            controller.dispatch(&catalog, UiEvent::HeaderClicked(SortColumn::Id));
        }
        assert_eq!(controller.state().sort_column, None);
        assert_eq!(controller.state().sort_order, None);
    }

    #[test]
    fn empty_selection_shows_no_matches() {
        let catalog = catalog();
        let mut controller = TableController::new(&catalog);
        controller.dispatch(&catalog, UiEvent::UserTabClicked("Anna".to_string()));
        controller.dispatch(&catalog, UiEvent::CategoryClicked(CategoryId(5)));
        assert_eq!(controller.table(), &TableView::NoMatches);
    }
}
