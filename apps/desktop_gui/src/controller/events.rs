//! Widget interactions and their mapping onto view-state events.

use shared::domain::CategoryId;
use table_core::{SortColumn, ViewEvent};

/// What the user did, as reported by the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AllUsersClicked,
    UserTabClicked(String),
    SearchEdited(String),
    ClearSearchClicked,
    AllCategoriesClicked,
    CategoryClicked(CategoryId),
    ResetAllClicked,
    HeaderClicked(SortColumn),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::AllUsersClicked => "all_users",
            UiEvent::UserTabClicked(_) => "user_tab",
            UiEvent::SearchEdited(_) => "search_edited",
            UiEvent::ClearSearchClicked => "clear_search",
            UiEvent::AllCategoriesClicked => "all_categories",
            UiEvent::CategoryClicked(_) => "category",
            UiEvent::ResetAllClicked => "reset_all",
            UiEvent::HeaderClicked(_) => "header",
        }
    }
}

impl From<UiEvent> for ViewEvent {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::AllUsersClicked => ViewEvent::SelectUser(None),
            UiEvent::UserTabClicked(name) => ViewEvent::SelectUser(Some(name)),
            UiEvent::SearchEdited(text) => ViewEvent::SetSearch(text),
            UiEvent::ClearSearchClicked => ViewEvent::ClearSearch,
            UiEvent::AllCategoriesClicked => ViewEvent::ClearCategories,
            UiEvent::CategoryClicked(category_id) => ViewEvent::ToggleCategory(category_id),
            UiEvent::ResetAllClicked => ViewEvent::ResetFilters,
            UiEvent::HeaderClicked(column) => ViewEvent::RequestSort(column),
        }
    }
}
