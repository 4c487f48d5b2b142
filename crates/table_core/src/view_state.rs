//! Current filter/sort/search selections and the transitions between them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::domain::CategoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    /// Header order of the table.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortColumn::Id),
            "product" => Ok(SortColumn::Product),
            "category" => Ok(SortColumn::Category),
            "user" => Ok(SortColumn::User),
            other => Err(format!(
                "unknown sort column '{other}' (expected id, product, category or user)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Header icon state for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// A discrete user interaction with the filter panel or table headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ViewEvent {
    /// `None` is the "All" user tab.
    SelectUser(Option<String>),
    ToggleCategory(CategoryId),
    /// The "All" category button.
    ClearCategories,
    RequestSort(SortColumn),
    SetSearch(String),
    ClearSearch,
    ResetFilters,
}

/// Selections driving the product table. `None` sort fields mean "no sort".
///
/// Values are replaced wholesale by [`ViewState::apply`]; nothing mutates a state in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_user: Option<String>,
    pub selected_categories: BTreeSet<CategoryId>,
    pub sort_column: Option<SortColumn>,
    pub sort_order: Option<SortOrder>,
    pub search_query: String,
}

impl ViewState {
    #[must_use]
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::SelectUser(selected_user) => ViewState {
                selected_user,
                ..self
            },
            ViewEvent::ToggleCategory(category_id) => {
                let mut selected_categories = self.selected_categories;
                if !selected_categories.remove(&category_id) {
                    selected_categories.insert(category_id);
                }
                ViewState {
                    selected_categories,
                    ..self
                }
            }
            ViewEvent::ClearCategories => ViewState {
                selected_categories: BTreeSet::new(),
                ..self
            },
            ViewEvent::RequestSort(column) => self.request_sort(column),
            ViewEvent::SetSearch(search_query) => ViewState {
                search_query,
                ..self
            },
            ViewEvent::ClearSearch => ViewState {
                search_query: String::new(),
                ..self
            },
            ViewEvent::ResetFilters => ViewState {
                selected_user: None,
                selected_categories: BTreeSet::new(),
                search_query: String::new(),
                ..self
            },
        }
    }

    /// unsorted -> ascending -> descending -> unsorted, restarting at ascending on a new column.
    fn request_sort(self, column: SortColumn) -> ViewState {
        let (sort_column, sort_order) = if self.sort_column != Some(column) {
            (Some(column), Some(SortOrder::Ascending))
        } else {
            match self.sort_order {
                Some(SortOrder::Ascending) => (Some(column), Some(SortOrder::Descending)),
                Some(SortOrder::Descending) => (None, None),
                None => (self.sort_column, self.sort_order),
            }
        };
        ViewState {
            sort_column,
            sort_order,
            ..self
        }
    }

    pub fn is_user_selected(&self, name: Option<&str>) -> bool {
        self.selected_user.as_deref() == name
    }

    pub fn is_category_selected(&self, category_id: CategoryId) -> bool {
        self.selected_categories.contains(&category_id)
    }

    pub fn has_category_filter(&self) -> bool {
        !self.selected_categories.is_empty()
    }

    pub fn sort_indicator(&self, column: SortColumn) -> SortIndicator {
        if self.sort_column != Some(column) {
            return SortIndicator::Unsorted;
        }
        match self.sort_order {
            Some(SortOrder::Ascending) => SortIndicator::Ascending,
            Some(SortOrder::Descending) => SortIndicator::Descending,
            None => SortIndicator::Unsorted,
        }
    }
}
