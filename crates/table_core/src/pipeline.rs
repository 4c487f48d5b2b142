//! Turns the joined catalog and a [`ViewState`] into the visible rows.
//!
//! Stage order is fixed: user filter, sort, reversal, category filter, search. Reversal runs
//! whenever the order is descending, even with no sort column, in which case it flips the
//! source order.

use std::cmp::Ordering;

use shared::domain::EnrichedProduct;

use crate::{
    collate::TextCollator,
    view_state::{SortColumn, SortOrder, ViewState},
};

pub fn visible<'a>(products: &'a [EnrichedProduct], state: &ViewState) -> Vec<&'a EnrichedProduct> {
    let mut rows: Vec<&EnrichedProduct> = products.iter().collect();

    if let Some(user) = state.selected_user.as_deref() {
        rows.retain(|product| product.user.name == user);
    }

    if let Some(column) = state.sort_column {
        let mut collator = TextCollator::new();
        // stable
        rows.sort_by(|left, right| compare_by(&mut collator, column, left, right));
    }

    if state.sort_order == Some(SortOrder::Descending) {
        rows.reverse();
    }

    if !state.selected_categories.is_empty() {
        rows.retain(|product| state.selected_categories.contains(&product.category.id));
    }

    let query = normalize_query(&state.search_query);
    if !query.is_empty() {
        // Matches the product's own name, not its owner's.
        rows.retain(|product| product.name.to_lowercase().contains(&query));
    }

    tracing::trace!(total = products.len(), visible = rows.len(), "filtered product table");
    rows
}

/// Trims the same characters as a browser's `String.prototype.trim` (Unicode whitespace
/// plus the byte-order mark), then lowercases.
pub fn normalize_query(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').to_lowercase()
}

pub fn compare_by(
    collator: &mut TextCollator,
    column: SortColumn,
    left: &EnrichedProduct,
    right: &EnrichedProduct,
) -> Ordering {
    match column {
        SortColumn::Id => left.id.cmp(&right.id),
        SortColumn::Product => collator.compare(&left.name, &right.name),
        SortColumn::Category => collator.compare(&left.category.title, &right.category.title),
        SortColumn::User => collator.compare(&left.user.name, &right.user.name),
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
