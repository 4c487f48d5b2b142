//! Renderer-neutral rows for the product table.

use catalog::Catalog;
use serde::Serialize;
use shared::domain::{EnrichedProduct, ProductId, Sex};

use crate::{pipeline::visible, view_state::ViewState};

pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Colour hint for the user cell: male owners render as links, female owners as danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserTone {
    Male,
    Female,
}

impl From<Sex> for UserTone {
    fn from(value: Sex) -> Self {
        match value {
            Sex::M => UserTone::Male,
            Sex::F => UserTone::Female,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub user: String,
    pub user_tone: UserTone,
}

impl From<&EnrichedProduct> for TableRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category_label(),
            user: product.user.name.clone(),
            user_tone: product.user.sex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    NoMatches,
    Rows(Vec<TableRow>),
}

impl TableView {
    pub fn build(catalog: &Catalog, state: &ViewState) -> Self {
        Self::from_products(catalog.products(), state)
    }

    pub fn from_products(products: &[EnrichedProduct], state: &ViewState) -> Self {
        let rows: Vec<TableRow> = visible(products, state)
            .into_iter()
            .map(TableRow::from)
            .collect();
        if rows.is_empty() {
            TableView::NoMatches
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableView::NoMatches => &[],
            TableView::Rows(rows) => rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::NoMatches)
    }
}
