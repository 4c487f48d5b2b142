use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{CategoryId, ProductId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Category,
    Product,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::User => "user",
            RecordKind::Category => "category",
            RecordKind::Product => "product",
        };
        f.write_str(label)
    }
}

/// Failures while loading or joining the record sets. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },
    #[error("category {category_id} references missing owner {owner_id}")]
    MissingOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: RecordKind, id: i64 },
    #[error("malformed {source_name} records: {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Dangling foreign keys, as opposed to unreadable or unparsable input.
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingCategory { .. } | CatalogError::MissingOwner { .. }
        )
    }

    /// One-line explanation for the operator when startup aborts.
    pub fn startup_hint(&self) -> &'static str {
        if self.is_referential() {
            "catalog data has dangling references; fix the ids in the record files"
        } else if matches!(self, CatalogError::DuplicateId { .. }) {
            "catalog data repeats an id; ids must be unique within each record file"
        } else {
            "catalog data could not be read; check the data directory and file contents"
        }
    }
}
