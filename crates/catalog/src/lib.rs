use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use shared::{
    domain::{Category, CategoryId, EnrichedProduct, Product, User, UserId},
    error::{CatalogError, RecordKind},
};

const BUNDLED_USERS: &str = include_str!("../data/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("../data/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// The three raw record collections, as supplied at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordSets {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl RecordSets {
    /// Sample data compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_USERS, BUNDLED_CATEGORIES, BUNDLED_PRODUCTS)
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            users: parse_records(USERS_FILE, users)?,
            categories: parse_records(CATEGORIES_FILE, categories)?,
            products: parse_records(PRODUCTS_FILE, products)?,
        })
    }

    /// Loads `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let users = read_file(&dir.join(USERS_FILE))?;
        let categories = read_file(&dir.join(CATEGORIES_FILE))?;
        let products = read_file(&dir.join(PRODUCTS_FILE))?;
        tracing::debug!(dir = %dir.display(), "loaded record sets from disk");
        Self::from_json(&users, &categories, &products)
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: PathBuf::from(path),
        source,
    })
}

fn parse_records<T: DeserializeOwned>(
    source_name: &str,
    raw: &str,
) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Malformed {
        source_name: source_name.to_string(),
        source,
    })
}

/// Denormalized product list plus the user and category sets that drive the filter controls.
/// Built once by [`join`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Resolves every product's category and that category's owner, keeping product order.
///
/// Dangling foreign keys and duplicate ids are rejected, including owners of categories
/// no product uses. A catalog that joins successfully has a category and user on every row.
pub fn join(records: &RecordSets) -> Result<Catalog, CatalogError> {
    let mut users_by_id: HashMap<UserId, &User> = HashMap::with_capacity(records.users.len());
    for user in &records.users {
        if users_by_id.insert(user.id, user).is_some() {
            return Err(CatalogError::DuplicateId {
                kind: RecordKind::User,
                id: user.id.0,
            });
        }
    }

    let mut categories_by_id: HashMap<CategoryId, &Category> =
        HashMap::with_capacity(records.categories.len());
    for category in &records.categories {
        if categories_by_id.insert(category.id, category).is_some() {
            return Err(CatalogError::DuplicateId {
                kind: RecordKind::Category,
                id: category.id.0,
            });
        }
        if !users_by_id.contains_key(&category.owner_id) {
            return Err(CatalogError::MissingOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            });
        }
    }

    let mut seen_products = HashSet::with_capacity(records.products.len());
    let mut products = Vec::with_capacity(records.products.len());
    for product in &records.products {
        if !seen_products.insert(product.id) {
            return Err(CatalogError::DuplicateId {
                kind: RecordKind::Product,
                id: product.id.0,
            });
        }

        let category = categories_by_id
            .get(&product.category_id)
            .ok_or(CatalogError::MissingCategory {
                product_id: product.id,
                category_id: product.category_id,
            })?;
        let user = users_by_id
            .get(&category.owner_id)
            .ok_or(CatalogError::MissingOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            })?;

        products.push(EnrichedProduct::new(product, category, user));
    }

    tracing::info!(
        products = products.len(),
        categories = records.categories.len(),
        users = records.users.len(),
        "joined product catalog"
    );

    Ok(Catalog {
        users: records.users.clone(),
        categories: records.categories.clone(),
        products,
    })
}

/// Joins the record sets in `data_dir`, or the bundled sample data when none is given.
pub fn load(data_dir: Option<&Path>) -> Result<Catalog, CatalogError> {
    let records = match data_dir {
        Some(dir) => RecordSets::from_dir(dir)?,
        None => RecordSets::bundled()?,
    };
    join(&records)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
