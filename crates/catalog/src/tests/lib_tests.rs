use super::*;
use shared::domain::{ProductId, Sex};

fn user(id: i64, name: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        sex: Sex::M,
    }
}

fn category(id: i64, title: &str, owner: i64) -> Category {
    Category {
        id: CategoryId(id),
        title: title.to_string(),
        icon: "*".to_string(),
        owner_id: UserId(owner),
    }
}

fn product(id: i64, name: &str, category: i64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category_id: CategoryId(category),
    }
}

#[test]
fn joins_products_with_category_and_owner_in_source_order() {
    let records = RecordSets {
        users: vec![user(1, "Roma"), user(2, "Anna")],
        categories: vec![category(1, "Grocery", 2), category(2, "Drinks", 1)],
        products: vec![product(5, "Milk", 2), product(3, "Bread", 1)],
    };

    let catalog = join(&records).expect("join");
    let ids: Vec<_> = catalog.products().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![5, 3]);

    let milk = &catalog.products()[0];
    assert_eq!(milk.category.title, "Drinks");
    assert_eq!(milk.user.name, "Roma");
    let bread = &catalog.products()[1];
    assert_eq!(bread.category.title, "Grocery");
    assert_eq!(bread.user.name, "Anna");
}

#[test]
fn rejects_product_with_missing_category() {
    let records = RecordSets {
        users: vec![user(1, "Roma")],
        categories: vec![category(1, "Grocery", 1)],
        products: vec![product(1, "Milk", 9)],
    };

    let err = join(&records).expect_err("dangling category");
    assert!(matches!(
        err,
        CatalogError::MissingCategory {
            product_id: ProductId(1),
            category_id: CategoryId(9)
        }
    ));
}

#[test]
fn rejects_category_with_missing_owner_even_without_products() {
    let records = RecordSets {
        users: vec![user(1, "Roma")],
        categories: vec![category(1, "Grocery", 1), category(2, "Orphans", 42)],
        products: vec![product(1, "Bread", 1)],
    };

    let err = join(&records).expect_err("dangling owner");
    assert!(matches!(
        err,
        CatalogError::MissingOwner {
            category_id: CategoryId(2),
            owner_id: UserId(42)
        }
    ));
}

#[test]
fn rejects_duplicate_ids() {
    let records = RecordSets {
        users: vec![user(1, "Roma")],
        categories: vec![category(1, "Grocery", 1)],
        products: vec![product(1, "Bread", 1), product(1, "Milk", 1)],
    };

    let err = join(&records).expect_err("duplicate product");
    assert!(matches!(
        err,
        CatalogError::DuplicateId {
            kind: RecordKind::Product,
            id: 1
        }
    ));
}

#[test]
fn empty_record_sets_join_to_empty_catalog() {
    let catalog = join(&RecordSets::default()).expect("join");
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn bundled_data_joins_cleanly() {
    let catalog = load(None).expect("bundled catalog");
    assert_eq!(catalog.len(), 12);
    assert_eq!(catalog.users().len(), 4);
    assert_eq!(catalog.categories().len(), 5);
    assert_eq!(catalog.products()[0].name, "Milk");
}

#[test]
fn reports_malformed_json_with_source_name() {
    let err = RecordSets::from_json("[]", "{not json", "[]").expect_err("malformed");
    match err {
        CatalogError::Malformed { source_name, .. } => assert_eq!(source_name, CATEGORIES_FILE),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_record_sets_from_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(USERS_FILE),
        r#"[{"id":1,"name":"Roma","sex":"m"}]"#,
    )
    .expect("users");
    std::fs::write(
        dir.path().join(CATEGORIES_FILE),
        r#"[{"id":1,"title":"Drinks","icon":"🍺","ownerId":1}]"#,
    )
    .expect("categories");
    std::fs::write(
        dir.path().join(PRODUCTS_FILE),
        r#"[{"id":1,"name":"Milk","categoryId":1}]"#,
    )
    .expect("products");

    let catalog = load(Some(dir.path())).expect("catalog from dir");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.products()[0].category_label(), "🍺 - Drinks");
}

#[test]
fn missing_file_in_data_dir_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load(Some(dir.path())).expect_err("no files");
    match err {
        CatalogError::Io { path, .. } => assert!(path.ends_with(USERS_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}
