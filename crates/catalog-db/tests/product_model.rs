//! Product model tests against a real SQLite database.
//!
//! Every test builds its own in-memory `Database`, so tests never see each
//! other's rows and need no cleanup.

use catalog_core::{Category, Money, Product, ProductFactory};
use catalog_db::{Database, DbConfig, DbError, ProductRepository};

async fn setup() -> (Database, ProductRepository) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let products = db.products();
    (db, products)
}

/// Creates `count` factory products and returns them with ids assigned.
async fn create_batch(
    products: &ProductRepository,
    factory: &mut ProductFactory<impl rand::Rng>,
    count: usize,
) -> Vec<Product> {
    let mut created = factory.build_batch(count);
    for product in &mut created {
        products.create(product).await.unwrap();
    }
    created
}

// =============================================================================
// CRUD
// =============================================================================

#[test]
fn test_create_a_product() {
    let product = Product::new(
        "Fedora",
        "A red hat",
        "12.50".parse().unwrap(),
        true,
        Category::Cloths,
    );

    assert_eq!(product.to_string(), "<Product Fedora id=[None]>");
    assert_eq!(product.id, None);
    assert_eq!(product.name, "Fedora");
    assert_eq!(product.description, "A red hat");
    assert!(product.available);
    assert_eq!(product.price, Money::from_cents(1250));
    assert_eq!(product.category, Category::Cloths);
}

#[tokio::test]
async fn test_add_a_product() {
    let (_db, products) = setup().await;
    assert!(products.all().await.unwrap().is_empty());

    let mut product = ProductFactory::new().build();
    products.create(&mut product).await.unwrap();
    assert!(product.id.is_some());

    let all = products.all().await.unwrap();
    assert_eq!(all.len(), 1);

    let stored = &all[0];
    assert_eq!(stored.id, product.id);
    assert_eq!(stored.name, product.name);
    assert_eq!(stored.description, product.description);
    assert_eq!(stored.price, product.price);
    assert_eq!(stored.available, product.available);
    assert_eq!(stored.category, product.category);
}

#[tokio::test]
async fn test_read_a_product() {
    let (_db, products) = setup().await;
    let mut product = ProductFactory::new().build();
    products.create(&mut product).await.unwrap();

    let found = products
        .find(product.id.as_deref().unwrap())
        .await
        .unwrap()
        .expect("product should be found");

    assert_eq!(found, product);
}

#[tokio::test]
async fn test_update_a_product() {
    let (_db, products) = setup().await;
    let mut product = ProductFactory::new().build();
    products.create(&mut product).await.unwrap();
    let original_id = product.id.clone();

    product.description = "New description".to_string();
    products.update(&product).await.unwrap();
    assert_eq!(product.id, original_id);

    let all = products.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, original_id);
    assert_eq!(all[0].description, "New description");
    assert_eq!(all[0].name, product.name);
    assert_eq!(all[0].price, product.price);
}

#[tokio::test]
async fn test_update_without_id_fails() {
    let (_db, products) = setup().await;
    let product = ProductFactory::new().build();

    let err = products.update(&product).await.unwrap_err();

    assert!(matches!(err, DbError::Validation(_)));
}

#[tokio::test]
async fn test_update_after_delete_is_not_found() {
    let (_db, products) = setup().await;
    let mut product = ProductFactory::new().build();
    products.create(&mut product).await.unwrap();
    products.delete(&product).await.unwrap();

    let err = products.update(&product).await.unwrap_err();

    assert!(matches!(err, DbError::NotFound { .. }));
    assert!(products.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_a_product() {
    let (_db, products) = setup().await;
    let mut factory = ProductFactory::new();
    let created = create_batch(&products, &mut factory, 3).await;
    assert_eq!(products.all().await.unwrap().len(), 3);

    products.delete(&created[1]).await.unwrap();

    let remaining = products.all().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|p| p.id != created[1].id));
    assert!(products
        .find(created[1].id.as_deref().unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_all_products() {
    let (_db, products) = setup().await;
    assert!(products.all().await.unwrap().is_empty());

    let created = create_batch(&products, &mut ProductFactory::new(), 5).await;

    let all = products.all().await.unwrap();
    assert_eq!(all.len(), 5);
    // insertion order
    let created_ids: Vec<_> = created.iter().map(|p| p.id.clone()).collect();
    let listed_ids: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
    assert_eq!(listed_ids, created_ids);
}

#[tokio::test]
async fn test_find_never_used_id() {
    let (_db, products) = setup().await;
    create_batch(&products, &mut ProductFactory::new(), 2).await;

    assert!(products.find("0").await.unwrap().is_none());
}

// =============================================================================
// Attribute Lookups
// =============================================================================

#[tokio::test]
async fn test_find_by_name() {
    let (_db, products) = setup().await;
    let created = create_batch(&products, &mut ProductFactory::seeded(1), 10).await;

    let name = created[0].name.clone();
    let expected = created.iter().filter(|p| p.name == name).count();

    let found = products.find_by_name(&name).await.unwrap();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.name == name));
}

#[tokio::test]
async fn test_find_by_name_is_exact_and_case_sensitive() {
    let (_db, products) = setup().await;
    for name in ["Hat", "Hat", "hat", "Hats", "Top Hat"] {
        let mut product = Product::new(name, "", Money::from_cents(999), true, Category::Cloths);
        products.create(&mut product).await.unwrap();
    }

    let found = products.find_by_name("Hat").await.unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.name == "Hat"));
}

#[tokio::test]
async fn test_find_by_availability() {
    let (_db, products) = setup().await;
    let created = create_batch(&products, &mut ProductFactory::seeded(2), 10).await;

    let available = created[0].available;
    let expected = created.iter().filter(|p| p.available == available).count();

    let found = products.find_by_availability(available).await.unwrap();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.available == available));

    let other = products.find_by_availability(!available).await.unwrap();
    assert_eq!(found.len() + other.len(), created.len());
}

#[tokio::test]
async fn test_find_by_category() {
    let (_db, products) = setup().await;
    let created = create_batch(&products, &mut ProductFactory::seeded(3), 10).await;

    let category = created[0].category;
    let expected = created.iter().filter(|p| p.category == category).count();

    let found = products.find_by_category(category).await.unwrap();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.category == category));
}

#[tokio::test]
async fn test_find_by_price() {
    let (_db, products) = setup().await;
    let created = create_batch(&products, &mut ProductFactory::seeded(4), 5).await;

    let target = created[0].price;
    let expected = created.iter().filter(|p| p.price == target).count();

    let found = products.find_by_price(target).await.unwrap();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.price == target));
}

#[tokio::test]
async fn test_find_by_price_when_str() {
    let (_db, products) = setup().await;
    let created = create_batch(&products, &mut ProductFactory::seeded(5), 5).await;

    let target = created[0].price;
    let expected = created.iter().filter(|p| p.price == target).count();

    let text = target.to_decimal_string();
    let found = products.find_by_price(text.as_str()).await.unwrap();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|p| p.price == target));

    let quoted = format!(" \"{}\" ", text);
    assert_eq!(products.find_by_price(quoted).await.unwrap().len(), expected);
}

#[tokio::test]
async fn test_find_by_price_decimal_and_text_agree() {
    let (_db, products) = setup().await;
    let mut shirt = Product::new("Shirt", "Linen", Money::from_cents(1999), true, Category::Cloths);
    let mut pots = Product::new("Pots", "Copper", Money::from_cents(2000), false, Category::Housewares);
    products.create(&mut shirt).await.unwrap();
    products.create(&mut pots).await.unwrap();

    let by_money = products.find_by_price(Money::from_cents(1999)).await.unwrap();
    let by_text = products.find_by_price("19.99").await.unwrap();
    let by_long_text = products.find_by_price("19.990").await.unwrap();

    assert_eq!(by_money, vec![shirt]);
    assert_eq!(by_text, by_money);
    assert_eq!(by_long_text, by_money);
}

// =============================================================================
// Wire Form & Shared Databases
// =============================================================================

#[tokio::test]
async fn test_create_from_json() {
    let (_db, products) = setup().await;
    let mut product = Product::from_json(&serde_json::json!({
        "name": "Wrench",
        "description": "Adjustable",
        "price": "17.25",
        "available": true,
        "category": "TOOLS"
    }))
    .unwrap();

    products.create(&mut product).await.unwrap();

    let stored = products.find(product.id.as_deref().unwrap()).await.unwrap().unwrap();
    let data = serde_json::to_value(stored.to_data()).unwrap();
    assert_eq!(data["price"], "17.25");
    assert_eq!(data["category"], "TOOLS");
    assert_eq!(data["id"].as_str(), product.id.as_deref());
}

#[tokio::test]
async fn test_file_database_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let mut product = ProductFactory::new().build();
    {
        let db = Database::new(DbConfig::from_path(&path)).await.unwrap();
        db.products().create(&mut product).await.unwrap();
        db.close().await;
    }

    let db = Database::new(DbConfig::from_path(&path)).await.unwrap();
    let found = db
        .products()
        .find(product.id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(found, Some(product));

    // Shared databases are reset between cases with delete_all
    assert_eq!(db.products().delete_all().await.unwrap(), 1);
    assert!(db.products().all().await.unwrap().is_empty());
    db.close().await;
}
