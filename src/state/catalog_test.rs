use super::*;

#[test]
fn seed_catalog_parses() {
    let catalog = CatalogState::seed().expect("embedded catalog should parse");
    assert_eq!(catalog.products.len(), 3);
}

#[test]
fn seed_catalog_preserves_order_and_fields() {
    let catalog = CatalogState::seed().expect("embedded catalog should parse");
    let names: Vec<&str> = catalog.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Bike", "Pantalla", "Compu"]);

    let prices: Vec<u32> = catalog.products.iter().map(|p| p.price).collect();
    assert_eq!(prices, [120, 220, 620]);

    for product in &catalog.products {
        assert!(product.image_url.starts_with("https://"));
    }
}

#[test]
fn product_roundtrips_through_json() {
    let product = Product {
        name: "Bike".to_owned(),
        price: 120,
        image_url: "https://example.com/bike.jpg".to_owned(),
    };
    let json = serde_json::to_string(&product).expect("serialize");
    assert!(json.contains("\"image\""));
    let back: Product = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, product);
}

#[test]
fn negative_price_is_rejected() {
    let err = serde_json::from_str::<Product>(r#"{"name":"x","price":-5,"image":"u"}"#);
    assert!(err.is_err());
}
