use super::*;

fn product(name: &str, price: u32) -> Product {
    Product {
        name: name.to_owned(),
        price,
        image_url: format!("https://example.com/{name}.jpg"),
    }
}

#[test]
fn price_label_is_literal_concatenation() {
    assert_eq!(price_label(120), "$120");
    assert_eq!(price_label(620), "$620");
    assert_eq!(price_label(0), "$0");
}

#[test]
fn card_specs_preserve_order_and_content() {
    let products = [product("Bike", 120), product("Compu", 620)];
    let specs = card_specs(&products);

    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].name, "Bike");
    assert_eq!(specs[0].price_label, "$120");
    assert_eq!(specs[0].image_url, "https://example.com/Bike.jpg");
    assert_eq!(specs[1].name, "Compu");
    assert_eq!(specs[1].price_label, "$620");
}

#[test]
fn cart_icon_is_fixed_per_renderer() {
    let specs = card_specs(&[product("Bike", 120), product("Pantalla", 220)]);
    for spec in &specs {
        assert_eq!(spec.cart_icon, ADD_TO_CART_ICON);
    }
}

#[test]
fn empty_catalog_yields_no_cards() {
    assert!(card_specs(&[]).is_empty());
}
