use super::sql_writer::SqlWriter;
use crate::domain::product::{Product, Size};
use crate::domain::profile::ColumnLayout;

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            name: "O'Brien Jacket".to_string(),
            description: "Warm jacket for daily use".to_string(),
            price: 25.9,
            size: Size::M,
            stock_quantity: 42,
            category_id: 1,
            image_url: "/images/jacket_77.jpg".to_string(),
        },
        Product {
            name: "Soft Hoodie".to_string(),
            description: "Soft hoodie for casual wear".to_string(),
            price: 199.99,
            size: Size::XL,
            stock_quantity: 10,
            category_id: 1,
            image_url: "/images/hoodie_12.jpg".to_string(),
        },
    ]
}

#[test]
fn test_catalog_layout_golden() {
    let writer = SqlWriter::new(ColumnLayout::Catalog);
    let sql = writer.render(&sample_products());

    let expected = "INSERT INTO products (name, description, price, size, stock_quantity, category_id, image_url) VALUES\n\
        ('O''Brien Jacket', 'Warm jacket for daily use', 25.90, 'M', 42, 1, '/images/jacket_77.jpg'),\n\
        ('Soft Hoodie', 'Soft hoodie for casual wear', 199.99, 'XL', 10, 1, '/images/hoodie_12.jpg');\n";
    assert_eq!(sql, expected);
}

#[test]
fn test_storefront_layout_golden() {
    let writer = SqlWriter::new(ColumnLayout::Storefront);
    let sql = writer.render(&sample_products());

    let expected = "INSERT INTO products (description, image_url, name, price, size, quantity, category_id) VALUES\n\
        ('Warm jacket for daily use', '/images/jacket_77.jpg', 'O''Brien Jacket', 25.90, 'M', 42, 1),\n\
        ('Soft hoodie for casual wear', '/images/hoodie_12.jpg', 'Soft Hoodie', 199.99, 'XL', 10, 1);\n";
    assert_eq!(sql, expected);
}

#[test]
fn test_quotes_are_escaped_in_every_string_field() {
    let writer = SqlWriter::new(ColumnLayout::Catalog);
    let product = Product {
        name: "D'Art Vase".to_string(),
        description: "Collector's piece".to_string(),
        price: 19.99,
        size: Size::S,
        stock_quantity: 1,
        category_id: 9,
        image_url: "/images/d'art.jpg".to_string(),
    };

    let sql = writer.render(&[product]);
    assert!(sql.contains("'D''Art Vase'"));
    assert!(sql.contains("'Collector''s piece'"));
    assert!(sql.contains("'/images/d''art.jpg'"));
}

#[test]
fn test_single_row_ends_with_semicolon() {
    let writer = SqlWriter::new(ColumnLayout::Catalog);
    let products = sample_products();

    let sql = writer.render(&products[..1]);
    assert!(sql.trim_end().ends_with(';'));
    assert!(!sql.contains("),"));
}

#[test]
fn test_row_terminators() {
    let writer = SqlWriter::new(ColumnLayout::Catalog);
    let mut products = sample_products();
    products.extend(sample_products());

    let sql = writer.render(&products);
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in &lines[1..4] {
        assert!(line.ends_with("),"), "row should end with a comma: {}", line);
    }
    assert!(lines[4].ends_with(");"));
}

#[test]
fn test_empty_input_renders_nothing() {
    let writer = SqlWriter::new(ColumnLayout::Catalog);
    assert_eq!(writer.render(&[]), "");
}
