use demeter::config::{GeneratorSettings, Settings};
use demeter::domain::profile::ProfileKind;

fn settings(count: usize, seed: u64, profile: ProfileKind) -> Settings {
    Settings {
        generator: GeneratorSettings {
            seed,
            count,
            profile,
        },
        ..Settings::default()
    }
}

#[test]
fn test_end_to_end_is_deterministic() {
    let settings = settings(50, 42, ProfileKind::Clothing);

    let first = demeter::generate_seed_sql(&settings).unwrap();
    let second = demeter::generate_seed_sql(&settings).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_five_record_statement_shape() {
    let settings = settings(5, 42, ProfileKind::Clothing);
    let sql = demeter::generate_seed_sql(&settings).unwrap();

    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five rows");
    assert_eq!(
        lines[0],
        "INSERT INTO products (name, description, price, size, stock_quantity, category_id, image_url) VALUES"
    );
    for line in &lines[1..5] {
        assert!(line.starts_with('('));
        assert!(line.ends_with("),"));
    }
    assert!(lines[5].ends_with(");"));
    for line in &lines[1..] {
        assert!(line.contains("/images/"));
    }
}

#[test]
fn test_storefront_statement_shape() {
    let settings = settings(5, 42, ProfileKind::Storefront);
    let sql = demeter::generate_seed_sql(&settings).unwrap();

    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "INSERT INTO products (description, image_url, name, price, size, quantity, category_id) VALUES"
    );
    for line in &lines[1..] {
        assert!(line.contains("https://picsum.photos/seed/"));
    }
}

#[test]
fn test_full_run_emits_thousand_rows() {
    let settings = settings(1000, 42, ProfileKind::Clothing);
    let sql = demeter::generate_seed_sql(&settings).unwrap();

    assert_eq!(sql.lines().count(), 1001);
}
