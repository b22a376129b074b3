use crate::domain::product::Product;
use crate::domain::profile::ColumnLayout;

/// Renders an ordered sequence of records as one multi-row `INSERT`.
///
/// Output contract: a header line naming the columns, then one value tuple
/// per line. Every row ends with `,` except the last, which ends with `;`.
/// String fields are single-quoted with embedded `'` doubled, prices carry
/// exactly two decimal places.
pub struct SqlWriter {
    layout: ColumnLayout,
}

impl SqlWriter {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    pub fn render(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return String::new();
        }

        let mut statement = String::new();
        statement.push_str("INSERT INTO products (");
        statement.push_str(&self.columns().join(", "));
        statement.push_str(") VALUES\n");

        for (idx, product) in products.iter().enumerate() {
            let terminator = if idx + 1 == products.len() { ';' } else { ',' };
            statement.push_str(&format!("({}){}\n", self.row(product), terminator));
        }

        statement
    }

    fn columns(&self) -> &'static [&'static str] {
        match self.layout {
            ColumnLayout::Catalog => &[
                "name",
                "description",
                "price",
                "size",
                "stock_quantity",
                "category_id",
                "image_url",
            ],
            ColumnLayout::Storefront => &[
                "description",
                "image_url",
                "name",
                "price",
                "size",
                "quantity",
                "category_id",
            ],
        }
    }

    fn row(&self, product: &Product) -> String {
        let values = match self.layout {
            ColumnLayout::Catalog => vec![
                quoted(&product.name),
                quoted(&product.description),
                format!("{:.2}", product.price),
                format!("'{}'", product.size),
                product.stock_quantity.to_string(),
                product.category_id.to_string(),
                quoted(&product.image_url),
            ],
            ColumnLayout::Storefront => vec![
                quoted(&product.description),
                quoted(&product.image_url),
                quoted(&product.name),
                format!("{:.2}", product.price),
                format!("'{}'", product.size),
                product.stock_quantity.to_string(),
                product.category_id.to_string(),
            ],
        };
        values.join(", ")
    }
}

/// Escape a string field for SQL by doubling single quotes.
fn escape(field: &str) -> String {
    field.replace('\'', "''")
}

fn quoted(field: &str) -> String {
    format!("'{}'", escape(field))
}
