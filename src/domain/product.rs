use serde::{Deserialize, Serialize};
use std::fmt;

/// One synthesized catalog row.
///
/// Records are transient: they are built in memory by the sampler, rendered
/// by the SQL writer and then discarded. `category_id` is the 1-based index
/// of the record's category in the configured category list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub size: Size,
    pub stock_quantity: u32,
    pub category_id: usize,
    pub image_url: String,
}

/// Garment size enumeration emitted into the `size` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        };
        write!(f, "{}", label)
    }
}
