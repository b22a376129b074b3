//! Lookup tables the sampler draws from.
//!
//! The compiled-in defaults are the canonical catalog; a config file can
//! override any table individually. Category ids are 1-based positions in
//! the `categories` list, so list order is part of the output contract.

use serde::{Deserialize, Serialize};

use crate::domain::product::Size;

/// Inclusive price bounds for one category.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive bounds for the `stock_quantity` column.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct StockBounds {
    pub min: u32,
    pub max: u32,
}

/// One product grouping with its price bounds and item nouns.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub name: String,
    pub price_range: PriceRange,
    #[serde(default)]
    pub items: Vec<String>,
}

/// The full set of lookup tables for a generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
    #[serde(default = "default_adjectives")]
    pub adjectives: Vec<String>,
    #[serde(default = "default_usage_phrases")]
    pub usage_phrases: Vec<String>,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<Size>,
    #[serde(default = "default_stock_bounds")]
    pub stock_bounds: StockBounds,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            adjectives: default_adjectives(),
            usage_phrases: default_usage_phrases(),
            sizes: default_sizes(),
            stock_bounds: default_stock_bounds(),
        }
    }
}

fn category(name: &str, min: f64, max: f64, items: &[&str]) -> CategoryConfig {
    CategoryConfig {
        name: name.to_string(),
        price_range: PriceRange { min, max },
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        category(
            "Clothing",
            25.99,
            199.99,
            &[
                "T-Shirt", "Jacket", "Jeans", "Sweater", "Hoodie", "Shorts", "Dress", "Skirt",
                "Sneakers", "Coat", "Blazer", "Tank Top",
            ],
        ),
        category(
            "Electronics",
            49.99,
            499.99,
            &[
                "Headphones",
                "Speaker",
                "Smartwatch",
                "Tablet",
                "Camera",
                "Keyboard",
            ],
        ),
        category(
            "Home & Kitchen",
            39.99,
            299.99,
            &[
                "Blender",
                "Cookware Set",
                "Toaster",
                "Kettle",
                "Cutting Board",
                "Mixing Bowl",
            ],
        ),
        category(
            "Food & Beverage",
            14.99,
            79.99,
            &[
                "Coffee Beans",
                "Green Tea",
                "Granola",
                "Olive Oil",
                "Dark Chocolate",
                "Honey",
            ],
        ),
        category(
            "Fitness",
            49.99,
            299.99,
            &[
                "Yoga Mat",
                "Dumbbell Set",
                "Resistance Bands",
                "Foam Roller",
                "Jump Rope",
                "Kettlebell",
            ],
        ),
        category(
            "Beauty",
            19.99,
            129.99,
            &[
                "Face Cream",
                "Serum",
                "Shampoo",
                "Body Lotion",
                "Lip Balm",
                "Face Mask",
            ],
        ),
        category(
            "Outdoor",
            59.99,
            399.99,
            &[
                "Tent",
                "Sleeping Bag",
                "Backpack",
                "Camping Stove",
                "Trekking Poles",
                "Water Bottle",
            ],
        ),
        category(
            "Office",
            39.99,
            499.99,
            &[
                "Desk Lamp",
                "Notebook",
                "Office Chair",
                "Monitor Stand",
                "Desk Organizer",
                "Fountain Pen",
            ],
        ),
        category(
            "Decor",
            19.99,
            149.99,
            &[
                "Wall Art",
                "Throw Pillow",
                "Table Lamp",
                "Vase",
                "Picture Frame",
                "Scented Candle",
            ],
        ),
        category(
            "Accessories",
            19.99,
            199.99,
            &[
                "Leather Belt",
                "Scarf",
                "Beanie",
                "Sunglasses",
                "Wallet",
                "Tote Bag",
            ],
        ),
    ]
}

fn default_adjectives() -> Vec<String> {
    [
        "comfortable",
        "premium",
        "organic",
        "soft",
        "warm",
        "lightweight",
        "breathable",
        "insulated",
        "stylish",
        "durable",
    ]
    .iter()
    .map(|adjective| adjective.to_string())
    .collect()
}

fn default_usage_phrases() -> Vec<String> {
    [
        "daily use",
        "everyday comfort",
        "casual wear",
        "outdoor activities",
        "work & travel",
    ]
    .iter()
    .map(|phrase| phrase.to_string())
    .collect()
}

fn default_sizes() -> Vec<Size> {
    vec![Size::S, Size::M, Size::L, Size::XL]
}

fn default_stock_bounds() -> StockBounds {
    StockBounds { min: 10, max: 100 }
}
