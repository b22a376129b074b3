use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the sampler picks a category for each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMode {
    /// Every record belongs to the named category.
    Fixed(String),
    /// Each record draws a category uniformly from the catalog.
    Uniform,
}

/// How the sampler builds the `image_url` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageScheme {
    /// `/images/<item_slug>_<n>.jpg` paths served by the application itself.
    LocalPath,
    /// Remote placeholder-image URLs carrying a random seed component.
    RemotePlaceholder,
}

/// Column set and ordering of the emitted `INSERT` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// `(name, description, price, size, stock_quantity, category_id, image_url)`
    Catalog,
    /// `(description, image_url, name, price, size, quantity, category_id)`
    Storefront,
}

/// A full parametrization of one generation run.
///
/// The three knobs are orthogonal; the named presets below reproduce the two
/// historical output shapes of this tool.
#[derive(Debug, Clone)]
pub struct GenerationProfile {
    pub category_mode: CategoryMode,
    pub image_scheme: ImageScheme,
    pub column_layout: ColumnLayout,
}

impl GenerationProfile {
    /// Clothing-only records with local image paths.
    pub fn clothing() -> Self {
        Self {
            category_mode: CategoryMode::Fixed("Clothing".to_string()),
            image_scheme: ImageScheme::LocalPath,
            column_layout: ColumnLayout::Catalog,
        }
    }

    /// Records across the whole catalog with remote placeholder images.
    pub fn storefront() -> Self {
        Self {
            category_mode: CategoryMode::Uniform,
            image_scheme: ImageScheme::RemotePlaceholder,
            column_layout: ColumnLayout::Storefront,
        }
    }
}

/// Named profile preset selectable from the CLI or the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Clothing,
    Storefront,
}

impl ProfileKind {
    pub fn resolve(&self) -> GenerationProfile {
        match self {
            ProfileKind::Clothing => GenerationProfile::clothing(),
            ProfileKind::Storefront => GenerationProfile::storefront(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clothing_preset() {
        let profile = ProfileKind::Clothing.resolve();
        assert_eq!(
            profile.category_mode,
            CategoryMode::Fixed("Clothing".to_string())
        );
        assert_eq!(profile.image_scheme, ImageScheme::LocalPath);
        assert_eq!(profile.column_layout, ColumnLayout::Catalog);
    }

    #[test]
    fn test_storefront_preset() {
        let profile = ProfileKind::Storefront.resolve();
        assert_eq!(profile.category_mode, CategoryMode::Uniform);
        assert_eq!(profile.image_scheme, ImageScheme::RemotePlaceholder);
        assert_eq!(profile.column_layout, ColumnLayout::Storefront);
    }

    #[test]
    fn test_default_profile_is_clothing() {
        assert_eq!(ProfileKind::default(), ProfileKind::Clothing);
    }
}
