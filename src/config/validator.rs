use std::collections::HashMap;
use thiserror::Error;

use crate::config::{CatalogConfig, Settings};
use crate::domain::profile::CategoryMode;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Cross-reference error: {0}")]
    CrossReference(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Validate generator parameters
        if let Err(e) = Self::validate_generator(settings) {
            errors.extend(e);
        }

        // Validate catalog lookup tables
        if let Err(e) = Self::validate_catalog(&settings.catalog) {
            errors.extend(e);
        }

        // Cross-reference validation
        if let Err(e) = Self::validate_profile(settings) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generator(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.generator.count == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.count".to_string(),
                reason: "Record count must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_catalog(catalog: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        if catalog.categories.is_empty() {
            errors.push(ValidationError::MissingField(
                "catalog.categories".to_string(),
            ));
        }

        for (idx, category) in catalog.categories.iter().enumerate() {
            // Check for duplicate category names
            if let Some(prev_idx) = seen_names.insert(&category.name, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Category name '{}' appears at indices {} and {}",
                    category.name, prev_idx, idx
                )));
            }

            if category.name.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "catalog.categories[{}].name",
                    idx
                )));
            }

            if category.items.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "catalog.categories[{}].items",
                    idx
                )));
            }

            if category.price_range.min < 0.0 {
                errors.push(ValidationError::InvalidValue {
                    field: format!("catalog.categories[{}].price_range.min", idx),
                    reason: "Price bounds must not be negative".to_string(),
                });
            }

            if category.price_range.min > category.price_range.max {
                errors.push(ValidationError::InvalidValue {
                    field: format!("catalog.categories[{}].price_range", idx),
                    reason: "min must not exceed max".to_string(),
                });
            }
        }

        if catalog.adjectives.is_empty() {
            errors.push(ValidationError::MissingField(
                "catalog.adjectives".to_string(),
            ));
        }

        if catalog.usage_phrases.is_empty() {
            errors.push(ValidationError::MissingField(
                "catalog.usage_phrases".to_string(),
            ));
        }

        if catalog.sizes.is_empty() {
            errors.push(ValidationError::MissingField("catalog.sizes".to_string()));
        }

        if catalog.stock_bounds.min > catalog.stock_bounds.max {
            errors.push(ValidationError::InvalidValue {
                field: "catalog.stock_bounds".to_string(),
                reason: "min must not exceed max".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_profile(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let profile = settings.generator.profile.resolve();

        if let CategoryMode::Fixed(name) = &profile.category_mode {
            let known = settings
                .catalog
                .categories
                .iter()
                .any(|category| &category.name == name);
            if !known {
                return Err(vec![ValidationError::CrossReference(format!(
                    "Profile category '{}' is not defined in catalog.categories",
                    name
                ))]);
            }
        }

        Ok(())
    }
}
