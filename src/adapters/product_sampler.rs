use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use thiserror::Error;

use crate::config::catalog::{CatalogConfig, CategoryConfig};
use crate::domain::product::Product;
use crate::domain::profile::{CategoryMode, GenerationProfile, ImageScheme};

/// Adjective resamples before a numeric suffix is applied to a taken name.
const NAME_RETRY_LIMIT: usize = 10;

/// Suffix draws before name generation is declared exhausted.
const SUFFIX_RETRY_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Category '{0}' is not defined in the catalog")]
    UnknownCategory(String),

    #[error("No unused name found for '{base}' after {attempts} suffix attempts")]
    NameSpaceExhausted { base: String, attempts: usize },
}

/// Seeded sampler that turns the catalog lookup tables into product records.
///
/// The random source is owned by the sampler and seeded once at construction,
/// so two samplers built with the same catalog, profile and seed produce
/// identical sequences. Name uniqueness is strict: candidates are checked
/// against every name produced so far, and a run that cannot find an unused
/// name fails with `SampleError::NameSpaceExhausted` rather than emitting a
/// duplicate.
pub struct ProductSampler<'a> {
    catalog: &'a CatalogConfig,
    profile: &'a GenerationProfile,
    rng: StdRng,
    used_names: HashSet<String>,
}

impl<'a> ProductSampler<'a> {
    pub fn new(catalog: &'a CatalogConfig, profile: &'a GenerationProfile, seed: u64) -> Self {
        Self {
            catalog,
            profile,
            rng: StdRng::seed_from_u64(seed),
            used_names: HashSet::new(),
        }
    }

    /// Produce `count` records in order, tracking names across the whole run.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Product>, SampleError> {
        tracing::debug!(count, "sampling product records");

        let mut products = Vec::with_capacity(count);
        while products.len() < count {
            let product = self.sample_product()?;
            self.used_names.insert(product.name.clone());
            products.push(product);
        }

        tracing::debug!(
            unique_names = self.used_names.len(),
            "product sampling complete"
        );
        Ok(products)
    }

    /// Build one record: category, de-duplicated name, description, price,
    /// size, stock quantity and image URL.
    pub fn sample_product(&mut self) -> Result<Product, SampleError> {
        let catalog = self.catalog;
        let (category_id, category) = self.pick_category()?;

        let item = &category.items[self.rng.gen_range(0..category.items.len())];

        let mut adjective = &catalog.adjectives[self.rng.gen_range(0..catalog.adjectives.len())];
        let mut name = format!("{} {}", capitalize(adjective), item);

        // Resample the adjective a few times before falling back to a suffix
        let mut attempts = 0;
        while self.used_names.contains(&name) && attempts < NAME_RETRY_LIMIT {
            adjective = &catalog.adjectives[self.rng.gen_range(0..catalog.adjectives.len())];
            name = format!("{} {}", capitalize(adjective), item);
            attempts += 1;
        }
        if self.used_names.contains(&name) {
            name = self.disambiguate(&name)?;
        }

        let phrase = &catalog.usage_phrases[self.rng.gen_range(0..catalog.usage_phrases.len())];
        let description = format!(
            "{} {} for {}",
            capitalize(adjective),
            item.to_lowercase(),
            phrase
        );

        let price = round_to_cents(
            self.rng
                .gen_range(category.price_range.min..=category.price_range.max),
        );
        let size = catalog.sizes[self.rng.gen_range(0..catalog.sizes.len())];
        let stock_quantity = self
            .rng
            .gen_range(catalog.stock_bounds.min..=catalog.stock_bounds.max);
        let image_url = self.image_url(item);

        Ok(Product {
            name,
            description,
            price,
            size,
            stock_quantity,
            category_id,
            image_url,
        })
    }

    fn pick_category(&mut self) -> Result<(usize, &'a CategoryConfig), SampleError> {
        let catalog = self.catalog;
        match &self.profile.category_mode {
            CategoryMode::Fixed(name) => {
                let idx = catalog
                    .categories
                    .iter()
                    .position(|category| &category.name == name)
                    .ok_or_else(|| SampleError::UnknownCategory(name.clone()))?;
                Ok((idx + 1, &catalog.categories[idx]))
            }
            CategoryMode::Uniform => {
                let idx = self.rng.gen_range(0..catalog.categories.len());
                Ok((idx + 1, &catalog.categories[idx]))
            }
        }
    }

    /// Force distinctness with a random 3-digit suffix. Suffixed candidates
    /// are re-checked against the used set; the attempt cap turns a full
    /// name space into an error instead of a silent duplicate.
    fn disambiguate(&mut self, base: &str) -> Result<String, SampleError> {
        for _ in 0..SUFFIX_RETRY_LIMIT {
            let candidate = format!("{} {}", base, self.rng.gen_range(100..=999));
            if !self.used_names.contains(&candidate) {
                tracing::trace!(name = %candidate, "name collision resolved with suffix");
                return Ok(candidate);
            }
        }

        Err(SampleError::NameSpaceExhausted {
            base: base.to_string(),
            attempts: SUFFIX_RETRY_LIMIT,
        })
    }

    fn image_url(&mut self, item: &str) -> String {
        match self.profile.image_scheme {
            ImageScheme::LocalPath => {
                let slug = item.to_lowercase().replace(' ', "_");
                format!("/images/{}_{}.jpg", slug, self.rng.gen_range(1..=10_000))
            }
            ImageScheme::RemotePlaceholder => {
                format!(
                    "https://picsum.photos/seed/{}/640/480",
                    self.rng.gen_range(1..=100_000)
                )
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
