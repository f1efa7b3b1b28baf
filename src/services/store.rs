use crate::config::ConfigError;
use crate::models::catalog::{ProductData, ProductStore, RecommendationTable};
use lazy_static::lazy_static;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

lazy_static! {
    pub static ref DEFAULT_CATALOG: Vec<String> = [
        "Product A",
        "Product B",
        "Product C",
        "Product D",
        "Product E",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect();

    pub static ref DEFAULT_RECOMMENDATIONS: RecommendationTable = [
        ("Product A", ["Product B", "Product C"]),
        ("Product B", ["Product A", "Product D"]),
        ("Product C", ["Product A", "Product E"]),
        ("Product D", ["Product B", "Product E"]),
        ("Product E", ["Product C", "Product D"]),
    ]
    .iter()
    .map(|(product, related)| {
        (
            product.to_string(),
            related.iter().map(|r| r.to_string()).collect(),
        )
    })
    .collect();
}

pub type SharedStore = Arc<ProductStore>;

pub fn default_store() -> ProductStore {
    ProductStore::new(DEFAULT_CATALOG.clone(), DEFAULT_RECOMMENDATIONS.clone())
}

/// Builds the store served for the lifetime of the process.
pub fn build_store(data_file: Option<&Path>) -> Result<SharedStore, ConfigError> {
    let store = match data_file {
        Some(path) => {
            let data = load_product_data_from_file(path)?;
            log::info!(
                "Loaded {} products and {} recommendation entries from {}",
                data.products.len(),
                data.recommendations.len(),
                path.display()
            );
            ProductStore::from(data)
        }
        None => {
            log::info!("Using built-in product data");
            default_store()
        }
    };
    Ok(Arc::new(store))
}

fn load_product_data_from_file(file_path: &Path) -> Result<ProductData, ConfigError> {
    let file = File::open(file_path).map_err(|e| {
        ConfigError::DataFileError(format!("Cannot open {}: {}", file_path.display(), e))
    })?;
    let data = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ConfigError::DataFileError(format!("Cannot parse {}: {}", file_path.display(), e))
    })?;
    Ok(data)
}
