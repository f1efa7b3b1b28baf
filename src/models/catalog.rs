use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product name -> ordered list of related product names.
pub type RecommendationTable = HashMap<String, Vec<String>>;

/// On-disk shape of a product data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub products: Vec<String>,
    pub recommendations: RecommendationTable,
}

/// The catalog and recommendation table, fixed once the server starts.
///
/// Related products are not checked against the catalog: whatever table
/// the store is built from is served as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStore {
    catalog: Vec<String>,
    recommendations: RecommendationTable,
}

impl ProductStore {
    pub fn new(catalog: Vec<String>, recommendations: RecommendationTable) -> Self {
        ProductStore {
            catalog,
            recommendations,
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    // Exact match only, a miss is an empty list
    pub fn recommend(&self, product_name: &str) -> Vec<String> {
        self.recommendations
            .get(product_name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn recommend_json(&self, product_name: &str) -> String {
        match serde_json::to_string(&self.recommend(product_name)) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize recommendations: {}", e);
                "[]".to_string()
            }
        }
    }
}

impl From<ProductData> for ProductStore {
    fn from(data: ProductData) -> Self {
        ProductStore::new(data.products, data.recommendations)
    }
}
