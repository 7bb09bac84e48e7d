//! Item creation payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Allowed values of the `item_id` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemSelector {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

fn default_name() -> String {
    "Alex".to_string()
}

fn default_second_name() -> String {
    "Ray".to_string()
}

/// Person submitted with an item; missing fields take their defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(default = "default_name")]
    #[schema(default = "Alex")]
    pub name: String,
    #[serde(default = "default_second_name")]
    #[schema(default = "Ray")]
    pub second_name: String,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: default_name(),
            second_name: default_second_name(),
        }
    }
}
