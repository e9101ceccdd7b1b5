//! Frontend Models
//!
//! Data structures matching the backend `/foods` resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Food record (matches backend)
///
/// Every field falls back to its default when the backend omits it; entries
/// are rendered as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub available: bool,
}

impl Food {
    /// Apply a patch field by field; absent fields keep this record's value.
    pub fn merged(&self, patch: &FoodPatch) -> Food {
        Food {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or(self.price),
            available: patch.available.unwrap_or(self.available),
        }
    }
}

/// Partial food record submitted by a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Body of a create request. New dishes are always published as available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NewFood(FoodPatch);

impl NewFood {
    pub fn fields(&self) -> &FoodPatch {
        &self.0
    }
}

impl From<FoodPatch> for NewFood {
    fn from(patch: FoodPatch) -> Self {
        NewFood(FoodPatch {
            available: Some(true),
            ..patch
        })
    }
}

/// Prices arrive either as JSON numbers or as numeric strings ("19.90").
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Number(n)) => n,
        Some(RawPrice::Text(s)) => parse_price(&s).unwrap_or(0.0),
        None => 0.0,
    })
}

/// Parse a user/backend price, accepting either `,` or `.` as decimal mark.
pub fn parse_price(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Format a price for display, e.g. `R$ 19,90`
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}
