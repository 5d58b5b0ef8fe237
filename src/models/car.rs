use serde::{Deserialize, Deserializer, Serialize};

/// One rentable vehicle as returned by `GET /cars`.
///
/// Extra fields the backend sends (plate number, colour, status) are ignored.
/// Display fields that are missing or `null` fall back to their defaults so
/// every listed car still gets a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seats: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fuel_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_per_day: f64,
    #[serde(default)]
    pub photo_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Car {
    /// "Toyota Camry"
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// "Toyota Camry • 2023"
    pub fn headline(&self) -> String {
        format!("{} {} • {}", self.brand, self.model, self.year)
    }

    /// The photo URL, treating an empty string as missing.
    pub fn photo(&self) -> Option<&str> {
        self.photo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
