/// Listing filter built from the four filter inputs.
///
/// Blank inputs become `None` and are left out of the query.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CarFilter {
    pub category: Option<String>,
    pub seats: Option<String>,
    pub transmission: Option<String>,
    pub max_price: Option<String>,
}

fn normalize(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl CarFilter {
    pub fn new(category: &str, seats: &str, transmission: &str, max_price: &str) -> Self {
        Self {
            category: normalize(category),
            seats: normalize(seats),
            transmission: normalize(transmission),
            max_price: normalize(max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                category: None,
                seats: None,
                transmission: None,
                max_price: None,
            }
        )
    }

    /// Query parameters in a stable order, only for fields that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("category", self.category.as_deref()),
            ("seats", self.seats.as_deref()),
            ("transmission", self.transmission.as_deref()),
            ("max_price", self.max_price.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// `category=SUV&seats=5`, or an empty string when nothing is set.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
