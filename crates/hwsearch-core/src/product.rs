use serde::{Deserialize, Serialize};

/// A synthesized product listing for a hypothetical item at one retailer.
///
/// Every field is fabricated deterministically from the query and store
/// (except `distance`, which may be random); nothing here corresponds to a
/// real catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable display identifier derived from a hash of `(store, query)`.
    /// Not globally unique and never used for lookups.
    pub id: i64,
    /// Title-cased query, with a category suffix appended when the query
    /// matches a keyword rule (e.g. `"Light Switch - Single Pole"`).
    pub name: String,
    /// Deterministic pseudo-price. The unit is deliberately unspecified;
    /// the value is the exact character-sum transformation, no currency
    /// semantics attached.
    pub price: i64,
    /// Always `true`; synthesized listings are never out of stock.
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    /// Synthesized image URL under `example.com`; not a real resource.
    pub image: String,
    pub description: String,
    /// Retailer display name from the selected store-profile table.
    pub store: String,
    /// Static storefront address from the selected store-profile table.
    pub address: String,
    /// Either `"{x:.1} miles"` with x random in [0, 10), or a fixed
    /// per-store value when the location is recognized.
    pub distance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 4242,
            name: "Light Switch - Single Pole".to_string(),
            price: 2226,
            in_stock: true,
            image: "https://example.com/homedepot_light%20switch.jpg".to_string(),
            description: "Professional grade light switch for residential and commercial use"
                .to_string(),
            store: "Home Depot".to_string(),
            address: "3721 W Dublin Granville Rd, Columbus, OH 43235".to_string(),
            distance: "3.4 miles".to_string(),
        }
    }

    #[test]
    fn serializes_in_stock_as_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialization failed");
        assert_eq!(json["inStock"], serde_json::Value::Bool(true));
        assert!(
            json.get("in_stock").is_none(),
            "snake_case field must not appear in output"
        );
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.name, product.name);
        assert_eq!(decoded.price, product.price);
        assert_eq!(decoded.distance, product.distance);
    }
}
