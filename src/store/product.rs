//! Product entity and its wire projection.

use serde::{Deserialize, Serialize};

/// A single inventory row.
///
/// The `Serialize` derive doubles as the wire projection: exactly the
/// keys `id, name, description, price, qty`, in this order, and nothing
/// reflected from storage internals. The same shape is used in the
/// snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// System-assigned primary key, immutable once created
    pub id: u64,
    /// Unique across all products (documented bound: 100 chars, advisory)
    pub name: String,
    /// Documented bound: 200 chars, advisory
    pub description: String,
    /// No sign constraint
    pub price: f64,
    /// No sign constraint
    pub qty: i64,
}

impl Product {
    /// Assemble a row from validated input and a store-assigned id.
    pub fn from_input(id: u64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            qty: input.qty,
        }
    }
}

/// The mutable fields of a product, already validated.
///
/// Produced by the validation layer; the store assigns `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            qty: 3,
        }
    }

    #[test]
    fn test_from_input_carries_all_fields() {
        let product = Product::from_input(1, sample_input());
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.qty, 3);
    }

    #[test]
    fn test_projection_has_exactly_five_keys() {
        let product = Product::from_input(1, sample_input());
        let json = serde_json::to_value(&product).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["id", "name", "description", "price", "qty"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_row_round_trips_through_json() {
        let product = Product::from_input(7, sample_input());
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
