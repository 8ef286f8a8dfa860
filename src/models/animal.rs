//! Animal record
//!
//! The single domain type held by the registry and exchanged as JSON.

use serde::{Deserialize, Serialize};

/// A registered animal.
///
/// Serializes as `{"id":int,"name":string,"class":string,"legs":int}`.
/// Fields missing from a payload decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animal {
    /// Caller-supplied identifier, unique within the store
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form category label (e.g. "Mammal")
    pub class: String,
    /// Number of legs
    pub legs: u32,
}

impl Animal {
    /// Creates a new Animal
    pub fn new(id: i64, name: impl Into<String>, class: impl Into<String>, legs: u32) -> Self {
        Self {
            id,
            name: name.into(),
            class: class.into(),
            legs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_serialize_shape() {
        let fox = Animal::new(1, "Fox", "Mammal", 4);
        let json = serde_json::to_value(&fox).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Fox", "class": "Mammal", "legs": 4})
        );
    }

    #[test]
    fn test_animal_deserialize() {
        let json = r#"{"id": 3, "name": "Heron", "class": "Bird", "legs": 2}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal, Animal::new(3, "Heron", "Bird", 2));
    }

    #[test]
    fn test_animal_missing_fields_default_to_zero() {
        let json = r#"{"id": 3, "name": "Heron"}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal, Animal::new(3, "Heron", "", 0));

        let empty: Animal = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Animal::default());
    }

    #[test]
    fn test_animal_negative_id() {
        let json = r#"{"id": -4, "name": "Eel", "class": "Fish", "legs": 0}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.id, -4);
    }

    #[test]
    fn test_animal_negative_legs_rejected() {
        let json = r#"{"id": 3, "name": "Heron", "class": "Bird", "legs": -2}"#;
        assert!(serde_json::from_str::<Animal>(json).is_err());
    }
}
