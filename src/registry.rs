//! Resource-to-model registry.
//!
//! Resolution from a resource name to a concrete model type goes through an
//! explicit table built at client construction, never through runtime name
//! manipulation. Resources without an entry resolve records to `None`; that
//! is deliberate, so unknown resources stay usable for raw pagination even
//! though their records cannot be typed.

use std::collections::HashMap;

use crate::error::Error;
use crate::model::Card;
use crate::model::Set;

/// A resolved domain record, tagged by its model type.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyModel {
    /// A record from the `cards` resource.
    Card(Box<Card>),
    /// A record from the `sets` resource.
    Set(Box<Set>),
}

impl AnyModel {
    /// Returns the card if this is a card record.
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            AnyModel::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Consumes the value and returns the card if this is a card record.
    pub fn into_card(self) -> Option<Card> {
        match self {
            AnyModel::Card(card) => Some(*card),
            _ => None,
        }
    }

    /// Returns the set if this is a set record.
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            AnyModel::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Consumes the value and returns the set if this is a set record.
    pub fn into_set(self) -> Option<Set> {
        match self {
            AnyModel::Set(set) => Some(*set),
            _ => None,
        }
    }
}

/// Decodes one raw record into a tagged model.
///
/// Returns a parse error when the record does not match the model's shape;
/// soft-failing is the registry's job, not the decoder's.
pub type DecodeFn = fn(serde_json::Value) -> Result<AnyModel, Error>;

/// Maps resource names to record decoders.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    decoders: HashMap<String, DecodeFn>,
}

impl ModelRegistry {
    /// Creates a registry with the service's standard resources registered:
    /// `cards` and `sets`.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register("cards", decode_card);
        registry.register("sets", decode_set);
        registry
    }

    /// Creates a registry with no resources registered.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers a decoder for a resource, replacing any existing one.
    pub fn register(&mut self, resource: impl Into<String>, decode: DecodeFn) {
        self.decoders.insert(resource.into(), decode);
    }

    /// Returns `true` if the resource has a registered decoder.
    pub fn contains(&self, resource: &str) -> bool {
        self.decoders.contains_key(resource)
    }

    /// Decodes one raw record from `resource`.
    ///
    /// An unregistered resource yields `Ok(None)`. A registered resource
    /// whose record does not match the model shape is a parse error.
    pub fn decode(&self, resource: &str, raw: serde_json::Value) -> Result<Option<AnyModel>, Error> {
        match self.decoders.get(resource) {
            Some(decode) => decode(raw).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn decode_card(raw: serde_json::Value) -> Result<AnyModel, Error> {
    match serde_json::from_value::<Card>(raw) {
        Ok(card) => Ok(AnyModel::Card(Box::new(card))),
        Err(err) => Err(Error::parse(format!("invalid card record: {err}"))),
    }
}

fn decode_set(raw: serde_json::Value) -> Result<AnyModel, Error> {
    match serde_json::from_value::<Set>(raw) {
        Ok(set) => Ok(AnyModel::Set(Box::new(set))),
        Err(err) => Err(Error::parse(format!("invalid set record: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::AnyModel;
    use super::ModelRegistry;
    use crate::error::Error;

    #[test]
    fn test_standard_registry_decodes_cards_and_sets() {
        let registry = ModelRegistry::standard();

        let card = registry
            .decode("cards", json!({"id": "xy7-54", "name": "Gardevoir"}))
            .unwrap()
            .unwrap();
        assert_eq!(card.as_card().unwrap().name, "Gardevoir");
        assert!(card.as_set().is_none());

        let set = registry
            .decode("sets", json!({"id": "xy7", "name": "Ancient Origins"}))
            .unwrap()
            .unwrap();
        assert_eq!(set.into_set().unwrap().id, "xy7");
    }

    #[test]
    fn test_unregistered_resource_is_absent_not_error() {
        let registry = ModelRegistry::standard();
        let resolved = registry
            .decode("boosters", json!({"id": "b1", "name": "whatever"}))
            .unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_registered_resource_with_bad_shape_fails() {
        let registry = ModelRegistry::standard();
        let result = registry.decode("cards", json!({"name": "missing the id"}));
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_custom_registration() {
        fn decode_as_set(raw: serde_json::Value) -> Result<AnyModel, Error> {
            match serde_json::from_value(raw) {
                Ok(set) => Ok(AnyModel::Set(Box::new(set))),
                Err(err) => Err(Error::parse(err.to_string())),
            }
        }

        let mut registry = ModelRegistry::empty();
        assert!(!registry.contains("expansions"));

        registry.register("expansions", decode_as_set);
        assert!(registry.contains("expansions"));

        let resolved = registry
            .decode("expansions", json!({"id": "x", "name": "X"}))
            .unwrap()
            .unwrap();
        assert!(resolved.as_set().is_some());
    }
}
