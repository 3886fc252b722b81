//! Card registration.
//!
//! The host discovers available card types through an explicit registry
//! populated once at startup, rather than a global mutable namespace.

use crate::error::{CardError, Result};

/// Tag the viewer component is registered under.
pub const CARD_TYPE: &str = "plantrun-card";

/// Tag the editor component is registered under.
pub const EDITOR_TYPE: &str = "plantrun-card-editor";

/// Descriptor placed into the host-discoverable registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    pub card_type: String,
    pub name: String,
    pub preview: bool,
    pub description: String,
}

impl CardDescriptor {
    /// The PlantRun card's own registration descriptor.
    pub fn plantrun() -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            name: "PlantRun Tracker Card".to_string(),
            preview: true,
            description: "A premium card to display and interact with your active PlantRun."
                .to_string(),
        }
    }
}

/// Registry of card descriptors, keyed by type tag.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<CardDescriptor>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Registering the same type tag twice keeps the
    /// first descriptor.
    pub fn register(&mut self, descriptor: CardDescriptor) {
        if self.get(&descriptor.card_type).is_none() {
            self.cards.push(descriptor);
        }
    }

    pub fn get(&self, card_type: &str) -> Option<&CardDescriptor> {
        self.cards.iter().find(|c| c.card_type == card_type)
    }

    /// Look up a descriptor, erroring on unknown type tags.
    pub fn require(&self, card_type: &str) -> Result<&CardDescriptor> {
        self.get(card_type)
            .ok_or_else(|| CardError::UnknownCardType(card_type.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
        self.cards.iter()
    }
}

/// Build the registry with the PlantRun card registered, the way a host
/// embedding this crate would at process initialization.
pub fn default_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register(CardDescriptor::plantrun());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contains_plantrun_card() {
        let registry = default_registry();
        let descriptor = registry.require("plantrun-card").unwrap();
        assert_eq!(descriptor.name, "PlantRun Tracker Card");
        assert!(descriptor.preview);
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut registry = default_registry();
        let mut replacement = CardDescriptor::plantrun();
        replacement.name = "Other".to_string();
        registry.register(replacement);

        assert_eq!(registry.iter().count(), 1);
        assert_eq!(
            registry.get("plantrun-card").unwrap().name,
            "PlantRun Tracker Card"
        );
    }

    #[test]
    fn test_require_unknown_type_errors() {
        let registry = default_registry();
        assert!(matches!(
            registry.require("nope"),
            Err(CardError::UnknownCardType(_))
        ));
    }
}
