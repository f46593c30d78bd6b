//! Simulation configuration and startup validation.
//!
//! The config registers item types and product categories by name. IDs are
//! handed out in registration order, stable and dense, never reused. It also
//! carries the global belt speed and fixed timestep. [`SimConfig::validate`]
//! runs at engine construction; a bad configuration is fatal there and never
//! recovered at runtime.

use crate::fixedmath::{Fixed64, Seconds};
use crate::id::{ItemTypeId, ProductType};
use std::collections::HashMap;

/// An item type definition in the registry.
#[derive(Debug, Clone)]
pub struct ItemTypeDef {
    pub name: String,
}

/// A product category definition.
#[derive(Debug, Clone)]
pub struct ProductDef {
    pub name: String,
}

/// Errors from configuration validation. All fatal at startup or at
/// edit-submission time; the tick pipeline never sees them.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("belt speed must be positive")]
    ZeroBeltSpeed,
    #[error("tick timestep must be positive")]
    ZeroTimestep,
    #[error("empty registry name")]
    EmptyName,
    #[error("duplicate item type name: {0}")]
    DuplicateItemName(String),
    #[error("duplicate product name: {0}")]
    DuplicateProductName(String),
    #[error("unknown item type id {0:?}")]
    UnknownItemType(ItemTypeId),
    #[error("unknown product {0:?}")]
    UnknownProduct(ProductType),
    #[error("{what} must be positive")]
    NonPositiveDuration { what: &'static str },
    #[error("converter output must differ from its input")]
    IdentityRecipe,
}

/// Global simulation settings plus the item/product registry.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Item travel speed, in cells per second. Shared by every segment.
    pub belt_speed: Fixed64,
    /// Seconds of simulated time per tick.
    pub tick_dt: Seconds,
    items: Vec<ItemTypeDef>,
    item_name_to_id: HashMap<String, ItemTypeId>,
    products: Vec<ProductDef>,
    product_name_to_id: HashMap<String, ProductType>,
}

impl SimConfig {
    pub fn new(belt_speed: Fixed64, tick_dt: Seconds) -> Self {
        Self {
            belt_speed,
            tick_dt,
            items: Vec::new(),
            item_name_to_id: HashMap::new(),
            products: Vec::new(),
            product_name_to_id: HashMap::new(),
        }
    }

    /// Register an item type. Returns its ID.
    pub fn register_item(&mut self, name: &str) -> ItemTypeId {
        let id = ItemTypeId(self.items.len() as u32);
        self.items.push(ItemTypeDef {
            name: name.to_string(),
        });
        self.item_name_to_id.insert(name.to_string(), id);
        id
    }

    /// Register a product category. Returns its ID.
    pub fn register_product(&mut self, name: &str) -> ProductType {
        let id = ProductType(self.products.len() as u32);
        self.products.push(ProductDef {
            name: name.to_string(),
        });
        self.product_name_to_id.insert(name.to_string(), id);
        id
    }

    /// Look up an item type by name.
    pub fn item_id(&self, name: &str) -> Option<ItemTypeId> {
        self.item_name_to_id.get(name).copied()
    }

    /// Look up a product by name.
    pub fn product_id(&self, name: &str) -> Option<ProductType> {
        self.product_name_to_id.get(name).copied()
    }

    /// Item type name for display.
    pub fn item_name(&self, id: ItemTypeId) -> Option<&str> {
        self.items.get(id.0 as usize).map(|d| d.name.as_str())
    }

    /// Product name for display.
    pub fn product_name(&self, id: ProductType) -> Option<&str> {
        self.products.get(id.0 as usize).map(|d| d.name.as_str())
    }

    /// Number of registered item types.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Fail unless the item type is registered.
    pub fn require_item(&self, id: ItemTypeId) -> Result<(), ConfigError> {
        if (id.0 as usize) < self.items.len() {
            Ok(())
        } else {
            Err(ConfigError::UnknownItemType(id))
        }
    }

    /// Fail unless the product is registered.
    pub fn require_product(&self, id: ProductType) -> Result<(), ConfigError> {
        if (id.0 as usize) < self.products.len() {
            Ok(())
        } else {
            Err(ConfigError::UnknownProduct(id))
        }
    }

    /// Validate global settings and registry integrity. Run once at
    /// engine construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.belt_speed <= Fixed64::ZERO {
            return Err(ConfigError::ZeroBeltSpeed);
        }
        if self.tick_dt <= Fixed64::ZERO {
            return Err(ConfigError::ZeroTimestep);
        }
        let mut seen = std::collections::HashSet::new();
        for def in &self.items {
            if def.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateItemName(def.name.clone()));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for def in &self.products {
            if def.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateProductName(def.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixedmath::f64_to_fixed64;

    fn base_config() -> SimConfig {
        SimConfig::new(f64_to_fixed64(2.0), f64_to_fixed64(0.05))
    }

    #[test]
    fn registration_assigns_dense_ids() {
        let mut config = base_config();
        let egg = config.register_item("egg");
        let chicken = config.register_item("chicken");
        assert_eq!(egg, ItemTypeId(0));
        assert_eq!(chicken, ItemTypeId(1));
        assert_eq!(config.item_id("chicken"), Some(chicken));
        assert_eq!(config.item_name(egg), Some("egg"));
        assert_eq!(config.item_count(), 2);
    }

    #[test]
    fn validate_accepts_sane_config() {
        let mut config = base_config();
        config.register_item("egg");
        config.register_product("eggs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_speed() {
        let config = SimConfig::new(Fixed64::ZERO, f64_to_fixed64(0.05));
        assert!(matches!(config.validate(), Err(ConfigError::ZeroBeltSpeed)));
    }

    #[test]
    fn validate_rejects_zero_timestep() {
        let config = SimConfig::new(f64_to_fixed64(1.0), Fixed64::ZERO);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimestep)));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let mut config = base_config();
        config.register_item("egg");
        config.register_item("egg");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateItemName(_))
        ));
    }

    #[test]
    fn require_item_bounds_check() {
        let mut config = base_config();
        let egg = config.register_item("egg");
        assert!(config.require_item(egg).is_ok());
        assert!(matches!(
            config.require_item(ItemTypeId(5)),
            Err(ConfigError::UnknownItemType(_))
        ));
    }
}
