//! Registro ordenado de las bebidas que ofrece la maquina
use log::{debug, error};

use crate::{drink::DrinkKind, errors::MachineError, factory::DrinkFactory};

/// Una entrada del menu: el tipo de bebida, el nombre que se muestra y su fabrica
#[derive(Debug)]
pub struct RegistryEntry {
    pub kind: DrinkKind,
    pub name: String,
    pub factory: DrinkFactory,
}

/// Registro de bebidas. El orden de registro define el indice en el menu.
/// Se arma una sola vez al iniciar y despues solo se lee.
pub struct DrinkRegistry {
    entries: Vec<RegistryEntry>,
}

impl DrinkRegistry {
    pub fn new() -> DrinkRegistry {
        DrinkRegistry {
            entries: Vec::new(),
        }
    }

    /// Registro con las cuatro bebidas del menu, en su orden habitual
    pub fn with_default_drinks() -> Result<DrinkRegistry, MachineError> {
        let mut registry = DrinkRegistry::new();
        for kind in DrinkKind::ALL {
            registry.register(kind, DrinkFactory::for_kind(kind))?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, kind: DrinkKind, factory: DrinkFactory) -> Result<(), MachineError> {
        if self.get_by_kind(kind).is_some() {
            error!("[REGISTRY] {} is already registered", kind);
            return Err(MachineError::DuplicateDrink);
        }
        debug!("[REGISTRY] Registered {} at {}", kind, self.entries.len());
        self.entries.push(RegistryEntry {
            kind,
            name: kind.to_string(),
            factory,
        });
        Ok(())
    }

    pub fn list(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Result<&DrinkFactory, MachineError> {
        self.entries
            .get(index)
            .map(|entry| &entry.factory)
            .ok_or(MachineError::IndexOutOfRange)
    }

    pub fn get_by_kind(&self, kind: DrinkKind) -> Option<&DrinkFactory> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.factory)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_an_empty_registry() {
        let registry = DrinkRegistry::new();
        assert_eq!(true, registry.is_empty());
        assert_eq!(0, registry.len());
    }

    #[test]
    fn should_keep_the_registration_order() {
        let registry = DrinkRegistry::with_default_drinks().unwrap();
        let names: Vec<&str> = registry
            .list()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(vec!["Water", "Coffee", "Cappuccino", "HotChocolate"], names);
        assert_eq!(DrinkFactory::HotWater, *registry.get(0).unwrap());
        assert_eq!(DrinkFactory::Coffee, *registry.get(1).unwrap());
        assert_eq!(DrinkFactory::Cappuccino, *registry.get(2).unwrap());
        assert_eq!(DrinkFactory::HotChocolate, *registry.get(3).unwrap());
    }

    #[test]
    fn should_fail_to_get_an_index_out_of_range() {
        let registry = DrinkRegistry::with_default_drinks().unwrap();
        assert!(matches!(registry.get(4), Err(MachineError::IndexOutOfRange)));
    }

    #[test]
    fn should_find_a_factory_by_kind() {
        let mut registry = DrinkRegistry::new();
        registry
            .register(DrinkKind::Cappuccino, DrinkFactory::Cappuccino)
            .unwrap();
        assert_eq!(
            Some(&DrinkFactory::Cappuccino),
            registry.get_by_kind(DrinkKind::Cappuccino)
        );
        assert_eq!(None, registry.get_by_kind(DrinkKind::Water));
    }

    #[test]
    fn should_reject_a_duplicated_kind() {
        let mut registry = DrinkRegistry::new();
        registry.register(DrinkKind::Coffee, DrinkFactory::Coffee).unwrap();
        let result = registry.register(DrinkKind::Coffee, DrinkFactory::Coffee);
        assert!(matches!(result, Err(MachineError::DuplicateDrink)));
        assert_eq!(1, registry.len());
    }
}
