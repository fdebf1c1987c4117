//! Fabricas que preparan las bebidas
use std::io::Write;

use crate::{
    drink::{Drink, DrinkKind},
    errors::MachineError,
};

/// Fabrica de una bebida. Hay una por cada tipo de bebida.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrinkFactory {
    HotWater,
    Coffee,
    Cappuccino,
    HotChocolate,
}

impl DrinkFactory {
    pub fn for_kind(kind: DrinkKind) -> DrinkFactory {
        match kind {
            DrinkKind::Water => DrinkFactory::HotWater,
            DrinkKind::Coffee => DrinkFactory::Coffee,
            DrinkKind::Cappuccino => DrinkFactory::Cappuccino,
            DrinkKind::HotChocolate => DrinkFactory::HotChocolate,
        }
    }

    /// Prepara `quantity` de la bebida, imprime el paso de preparacion y la devuelve.
    /// La cantidad ya tiene que venir validada (mayor a cero).
    pub fn prepare<W: Write>(&self, quantity: u32, out: &mut W) -> Result<Drink, MachineError> {
        let drink = match self {
            DrinkFactory::HotWater => {
                writeln!(out, "Pour {} ml hot water in your cup", quantity)
                    .map_err(|_| MachineError::WriteError)?;
                Drink::Water
            }
            DrinkFactory::Coffee => {
                writeln!(out, "Brew {} ml of coffee", quantity)
                    .map_err(|_| MachineError::WriteError)?;
                Drink::Coffee
            }
            DrinkFactory::Cappuccino => {
                writeln!(out, "Brew {} ml of espresso and milk", quantity)
                    .map_err(|_| MachineError::WriteError)?;
                Drink::Cappuccino
            }
            DrinkFactory::HotChocolate => {
                writeln!(
                    out,
                    "Mix {} grams of hot chocolate powder with hot milk",
                    quantity
                )
                .map_err(|_| MachineError::WriteError)?;
                Drink::HotChocolate
            }
        };
        Ok(drink)
    }
}
