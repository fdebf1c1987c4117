//! Bebidas que sirve la maquina
use std::{fmt, fmt::Display, io::Write};

use serde::Deserialize;

use crate::errors::MachineError;

/// Tipos de bebida disponibles. El conjunto es fijo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum DrinkKind {
    Water,
    Coffee,
    Cappuccino,
    HotChocolate,
}

impl DrinkKind {
    /// Todos los tipos, en el orden en que se registran en el menu
    pub const ALL: [DrinkKind; 4] = [
        DrinkKind::Water,
        DrinkKind::Coffee,
        DrinkKind::Cappuccino,
        DrinkKind::HotChocolate,
    ];
}

impl Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DrinkKind::Water => "Water",
                DrinkKind::Coffee => "Coffee",
                DrinkKind::Cappuccino => "Cappuccino",
                DrinkKind::HotChocolate => "HotChocolate",
            }
        )
    }
}

/// Bebida ya preparada. Solo la crea la fabrica correspondiente.
#[derive(Debug, PartialEq, Eq)]
pub enum Drink {
    Water,
    Coffee,
    Cappuccino,
    HotChocolate,
}

impl Drink {
    pub fn kind(&self) -> DrinkKind {
        match self {
            Drink::Water => DrinkKind::Water,
            Drink::Coffee => DrinkKind::Coffee,
            Drink::Cappuccino => DrinkKind::Cappuccino,
            Drink::HotChocolate => DrinkKind::HotChocolate,
        }
    }

    /// Sirve la bebida, imprimiendo su mensaje en `out`
    pub fn consume<W: Write>(&self, out: &mut W) -> Result<(), MachineError> {
        let message = match self {
            Drink::Water => "Warm water is served.",
            Drink::Coffee => "Coffee is served.",
            Drink::Cappuccino => "Cappuccino is served.",
            Drink::HotChocolate => "Hot chocolate is served.",
        };
        writeln!(out, "{}", message)
            .map_err(|_| MachineError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(drink: Drink) -> String {
        let mut out = Vec::new();
        drink.consume(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_serve_each_drink_with_its_message() {
        assert_eq!("Warm water is served.\n", consumed(Drink::Water));
        assert_eq!("Coffee is served.\n", consumed(Drink::Coffee));
        assert_eq!("Cappuccino is served.\n", consumed(Drink::Cappuccino));
        assert_eq!("Hot chocolate is served.\n", consumed(Drink::HotChocolate));
    }

    #[test]
    fn should_reprint_the_message_when_consumed_twice() {
        let drink = Drink::Coffee;
        let mut out = Vec::new();
        drink.consume(&mut out).unwrap();
        drink.consume(&mut out).unwrap();
        assert_eq!(
            "Coffee is served.\nCoffee is served.\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn should_fail_with_a_write_error_when_the_output_is_closed() {
        struct ClosedOutput;

        impl Write for ClosedOutput {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = Drink::Water.consume(&mut ClosedOutput);
        assert!(matches!(result, Err(MachineError::WriteError)));
    }

    #[test]
    fn should_display_the_kind_by_its_name() {
        assert_eq!("HotChocolate", DrinkKind::HotChocolate.to_string());
        assert_eq!("Water", DrinkKind::Water.to_string());
    }

    #[test]
    fn should_match_each_drink_with_its_kind() {
        assert_eq!(DrinkKind::Cappuccino, Drink::Cappuccino.kind());
        assert_eq!(DrinkKind::Water, Drink::Water.kind());
    }
}
