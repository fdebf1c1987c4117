use serde::Deserialize;

use crate::drink::DrinkKind;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub drink: DrinkKind,
    pub quantity: u32,
}

impl Order {
    pub fn new(drink: DrinkKind, quantity: u32) -> Order {
        Order { drink, quantity }
    }
}
