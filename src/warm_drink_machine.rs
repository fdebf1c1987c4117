//! Maquina de bebidas calientes. Muestra el menu, valida la eleccion y prepara la bebida.
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::{
    constants::{INVALID_INPUT_MESSAGE, MENU_HEADER, QUANTITY_PROMPT, SELECT_PROMPT},
    drink::Drink,
    errors::MachineError,
    order::Order,
    registry::DrinkRegistry,
};

/// Representa a la maquina. Lee las elecciones de `input` y escribe menu,
/// pedidos y mensajes de preparacion en `output`.
pub struct WarmDrinkMachine<R: BufRead, W: Write> {
    registry: DrinkRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> WarmDrinkMachine<R, W> {
    pub fn new(registry: DrinkRegistry, input: R, output: W) -> WarmDrinkMachine<R, W> {
        WarmDrinkMachine {
            registry,
            input,
            output,
        }
    }

    /// Pide una bebida y una cantidad hasta que ambas sean validas.
    /// Cualquier entrada invalida reinicia la eleccion desde el menu.
    /// Si se termina la entrada devuelve `InputExhausted`.
    pub fn make_drink(&mut self) -> Result<Drink, MachineError> {
        loop {
            self.show_menu()?;
            if let Some(index) = self.read_index()? {
                write!(self.output, "{}", QUANTITY_PROMPT)
                    .map_err(|_| MachineError::WriteError)?;
                self.output.flush().map_err(|_| MachineError::WriteError)?;
                if let Some(quantity) = self.read_quantity()? {
                    debug!("[MACHINE] Preparing {} of option {}", quantity, index);
                    let factory = self.registry.get(index)?;
                    return factory.prepare(quantity, &mut self.output);
                }
            }
            debug!("[MACHINE] Invalid input, restarting the selection");
            writeln!(self.output, "{}", INVALID_INPUT_MESSAGE)
                .map_err(|_| MachineError::WriteError)?;
        }
    }

    /// Prepara la bebida elegida y la sirve
    pub fn serve(&mut self) -> Result<(), MachineError> {
        let drink = self.make_drink()?;
        drink.consume(&mut self.output)
    }

    /// Prepara y sirve los pedidos en orden. Devuelve (servidos, salteados).
    pub fn serve_orders(&mut self, orders: Vec<Order>) -> Result<(usize, usize), MachineError> {
        let mut served = 0;
        let mut skipped = 0;
        for order in orders {
            if order.quantity == 0 {
                warn!("[MACHINE] Skipped order of {}, quantity is zero", order.drink);
                skipped += 1;
                continue;
            }
            let factory = match self.registry.get_by_kind(order.drink) {
                Some(factory) => *factory,
                None => {
                    warn!("[MACHINE] Skipped order of {}, not on the menu", order.drink);
                    skipped += 1;
                    continue;
                }
            };
            let drink = factory.prepare(order.quantity, &mut self.output)?;
            drink.consume(&mut self.output)?;
            served += 1;
        }
        info!("[MACHINE] Served {} orders, skipped {}", served, skipped);
        Ok((served, skipped))
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_menu(&mut self) -> Result<(), MachineError> {
        writeln!(self.output, "{}", MENU_HEADER)
            .map_err(|_| MachineError::WriteError)?;
        for (index, entry) in self.registry.list().iter().enumerate() {
            writeln!(self.output, "{}: {}", index, entry.name)
                .map_err(|_| MachineError::WriteError)?;
        }
        writeln!(self.output, "{}", SELECT_PROMPT)
            .map_err(|_| MachineError::WriteError)?;
        Ok(())
    }

    fn read_index(&mut self) -> Result<Option<usize>, MachineError> {
        let line = self.read_line()?;
        let index = line
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < self.registry.len());
        Ok(index)
    }

    fn read_quantity(&mut self) -> Result<Option<u32>, MachineError> {
        let line = self.read_line()?;
        let quantity = line
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .and_then(|quantity| u32::try_from(quantity).ok());
        Ok(quantity)
    }

    /// Lee una linea cruda. Los bytes que no son UTF-8 se reemplazan,
    /// asi la linea se rechaza como cualquier otro texto invalido.
    fn read_line(&mut self) -> Result<String, MachineError> {
        let mut buffer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buffer)
            .map_err(|_| MachineError::ReadError)?;
        if read == 0 {
            warn!("[MACHINE] No more input to read");
            return Err(MachineError::InputExhausted);
        }
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
