pub mod constants;
pub mod drink;
pub mod errors;
pub mod factory;
pub mod order;
pub mod orders_reader;
pub mod registry;
pub mod warm_drink_machine;

use std::io;

use log::{error, info};
use simple_logger::SimpleLogger;

use constants::LOG_LEVEL;
use errors::MachineError;
use orders_reader::read_orders;
use registry::DrinkRegistry;
use warm_drink_machine::WarmDrinkMachine;

fn run(orders_path: Option<String>) -> Result<(), MachineError> {
    let registry = DrinkRegistry::with_default_drinks()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut machine = WarmDrinkMachine::new(registry, stdin.lock(), stdout.lock());
    match orders_path {
        Some(path) => {
            let orders = read_orders(path)?;
            let (served, skipped) = machine.serve_orders(orders)?;
            info!("Served {} orders, skipped {}", served, skipped);
            Ok(())
        }
        None => machine.serve(),
    }
}

fn main() {
    if SimpleLogger::new().with_level(LOG_LEVEL).env().init().is_err() {
        eprintln!("Could not initialize the logger");
    }

    let orders_path = std::env::args().nth(1);
    if let Err(err) = run(orders_path) {
        error!("The machine stopped: {:?}", err);
        std::process::exit(1);
    }
}
