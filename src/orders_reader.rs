//! Lectura de pedidos desde un archivo JSON
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, error, info};
use serde::Deserialize;

use crate::{errors::MachineError, order::Order};

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<Order>,
}

fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>, MachineError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

/// Lee los pedidos del archivo en `path`, respetando el orden en el que aparecen
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, MachineError> {
    let file = File::open(path.as_ref()).map_err(|_| {
        error!("[READER] Could not open {}", path.as_ref().display());
        MachineError::FileReaderError
    })?;
    let orders = parse_orders(BufReader::new(file))?;
    for order in &orders {
        debug!("[READER] Read order of {} {}", order.quantity, order.drink);
    }
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}
