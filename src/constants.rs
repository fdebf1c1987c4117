//! Parametros de configuracion de la maquina de bebidas calientes

use log::LevelFilter;

/// Encabezado del menu que se muestra antes de listar las bebidas
pub const MENU_HEADER: &str = "This is what we serve today:";

/// Pedido para elegir una bebida del menu
pub const SELECT_PROMPT: &str = "Select a number to continue:";

/// Pedido para ingresar la cantidad. Se imprime sin salto de linea.
pub const QUANTITY_PROMPT: &str = "How much: ";

/// Mensaje unico para cualquier entrada invalida
pub const INVALID_INPUT_MESSAGE: &str = "Something went wrong with your input, try again.";

/// Nivel de log por defecto. Se puede cambiar con la variable `RUST_LOG`.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Warn;
