pub mod destination_type_handler;

pub use destination_type_handler::*;
