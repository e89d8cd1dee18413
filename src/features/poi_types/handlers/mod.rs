pub mod poi_type_handler;

pub use poi_type_handler::*;
