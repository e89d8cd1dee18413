mod destination_type;

pub use destination_type::DestinationType;
