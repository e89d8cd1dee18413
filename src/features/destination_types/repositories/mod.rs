mod destination_type_repository;

pub use destination_type_repository::PgDestinationTypeRepository;
