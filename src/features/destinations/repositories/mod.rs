mod destination_repository;

pub use destination_repository::PgDestinationRepository;
