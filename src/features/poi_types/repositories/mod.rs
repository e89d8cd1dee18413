mod poi_type_repository;

pub use poi_type_repository::PgPoiTypeRepository;
