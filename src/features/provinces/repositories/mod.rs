mod province_repository;

pub use province_repository::PgProvinceRepository;
