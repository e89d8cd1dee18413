mod poi_dto;

pub use poi_dto::{CreatePoiDto, PoiResponseDto, UpdatePoiDto};
