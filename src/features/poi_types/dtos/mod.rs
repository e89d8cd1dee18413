mod poi_type_dto;

pub use poi_type_dto::{CreatePoiTypeDto, PoiTypeResponseDto, UpdatePoiTypeDto};
