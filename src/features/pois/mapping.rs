use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::pois::dtos::{CreatePoiDto, PoiResponseDto, UpdatePoiDto};
use crate::features::pois::models::Poi;
use crate::shared::status::EntityStatus;

/// Conversion rules for the POI shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreatePoiDto| Poi {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        description: dto.description.clone(),
        destination_id: dto.destination_id,
        poi_type_id: dto.poi_type_id,
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdatePoiDto| Poi {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        destination_id: dto.destination_id,
        poi_type_id: dto.poi_type_id,
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|poi: &Poi| PoiResponseDto {
        id: poi.id,
        name: poi.name.clone(),
        description: poi.description.clone(),
        destination_id: poi.destination_id,
        poi_type_id: poi.poi_type_id,
        status: poi.status,
        created_at: poi.created_at,
        updated_at: poi.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreatePoiDto, Poi>()?;
    mapper.require::<UpdatePoiDto, Poi>()?;
    mapper.require::<Poi, PoiResponseDto>()?;
    Ok(())
}
