use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::poi_types::dtos::{CreatePoiTypeDto, PoiTypeResponseDto, UpdatePoiTypeDto};
use crate::features::poi_types::models::PoiType;
use crate::shared::status::EntityStatus;

/// Conversion rules for the POI type shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreatePoiTypeDto| PoiType {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdatePoiTypeDto| PoiType {
        id: dto.id,
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|poi_type: &PoiType| PoiTypeResponseDto {
        id: poi_type.id,
        name: poi_type.name.clone(),
        status: poi_type.status,
        created_at: poi_type.created_at,
        updated_at: poi_type.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreatePoiTypeDto, PoiType>()?;
    mapper.require::<UpdatePoiTypeDto, PoiType>()?;
    mapper.require::<PoiType, PoiTypeResponseDto>()?;
    Ok(())
}
