use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::provinces::dtos::{CreateProvinceDto, ProvinceResponseDto, UpdateProvinceDto};
use crate::features::provinces::models::Province;
use crate::shared::status::EntityStatus;

/// Conversion rules for the province shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreateProvinceDto| Province {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdateProvinceDto| Province {
        id: dto.id,
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|province: &Province| ProvinceResponseDto {
        id: province.id,
        name: province.name.clone(),
        status: province.status,
        created_at: province.created_at,
        updated_at: province.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreateProvinceDto, Province>()?;
    mapper.require::<UpdateProvinceDto, Province>()?;
    mapper.require::<Province, ProvinceResponseDto>()?;
    Ok(())
}
