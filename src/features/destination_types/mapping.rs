use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::destination_types::dtos::{
    CreateDestinationTypeDto, DestinationTypeResponseDto, UpdateDestinationTypeDto,
};
use crate::features::destination_types::models::DestinationType;
use crate::shared::status::EntityStatus;

/// Conversion rules for the destination type shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreateDestinationTypeDto| DestinationType {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdateDestinationTypeDto| DestinationType {
        id: dto.id,
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|destination_type: &DestinationType| DestinationTypeResponseDto {
        id: destination_type.id,
        name: destination_type.name.clone(),
        status: destination_type.status,
        created_at: destination_type.created_at,
        updated_at: destination_type.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreateDestinationTypeDto, DestinationType>()?;
    mapper.require::<UpdateDestinationTypeDto, DestinationType>()?;
    mapper.require::<DestinationType, DestinationTypeResponseDto>()?;
    Ok(())
}
