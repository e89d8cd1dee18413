use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::hashtags::dtos::{CreateHashtagDto, HashtagResponseDto, UpdateHashtagDto};
use crate::features::hashtags::models::Hashtag;
use crate::shared::status::EntityStatus;

/// Conversion rules for the hashtag shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreateHashtagDto| Hashtag {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdateHashtagDto| Hashtag {
        id: dto.id,
        name: dto.name.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|hashtag: &Hashtag| HashtagResponseDto {
        id: hashtag.id,
        name: hashtag.name.clone(),
        status: hashtag.status,
        created_at: hashtag.created_at,
        updated_at: hashtag.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreateHashtagDto, Hashtag>()?;
    mapper.require::<UpdateHashtagDto, Hashtag>()?;
    mapper.require::<Hashtag, HashtagResponseDto>()?;
    Ok(())
}
