use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::shared::status::EntityStatus;

/// Conversion rules for the user shapes.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreateUserDto| User {
        id: Uuid::new_v4(),
        email: dto.email.clone(),
        password: dto.password.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        phone: dto.phone.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    // Email is immutable after registration; the update statement never
    // writes it, so the placeholder here is never persisted.
    mapper.register(|dto: &UpdateUserDto| User {
        id: dto.id,
        email: String::new(),
        password: dto.password.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        phone: dto.phone.clone(),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|user: &User| UserResponseDto {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        phone: user.phone.clone(),
        status: user.status,
        created_at: user.created_at,
        updated_at: user.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreateUserDto, User>()?;
    mapper.require::<UpdateUserDto, User>()?;
    mapper.require::<User, UserResponseDto>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn mapper() -> Mapper {
        let mut mapper = Mapper::new();
        register_mappings(&mut mapper);
        mapper
    }

    #[test]
    fn create_injects_identifier_and_available_status() {
        let dto = CreateUserDto {
            email: SafeEmail().fake(),
            password: "correct horse".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: None,
        };

        let user: User = mapper().transform(&dto).unwrap();
        assert_eq!(user.status, EntityStatus::Available);
        assert_eq!(user.email, dto.email);
        assert!(!user.id.is_nil());
    }

    #[test]
    fn update_forces_available_status() {
        let dto = UpdateUserDto {
            id: Uuid::new_v4(),
            password: "new password".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: Some("123456".to_string()),
        };

        let user: User = mapper().transform(&dto).unwrap();
        assert_eq!(user.id, dto.id);
        assert_eq!(user.status, EntityStatus::Available);
    }
}
