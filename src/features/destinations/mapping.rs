use chrono::Utc;
use uuid::Uuid;

use crate::core::mapper::{Mapper, MappingError};
use crate::features::destinations::dtos::{
    CoordinatesDto, CreateDestinationDto, DestinationResponseDto, UpdateDestinationDto,
};
use crate::features::destinations::models::Destination;
use crate::shared::geo::GeoPoint;
use crate::shared::status::EntityStatus;

/// Conversion rules for the destination shapes.
///
/// Create injects the identifier and the `Available` status and builds the
/// point from the nested longitude/latitude pair. Update never copies status
/// from the input; it is forced back to `Available`.
pub fn register_mappings(mapper: &mut Mapper) {
    mapper.register(|dto: &CreateDestinationDto| Destination {
        id: Uuid::new_v4(),
        name: dto.name.clone(),
        description: dto.description.clone(),
        province_id: dto.province_id,
        destination_type_id: dto.destination_type_id,
        location: GeoPoint::from_lon_lat(dto.location.longitude, dto.location.latitude),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|dto: &UpdateDestinationDto| Destination {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        province_id: dto.province_id,
        destination_type_id: dto.destination_type_id,
        location: GeoPoint::from_lon_lat(dto.location.longitude, dto.location.latitude),
        status: EntityStatus::Available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });

    mapper.register(|destination: &Destination| DestinationResponseDto {
        id: destination.id,
        name: destination.name.clone(),
        description: destination.description.clone(),
        province_id: destination.province_id,
        destination_type_id: destination.destination_type_id,
        location: CoordinatesDto {
            longitude: destination.location.longitude(),
            latitude: destination.location.latitude(),
        },
        status: destination.status,
        created_at: destination.created_at,
        updated_at: destination.updated_at,
    });
}

pub fn verify_mappings(mapper: &Mapper) -> Result<(), MappingError> {
    mapper.require::<CreateDestinationDto, Destination>()?;
    mapper.require::<UpdateDestinationDto, Destination>()?;
    mapper.require::<Destination, DestinationResponseDto>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> Mapper {
        let mut mapper = Mapper::new();
        register_mappings(&mut mapper);
        mapper
    }

    fn create_dto() -> CreateDestinationDto {
        CreateDestinationDto {
            name: "Grand Palace".to_string(),
            description: Some("Royal palace complex".to_string()),
            province_id: Uuid::new_v4(),
            destination_type_id: Uuid::new_v4(),
            location: CoordinatesDto {
                longitude: 100.5,
                latitude: 13.7,
            },
        }
    }

    #[test]
    fn create_builds_point_with_longitude_as_x_and_latitude_as_y() {
        let destination: Destination = mapper().transform(&create_dto()).unwrap();
        assert_eq!(destination.location.x, 100.5);
        assert_eq!(destination.location.y, 13.7);
    }

    #[test]
    fn create_injects_identifier_and_available_status() {
        let mapper = mapper();
        let dto = create_dto();
        let first: Destination = mapper.transform(&dto).unwrap();
        let second: Destination = mapper.transform(&dto).unwrap();

        assert_eq!(first.status, EntityStatus::Available);
        // Fresh identifier per conversion, not derived from the input
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn update_forces_available_status_and_keeps_embedded_id() {
        let id = Uuid::new_v4();
        let dto = UpdateDestinationDto {
            id,
            name: "Grand Palace".to_string(),
            description: None,
            province_id: Uuid::new_v4(),
            destination_type_id: Uuid::new_v4(),
            location: CoordinatesDto {
                longitude: 98.3,
                latitude: 7.9,
            },
        };

        let destination: Destination = mapper().transform(&dto).unwrap();
        assert_eq!(destination.id, id);
        assert_eq!(destination.status, EntityStatus::Available);
        assert_eq!(destination.location.x, 98.3);
        assert_eq!(destination.location.y, 7.9);
    }

    #[test]
    fn response_round_trips_visible_fields() {
        let mapper = mapper();
        let destination: Destination = mapper.transform(&create_dto()).unwrap();
        let response: DestinationResponseDto = mapper.transform(&destination).unwrap();

        assert_eq!(response.id, destination.id);
        assert_eq!(response.name, destination.name);
        assert_eq!(response.location.longitude, 100.5);
        assert_eq!(response.location.latitude, 13.7);
        assert_eq!(response.status, EntityStatus::Available);
    }

    #[test]
    fn verify_passes_on_fully_registered_mapper() {
        assert!(verify_mappings(&mapper()).is_ok());
        assert!(verify_mappings(&Mapper::new()).is_err());
    }
}
