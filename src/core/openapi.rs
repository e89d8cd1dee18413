use utoipa::{Modify, OpenApi};

use crate::core::outcome::CreatedResponse;
use crate::features::destination_types::{
    dtos as destination_types_dtos, handlers as destination_types_handlers,
};
use crate::features::destinations::{dtos as destinations_dtos, handlers as destinations_handlers};
use crate::features::hashtags::{dtos as hashtags_dtos, handlers as hashtags_handlers};
use crate::features::poi_types::{dtos as poi_types_dtos, handlers as poi_types_handlers};
use crate::features::pois::{dtos as pois_dtos, handlers as pois_handlers};
use crate::features::provinces::{dtos as provinces_dtos, handlers as provinces_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::status::EntityStatus;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::deactivate_user,
        // Destinations
        destinations_handlers::list_destinations,
        destinations_handlers::get_destination,
        destinations_handlers::create_destination,
        destinations_handlers::update_destination,
        destinations_handlers::deactivate_destination,
        // Hashtags
        hashtags_handlers::list_hashtags,
        hashtags_handlers::get_hashtag,
        hashtags_handlers::create_hashtag,
        hashtags_handlers::update_hashtag,
        hashtags_handlers::deactivate_hashtag,
        // Provinces
        provinces_handlers::list_provinces,
        provinces_handlers::get_province,
        provinces_handlers::create_province,
        provinces_handlers::update_province,
        provinces_handlers::deactivate_province,
        // Destination types
        destination_types_handlers::list_destination_types,
        destination_types_handlers::get_destination_type,
        destination_types_handlers::create_destination_type,
        destination_types_handlers::update_destination_type,
        destination_types_handlers::deactivate_destination_type,
        // POI types
        poi_types_handlers::list_poi_types,
        poi_types_handlers::get_poi_type,
        poi_types_handlers::create_poi_type,
        poi_types_handlers::update_poi_type,
        poi_types_handlers::deactivate_poi_type,
        // POIs
        pois_handlers::list_pois,
        pois_handlers::get_poi,
        pois_handlers::create_poi,
        pois_handlers::update_poi,
        pois_handlers::deactivate_poi,
    ),
    components(schemas(
        // `ApiResponse<()>` cannot be registered: `()` has no ToSchema impl
        // and utoipa-gen panics on path-less generic arguments.
        // ApiResponse<()>,
        Meta,
        EntityStatus,
        CreatedResponse,
        users_dtos::CreateUserDto,
        users_dtos::UpdateUserDto,
        users_dtos::UserResponseDto,
        destinations_dtos::CoordinatesDto,
        destinations_dtos::CreateDestinationDto,
        destinations_dtos::UpdateDestinationDto,
        destinations_dtos::DestinationResponseDto,
        hashtags_dtos::CreateHashtagDto,
        hashtags_dtos::UpdateHashtagDto,
        hashtags_dtos::HashtagResponseDto,
        provinces_dtos::CreateProvinceDto,
        provinces_dtos::UpdateProvinceDto,
        provinces_dtos::ProvinceResponseDto,
        destination_types_dtos::CreateDestinationTypeDto,
        destination_types_dtos::UpdateDestinationTypeDto,
        destination_types_dtos::DestinationTypeResponseDto,
        poi_types_dtos::CreatePoiTypeDto,
        poi_types_dtos::UpdatePoiTypeDto,
        poi_types_dtos::PoiTypeResponseDto,
        pois_dtos::CreatePoiDto,
        pois_dtos::UpdatePoiDto,
        pois_dtos::PoiResponseDto,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "destinations", description = "Destinations with point locations"),
        (name = "hashtags", description = "Hashtag labels"),
        (name = "provinces", description = "Administrative regions"),
        (name = "destination_types", description = "Destination classification lookup"),
        (name = "poi_types", description = "POI classification lookup"),
        (name = "pois", description = "Points of interest"),
    )
)]
pub struct ApiDoc;

/// Overrides the OpenAPI info section with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
