mod destination_dto;

pub use destination_dto::{
    CoordinatesDto, CreateDestinationDto, DestinationResponseDto, UpdateDestinationDto,
};
