mod destination_type_dto;

pub use destination_type_dto::{
    CreateDestinationTypeDto, DestinationTypeResponseDto, UpdateDestinationTypeDto,
};
