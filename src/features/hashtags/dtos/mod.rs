mod hashtag_dto;

pub use hashtag_dto::{CreateHashtagDto, HashtagResponseDto, UpdateHashtagDto};
