pub mod destination_types;
pub mod destinations;
pub mod hashtags;
pub mod poi_types;
pub mod pois;
pub mod provinces;
pub mod users;
