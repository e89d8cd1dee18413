mod poi_type;

pub use poi_type::PoiType;
