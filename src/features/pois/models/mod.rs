mod poi;

pub use poi::Poi;
