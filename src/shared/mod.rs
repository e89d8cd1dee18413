pub mod geo;
pub mod status;
pub mod test_helpers;
pub mod types;
pub mod validation;
