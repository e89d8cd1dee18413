pub mod hashtag_handler;

pub use hashtag_handler::*;
