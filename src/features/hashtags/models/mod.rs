mod hashtag;

pub use hashtag::Hashtag;
