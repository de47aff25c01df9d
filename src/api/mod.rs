pub mod client;
pub mod models;
pub mod traits;

pub use client::HttpBackend;
pub use models::{quality_choices, Quality, QualityChoice, VideoMetadata};
pub use traits::VideoBackend;
