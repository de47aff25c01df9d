//! GUI components

pub mod processing_overlay;
pub mod status_badge;
pub mod url_input;
pub mod video_card;

// Re-export for convenience
pub use processing_overlay::processing_overlay;
pub use status_badge::status_badge;
pub use url_input::url_input;
pub use video_card::video_card;
