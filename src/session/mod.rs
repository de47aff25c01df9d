pub mod controller;
pub mod state;
pub mod validation;
pub mod wake;

pub use controller::{DownloadRequest, OverlayEvent, OverlayTimer, SessionController};
pub use state::{AnalysisStatus, DownloadOverlay, ServerReadiness};
pub use validation::is_valid_url;
pub use wake::WakeUpTask;
