mod progress;
mod service;
mod session;

// Public API of the practice subsystem.
pub use progress::PracticeProgress;
pub use service::PracticeService;
pub use session::PracticeSession;
