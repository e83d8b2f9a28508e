mod question;
mod session;
mod settings;
mod summary;

pub use question::Question;
pub use session::GameSession;
pub use settings::{GameSettings, SettingsError, TimerSettings};
pub use summary::{GameSummary, SummaryError};
