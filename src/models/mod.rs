pub mod decklist;
pub mod settings;

pub use decklist::{Decklist, RejectReason, Rejection, SIDEBOARD_SEPARATOR};
pub use settings::{Settings, SettingsError, SETTINGS_FILE};
