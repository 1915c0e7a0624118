pub mod checker;
pub mod cli;
pub mod config;
pub mod editor;
pub mod lookup;
pub mod parser;
pub mod session;

pub use config::Config;
pub use session::{Session, SessionOutcome};
