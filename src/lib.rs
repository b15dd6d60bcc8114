// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod settings;
pub mod suite;

// public uses
pub use app::{App, Options};
pub use filter::Filter;
pub use settings::Settings;
pub use suite::{Case, Engine, Group, Input, Report, Suite};
