pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;

pub use config::CardLayoutConfig;
pub use error::{ConfigError, ContactsError, RenderError};
pub use loader::{load_config, load_contacts};
pub use model::ContactRecord;
pub use render::{generate_pdf, QslCardRenderer};
