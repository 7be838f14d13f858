//! Input loading: configuration and contact log

use std::fs;
use std::path::Path;

use crate::config::CardLayoutConfig;
use crate::error::{ConfigError, ContactsError};
use crate::model::ContactRecord;

/// Parse a JSON array of contact records
pub fn parse_contacts(content: &str, source: &Path) -> Result<Vec<ContactRecord>, ContactsError> {
    let contacts: Vec<ContactRecord> =
        serde_json::from_str(content).map_err(|e| ContactsError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;

    for contact in &contacts {
        log::info!(
            "{}: Date={} {}, Callsign={}, Mode={}",
            contact.id,
            contact.date(),
            contact.time,
            contact.callsign,
            contact.mode
        );
    }

    Ok(contacts)
}

/// Read and parse the contacts file
pub fn load_contacts(path: &Path) -> Result<Vec<ContactRecord>, ContactsError> {
    let content = fs::read_to_string(path).map_err(|e| ContactsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_contacts(&content, path)
}

/// Read and validate the configuration file
pub fn load_config(path: &Path) -> Result<CardLayoutConfig, ConfigError> {
    let config = CardLayoutConfig::load(path)?;
    log::debug!(
        "Card {}x{} pt, callsign font {} ({} pt), body font {} ({} pt)",
        config.card.width,
        config.card.height,
        config.fonts.callsign.name,
        config.fonts.callsign.size,
        config.fonts.body.name,
        config.fonts.body.size
    );
    Ok(config)
}
