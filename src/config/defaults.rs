/// Card width in points (14.8 cm)
pub const DEFAULT_CARD_WIDTH: f32 = 419.5;

/// Card height in points (10.0 cm)
pub const DEFAULT_CARD_HEIGHT: f32 = 283.5;

/// Top edge of the QSO table in points
pub const DEFAULT_TABLE_TOP: f32 = 150.0;

/// Contacts file, relative to the config file
pub const DEFAULT_CONTACTS_FILE: &str = "qsos.json";

/// Output file, relative to the config file
pub const DEFAULT_OUTPUT_FILE: &str = "qslcards.pdf";
