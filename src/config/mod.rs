pub mod defaults;
pub mod settings;

pub use settings::{CardLayoutConfig, CardSize, FileLocations, FontRegion, Fonts, Station};
