use serde::Deserialize;

/// One logged radio contact, printed as a single card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRecord {
    pub id: u32,
    pub year: String,
    pub month: String,
    pub day: String,
    pub time: String,
    /// Callsign of the other station
    #[serde(alias = "his_callsign")]
    pub callsign: String,
    pub mode: String,
    /// Signal report (RST)
    #[serde(alias = "report")]
    pub rst: String,
    pub band: String,
}

impl ContactRecord {
    /// Date as printed in the log line, e.g. "2019/01/01"
    pub fn date(&self) -> String {
        format!("{}/{}/{}", self.year, self.month, self.day)
    }

    /// Values for the QSO table, in column order
    pub fn table_values(&self) -> [&str; 7] {
        [
            &self.day,
            &self.month,
            &self.year,
            &self.time,
            &self.rst,
            &self.band,
            &self.mode,
        ]
    }
}
