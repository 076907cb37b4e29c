//! Change tracking configuration (hh:trackchangeConfig)

/// Change tracking configuration (hh:trackchangeConfig).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackChangeConfig {
    /// Raw option flags as stored in the document
    pub flags: Option<u32>,
}

impl TrackChangeConfig {
    pub fn new(flags: Option<u32>) -> Self {
        Self { flags }
    }
}
