use serde::{Deserialize, Serialize};

/// Where a place is. Stored flattened into the place row, never on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Whether the coordinates were taken on site rather than geocoded.
    pub accurate: bool,
    pub street_address: String,
    pub cross_street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Location {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude: Option<f64>,
        longitude: Option<f64>,
        accurate: bool,
        street_address: impl Into<String>,
        cross_street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            accurate,
            street_address: street_address.into(),
            cross_street: cross_street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}
