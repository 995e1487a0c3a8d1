use std::fmt;

/// A rectangular geographic region, encoded exactly as the OpenSky
/// `/states/all` endpoint expects its query parameters.
///
/// Field names and declaration order are the wire format: serialization
/// emits `lamin`, `lomin`, `lamax`, `lomax` in that order, so the query
/// string is stable across invocations.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BoundingBox {
    /// Minimum latitude of the box, in decimal degrees.
    pub(crate) lamin: f64,
    /// Minimum longitude of the box, in decimal degrees.
    pub(crate) lomin: f64,
    /// Maximum latitude of the box, in decimal degrees.
    pub(crate) lamax: f64,
    /// Maximum longitude of the box, in decimal degrees.
    pub(crate) lomax: f64,
}

impl BoundingBox {
    /// The fixed rectangle over Paris that every fetch is bounded to.
    pub const PARIS: BoundingBox = BoundingBox {
        lamin: 48.724017,
        lomin: 2.356484,
        lamax: 48.775232,
        lomax: 2.539622,
    };
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[lat {}..{}, lon {}..{}]",
            self.lamin, self.lamax, self.lomin, self.lomax
        )
    }
}
