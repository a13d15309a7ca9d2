//! Single-feature sensitivity sweep over the price model

use ndarray::Array1;

use crate::model;

/// Number of samples in an area sweep
const AREA_SAMPLES: usize = 50;

/// Lower bound of the area sweep interval, in square meters
const AREA_MIN: f64 = 30.0;

/// Upper bound of the area sweep interval, in square meters
const AREA_MAX: f64 = 150.0;

/// Smallest and largest room counts sampled by a rooms sweep
const ROOM_MIN: f64 = 1.0;
const ROOM_MAX: f64 = 5.0;

/// Floor area pinned during rooms sweeps, in square meters
///
/// Rooms sweeps do not take a caller-supplied area; only area sweeps honor
/// the caller-supplied fixed room count.
pub const ROOM_SWEEP_AREA: f64 = 100.0;

/// Feature that a sweep varies while the other inputs stay fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepFeature {
    /// Floor area in square meters
    Area,
    /// Room count
    Rooms,
}

impl SweepFeature {
    /// Parse a feature name into its closed enum case
    ///
    /// Only `"area"` and `"rooms"` are supported; any other name is reported
    /// as a descriptive error rather than falling through silently.
    pub fn parse(name: &str) -> crate::Result<Self> {
        match name {
            "area" => Ok(SweepFeature::Area),
            "rooms" => Ok(SweepFeature::Rooms),
            other => anyhow::bail!(
                "Feature '{}' is not supported, expected 'area' or 'rooms'",
                other
            ),
        }
    }
}

/// Aligned sample/price series produced by one sweep invocation
///
/// `x_values[i]` holds the swept feature's sample and `y_values[i]` the price
/// predicted at that sample; the arrays always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Samples of the swept feature, in generation order
    pub x_values: Array1<f64>,
    /// Predicted prices, index-aligned with `x_values`
    pub y_values: Array1<f64>,
}

impl SweepResult {
    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Iterate over aligned `(sample, price)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values
            .iter()
            .copied()
            .zip(self.y_values.iter().copied())
    }
}

/// Generate the fixed sample grid for a feature
fn sample_points(feature: SweepFeature) -> Array1<f64> {
    match feature {
        SweepFeature::Area => Array1::linspace(AREA_MIN, AREA_MAX, AREA_SAMPLES),
        SweepFeature::Rooms => Array1::range(ROOM_MIN, ROOM_MAX + 1.0, 1.0),
    }
}

/// Sweep one feature over its fixed sample range, predicting a price per sample
///
/// # Arguments
/// * `feature` - Dimension to vary: 50 evenly spaced area samples over
///   [30, 150] qm, or integer room counts 1 through 5
/// * `fixed_rooms` - Room count held fixed during area sweeps; ignored by
///   rooms sweeps, which pin the area at [`ROOM_SWEEP_AREA`] instead
/// * `fixed_town` - Town held fixed for every sample
///
/// # Returns
/// * Index-aligned `SweepResult` in generation order (ascending area samples,
///   or room counts 1..=5)
pub fn sweep_prices(feature: SweepFeature, fixed_rooms: f64, fixed_town: &str) -> SweepResult {
    let x_values = sample_points(feature);
    let y_values = x_values.mapv(|x| match feature {
        SweepFeature::Area => model::estimate_price(fixed_rooms, x, fixed_town),
        SweepFeature::Rooms => model::estimate_price(x, ROOM_SWEEP_AREA, fixed_town),
    });

    SweepResult { x_values, y_values }
}
