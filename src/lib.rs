//! Rectangular geofences over latitude/longitude, including fences whose longitude span crosses
//! the antimeridian.

extern crate geojson;
extern crate num;
extern crate rayon;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

mod error;
pub use error::{Error, Result};
mod types;
pub use types::*;
mod tracker;
pub use tracker::*;
pub mod util;


/// Decide whether `point` lies inside `bound`. Edges count as inside. When the south-west
/// longitude is greater than the north-east longitude the fence is taken to wrap through ±180.
///
/// ```
/// use geofence::{contains, GeoPoint, RectangularBound};
///
/// let fence = RectangularBound::from_corners(0.0, 170.0, 10.0, -170.0);
/// assert!(contains(&fence, &GeoPoint::new(5.0, -175.0)));
/// assert!(!contains(&fence, &GeoPoint::new(5.0, 0.0)));
/// ```
pub fn contains<T: PartialOrd + Copy>(bound: &RectangularBound<T>, point: &GeoPoint<T>) -> bool {
    bound.contains(point)
}
