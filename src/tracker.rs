use std::fmt;

use crate::types::{GeoPoint, RectangularBound};

/// Indicator color of a fence holding the tracked position.
pub const INSIDE_COLOR: &str = "#008000";
/// Indicator color of a fence the tracked position has left.
pub const OUTSIDE_COLOR: &str = "#FF0000";

/// Where the tracked position sits relative to the fence.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceStatus {
    Inside,
    Outside,
}

impl FenceStatus {
    pub fn from_inside(inside: bool) -> FenceStatus {
        if inside {
            FenceStatus::Inside
        } else {
            FenceStatus::Outside
        }
    }

    pub fn is_inside(self) -> bool {
        self == FenceStatus::Inside
    }

    /// Stroke and fill color for the drawn rectangle.
    pub fn color(self) -> &'static str {
        match self {
            FenceStatus::Inside => INSIDE_COLOR,
            FenceStatus::Outside => OUTSIDE_COLOR,
        }
    }
}

impl fmt::Display for FenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FenceStatus::Inside => write!(f, "inside"),
            FenceStatus::Outside => write!(f, "outside"),
        }
    }
}

/// `Geofence` holds the rectangle the user last drew and the status of the last tracked
/// position seen against it. Redrawing replaces the rectangle as a whole and forgets the
/// previous status.
#[derive(Debug, Clone, Default)]
pub struct Geofence {
    bound: Option<RectangularBound>,
    last_point: Option<GeoPoint>,
    status: Option<FenceStatus>,
}

impl Geofence {
    pub fn new() -> Geofence {
        Geofence::default()
    }

    /// Start with a fence already drawn.
    pub fn with_bound(bound: RectangularBound) -> Geofence {
        let mut fence = Geofence::new();
        fence.redraw(bound);
        fence
    }

    pub fn bound(&self) -> Option<&RectangularBound> {
        self.bound.as_ref()
    }

    /// Status of the last position classified since the fence was drawn.
    pub fn status(&self) -> Option<FenceStatus> {
        self.status
    }

    pub fn last_point(&self) -> Option<GeoPoint> {
        self.last_point
    }

    /// Replace the fence. Until the next position arrives the fence shows as inside.
    pub fn redraw(&mut self, bound: RectangularBound) {
        info!("geofence drawn: sw ({}, {}) ne ({}, {}){}",
              bound.south_west.lat,
              bound.south_west.lng,
              bound.north_east.lat,
              bound.north_east.lng,
              if bound.crosses_antimeridian() {
                  ", across the antimeridian"
              } else {
                  ""
              });
        self.bound = Some(bound);
        self.status = None;
        self.last_point = None;
    }

    pub fn clear(&mut self) {
        self.bound = None;
        self.status = None;
        self.last_point = None;
    }

    /// Classify a tracked position against the current fence. Returns `None` when no fence
    /// has been drawn.
    pub fn update(&mut self, point: GeoPoint) -> Option<FenceStatus> {
        let bound = self.bound?;
        let status = FenceStatus::from_inside(bound.contains(&point));
        debug!("position ({}, {}) is {}", point.lat, point.lng, status);
        if let Some(previous) = self.status {
            if previous != status {
                info!("position moved {} the geofence",
                      if status.is_inside() { "into" } else { "out of" });
            }
        }
        self.status = Some(status);
        self.last_point = Some(point);
        Some(status)
    }

    /// Indicator color for the drawn rectangle, or `None` when nothing is drawn.
    pub fn color(&self) -> Option<&'static str> {
        self.bound?;
        Some(self.status.unwrap_or(FenceStatus::Inside).color())
    }
}
