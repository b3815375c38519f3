use num::Float;

/// Represent some map coordinate, in degrees.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint<T = f64> {
    pub lat: T,
    pub lng: T,
}

impl<T> GeoPoint<T> {
    pub fn new(lat: T, lng: T) -> GeoPoint<T> {
        GeoPoint { lat: lat, lng: lng }
    }
}

/// Represent a rectangular geofence by its south-west and north-east corners, in degrees.
/// A south-west longitude greater than the north-east longitude means the rectangle wraps from
/// the west edge through ±180 to the east edge.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangularBound<T = f64> {
    pub south_west: GeoPoint<T>,
    pub north_east: GeoPoint<T>,
}

impl<T: PartialOrd + Copy> RectangularBound<T> {
    pub fn new(south_west: GeoPoint<T>, north_east: GeoPoint<T>) -> RectangularBound<T> {
        RectangularBound {
            south_west: south_west,
            north_east: north_east,
        }
    }

    pub fn from_corners(south: T, west: T, north: T, east: T) -> RectangularBound<T> {
        RectangularBound::new(GeoPoint::new(south, west), GeoPoint::new(north, east))
    }

    /// True when the longitude span runs across the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.lng > self.north_east.lng
    }

    /// Whether the point lies inside the closed rectangle. Inputs are compared exactly as
    /// given, without range checks.
    pub fn contains(&self, point: &GeoPoint<T>) -> bool {
        let (sw, ne) = (&self.south_west, &self.north_east);
        // Latitude never wraps.
        if point.lat < sw.lat || point.lat > ne.lat {
            return false;
        }
        if sw.lng <= ne.lng {
            point.lng >= sw.lng && point.lng <= ne.lng
        } else {
            // Union of [west, 180] and [-180, east].
            point.lng >= sw.lng || point.lng <= ne.lng
        }
    }
}

impl<T: Float> RectangularBound<T> {
    pub fn range_lat(&self) -> T {
        self.north_east.lat - self.south_west.lat
    }

    /// Degrees of longitude covered, counting through the antimeridian when the span wraps.
    pub fn range_lng(&self) -> T {
        let range = self.north_east.lng - self.south_west.lng;
        if self.crosses_antimeridian() {
            range + full_turn()
        } else {
            range
        }
    }

    /// Midpoint of the rectangle, with longitude kept in [-180, 180].
    pub fn center(&self) -> GeoPoint<T> {
        let two = T::one() + T::one();
        let lat = (self.south_west.lat + self.north_east.lat) / two;
        let mut lng = self.south_west.lng + self.range_lng() / two;
        if lng > half_turn() {
            lng = lng - full_turn();
        }
        GeoPoint::new(lat, lng)
    }
}

#[inline]
fn half_turn<T: Float>() -> T {
    T::from(180.0).unwrap_or_else(T::max_value)
}

#[inline]
fn full_turn<T: Float>() -> T {
    half_turn::<T>() + half_turn::<T>()
}
