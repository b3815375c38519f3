#![feature(test)]
extern crate test;

extern crate geofence;

use std::time::{Duration, Instant};
use geofence::util::*;
use geofence::{GeoPoint, RectangularBound};

#[cfg(test)]
use test::{Bencher, black_box};

const N: usize = 2000;
fn mock_track(n: usize) -> Vec<GeoPoint> {
    // Sweep the globe so both sides of the antimeridian are visited.
    (0..n * n)
        .map(|i| {
            let lat = (i / n) as f64 / n as f64 * 180.0 - 90.0;
            let lng = (i % n) as f64 / n as f64 * 360.0 - 180.0;
            GeoPoint::new(lat, lng)
        })
        .collect()
}

fn dur_as_ms(dur: Duration) -> f64 {
    dur.as_secs() as f64 * 1000.0 + dur.subsec_nanos() as f64 / 1000_000.0
}

// classify 4 million positions against a fence crossing the antimeridian.
#[bench]
fn bench_singlecore(_: &mut Bencher) {
    println!();
    let fence = RectangularBound::from_corners(-20.0, 150.0, 20.0, -150.0);
    let track = mock_track(N);
    let start = Instant::now();
    black_box(classify_all_slow(&fence, &track));
    println!("Time elapsed: {:.2} ms", dur_as_ms(start.elapsed()));
}

#[bench]
fn bench_multicore(_: &mut Bencher) {
    println!();
    let fence = RectangularBound::from_corners(-20.0, 150.0, 20.0, -150.0);
    let track = mock_track(N);
    let start = Instant::now();
    black_box(classify_all(&fence, &track));
    println!("Time elapsed: {:.2} ms", dur_as_ms(start.elapsed()));
}
