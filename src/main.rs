use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, info};

use geofence::util;
use geofence::{GeoPoint, Geofence, RectangularBound};

/// Check tracked positions against a rectangular geofence.
#[derive(Parser, Debug)]
#[command(name = "geofence", version)]
struct Args {
    /// GeoJSON file of tracked positions ("-" for stdin).
    positions: Option<PathBuf>,

    /// Fence corners as SW_LAT,SW_LNG,NE_LAT,NE_LNG.
    #[arg(long, value_name = "SW_LAT,SW_LNG,NE_LAT,NE_LNG", allow_hyphen_values = true,
          conflicts_with = "bound_file")]
    bound: Option<String>,

    /// JSON file holding {"southWest": {...}, "northEast": {...}}.
    #[arg(long, value_name = "PATH")]
    bound_file: Option<PathBuf>,

    /// Print the fence as a GeoJSON polygon and exit.
    #[arg(long)]
    geojson: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

/// Parse "south,west,north,east" into a fence.
fn parse_bound(s: &str) -> anyhow::Result<RectangularBound> {
    let parts = s.split(',')
        .map(|p| p.trim().parse::<f64>().with_context(|| format!("bad coordinate {:?}", p)))
        .collect::<anyhow::Result<Vec<f64>>>()?;
    if parts.len() != 4 {
        bail!("expected 4 comma separated coordinates, got {}", parts.len());
    }
    Ok(RectangularBound::from_corners(parts[0], parts[1], parts[2], parts[3]))
}

fn load_bound(args: &Args) -> anyhow::Result<RectangularBound> {
    if let Some(ref s) = args.bound {
        return parse_bound(s);
    }
    if let Some(ref path) = args.bound_file {
        let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        return util::bound_from_json(BufReader::new(f))
            .with_context(|| format!("reading fence from {}", path.display()));
    }
    bail!("no fence given, use --bound or --bound-file")
}

fn load_points(path: &Path) -> anyhow::Result<Vec<GeoPoint>> {
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        return util::points_from_json(stdin.lock()).context("reading positions from stdin");
    }
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    util::points_from_json(BufReader::new(f))
        .with_context(|| format!("reading positions from {}", path.display()))
}

/// Feed each position through the tracker and write one `lat,lng,status,color` line per
/// position. Returns how many were inside.
fn write_statuses<W: Write>(out: &mut W,
                            fence: &mut Geofence,
                            points: &[GeoPoint])
                            -> anyhow::Result<usize> {
    let mut inside = 0;
    for p in points {
        let status = match fence.update(*p) {
            Some(status) => status,
            None => bail!("no fence drawn"),
        };
        if status.is_inside() {
            inside += 1;
        }
        writeln!(out, "{},{},{},{}", p.lat, p.lng, status, status.color())?;
    }
    Ok(inside)
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity);
    debug!("Command-line args: {:?}", args);

    let bound = load_bound(&args)?;
    let (height, width) = util::extent_meters(&bound);
    info!("fence covers about {:.0} m x {:.0} m", height, width);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.geojson {
        let feature = util::bound_to_geojson(&bound);
        serde_json::to_writer_pretty(&mut out, &feature)?;
        writeln!(out)?;
        return Ok(());
    }

    let path = match args.positions {
        Some(ref p) => p,
        None => bail!("no positions file given"),
    };
    let points = load_points(path)?;

    let mut fence = Geofence::with_bound(bound);
    let inside = write_statuses(&mut out, &mut fence, &points)?;
    info!("{} of {} positions inside the fence", inside, points.len());
    if let Some(color) = fence.color() {
        debug!("fence color after last position: {}", color);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corner_list() {
        let b = parse_bound("0, 170,10,-170").unwrap();
        assert_eq!(b, RectangularBound::from_corners(0.0, 170.0, 10.0, -170.0));
        assert!(b.crosses_antimeridian());
    }

    #[test]
    fn rejects_bad_corner_lists() {
        assert!(parse_bound("0,1,2").is_err());
        assert!(parse_bound("0,1,2,x").is_err());
        assert!(parse_bound("0,1,2,3,4").is_err());
    }

    #[test]
    fn writes_one_line_per_position() {
        let mut fence = Geofence::with_bound(RectangularBound::from_corners(0.0, 170.0, 10.0, -170.0));
        let points = vec![GeoPoint::new(5.0, 175.0),
                          GeoPoint::new(5.0, 0.0),
                          GeoPoint::new(2.5, -179.5)];
        let mut buf = Vec::new();
        let inside = write_statuses(&mut buf, &mut fence, &points).unwrap();
        assert_eq!(inside, 2);
        assert_eq!(String::from_utf8(buf).unwrap(),
                   "5,175,inside,#008000\n5,0,outside,#FF0000\n2.5,-179.5,inside,#008000\n");
        assert_eq!(fence.last_point(), Some(GeoPoint::new(2.5, -179.5)));
    }

    #[test]
    fn writing_without_fence_fails() {
        let mut buf = Vec::new();
        assert!(write_statuses(&mut buf, &mut Geofence::new(), &[GeoPoint::new(0.0, 0.0)]).is_err());
        assert!(write_statuses(&mut buf, &mut Geofence::new(), &[]).is_ok());
    }

    #[test]
    fn cli_accepts_negative_bound() {
        let args = Args::try_parse_from(["geofence", "--bound", "-10,-20,10,20", "pts.json"])
            .unwrap();
        assert_eq!(args.bound.as_deref(), Some("-10,-20,10,20"));
        assert_eq!(args.positions, Some(PathBuf::from("pts.json")));
        assert!(Args::try_parse_from(["geofence", "--bound", "0,0,1,1", "--bound-file", "b.json"])
            .is_err());
    }
}
