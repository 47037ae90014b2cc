use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use hull2d::algorithms::GrahamScan;
use hull2d::data::Point;
use hull2d::shapes::Shape;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Convex hull of a planar point set by Graham scan")]
struct Cmd {
  /// Read points from FILE, one `x y` or `x,y` pair per line ('-' for stdin)
  #[arg(long, conflicts_with = "shape")]
  input: Option<PathBuf>,

  /// Generate the points instead: circles, square, diamond or heart
  #[arg(long)]
  shape: Option<Shape>,

  /// Number of points to generate
  #[arg(short, default_value_t = 100)]
  n: usize,

  /// Skip the extreme point prefilter
  #[arg(long)]
  no_prefilter: bool,

  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Text,
  Json,
}

#[derive(Serialize)]
struct Report {
  points: usize,
  hull: Vec<[i32; 2]>,
}

fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  SubscriberBuilder::default()
    .with_target(false)
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
  let cmd = Cmd::parse();

  let pts = match (&cmd.shape, &cmd.input) {
    (Some(shape), _) => {
      tracing::info!(shape = %shape, n = cmd.n, "generate");
      shape.generate(cmd.n)
    }
    (None, Some(path)) if path != Path::new("-") => {
      tracing::info!(input = %path.display(), "read");
      let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
      parse_points(&text).with_context(|| format!("malformed input in {}", path.display()))?
    }
    (None, _) => {
      tracing::info!("read stdin");
      let mut text = String::new();
      std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
      parse_points(&text).context("malformed input on stdin")?
    }
  };

  let scan = GrahamScan::new().with_prefilter(!cmd.no_prefilter);
  let n = pts.len();
  tracing::info!(points = n, prefilter = scan.prefilter(), "graham scan: start");
  let hull = scan.run(pts);
  tracing::info!(vertices = hull.len(), "graham scan: end");
  hull.validate().context("computed hull is not convex")?;

  match cmd.format {
    Format::Text => println!("{}", render_text("hull:", &hull)),
    Format::Json => {
      let report = Report {
        points: n,
        hull: hull.iter().map(|pt| pt.array).collect(),
      };
      println!("{}", serde_json::to_string(&report)?);
    }
  }
  Ok(())
}

// One point per line. Coordinates are separated by whitespace or a comma and
// everything after '#' is ignored.
fn parse_points(text: &str) -> Result<Vec<Point<i32>>> {
  let mut pts = Vec::new();
  for (index, line) in text.lines().enumerate() {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
      continue;
    }
    let fields: Vec<&str> = line
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|field| !field.is_empty())
      .collect();
    let [x, y] = fields.as_slice() else {
      bail!("line {}: expected two coordinates, found {:?}", index + 1, line);
    };
    let parse = |field: &str| {
      field
        .parse::<i32>()
        .with_context(|| format!("line {}: invalid coordinate {:?}", index + 1, field))
    };
    pts.push(Point::new([parse(*x)?, parse(*y)?]));
  }
  Ok(pts)
}

fn render_text(label: &str, pts: &[Point<i32>]) -> String {
  let mut out = label.to_string();
  for pt in pts {
    out.push_str(&format!(" [{:3},{:3}]", pt.x_coord(), pt.y_coord()));
  }
  out
}
