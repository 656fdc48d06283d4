use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dchull::algorithms::HullBuilder;
use dchull::data::{LinkedHull, Point};
use dchull::observer::{HullObserver, StepThrough};
use dchull::parse::parse_points;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Convex hull of a set of points, computed by divide and conquer.
///
/// Prints the hull vertices in clockwise order, one `x y` pair per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// File with one point per line, written as two whitespace separated numbers.
  #[arg(value_name = "FILE", conflicts_with = "random")]
  file: Option<PathBuf>,

  /// Use this many random points in the unit square instead of reading a file.
  #[arg(short, long, value_name = "N")]
  random: Option<usize>,

  /// Seed for --random.
  #[arg(long, requires = "random")]
  seed: Option<u64>,

  /// Print the partial hulls after every base case and merge, and wait for Enter.
  #[arg(short, long)]
  step: bool,

  /// Print every point with its hull links instead of only the hull.
  #[arg(short, long)]
  all: bool,
}

fn load_points(args: &Cli) -> Vec<Point<f64>> {
  if let Some(n) = args.random {
    let mut rng = match args.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_entropy(),
    };
    return (0..n).map(|_| rng.gen()).collect();
  }
  let Some(path) = &args.file else {
    let mut cmd = Cli::command();
    cmd
      .error(
        ErrorKind::MissingRequiredArgument,
        "Either a FILE or --random N is required.",
      )
      .exit();
  };
  let text = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) => {
      let mut cmd = Cli::command();
      cmd
        .error(ErrorKind::Io, format!("{}: {}", path.display(), err))
        .exit();
    }
  };
  match parse_points(&text) {
    Ok(points) => points,
    Err(err) => {
      let mut cmd = Cli::command();
      cmd
        .error(ErrorKind::InvalidValue, format!("{}: {}", path.display(), err))
        .exit();
    }
  }
}

fn run<O>(points: Vec<Point<f64>>, observer: O) -> Result<LinkedHull<f64>, dchull::Error>
where
  O: HullObserver<f64>,
{
  let mut hull = LinkedHull::new(points)?;
  HullBuilder::with_observer(observer).build(&mut hull)?;
  hull.validate()?;
  Ok(hull)
}

fn print_hull(hull: &LinkedHull<f64>, all: bool) -> io::Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  if all {
    let show = |id: Option<dchull::data::PointId>| match id {
      Some(id) => hull.point(id).to_string(),
      None => "-".to_string(),
    };
    for id in hull.ids() {
      writeln!(
        out,
        "{}\ton_hull={}\tcw={}\tccw={}",
        hull.point(id),
        hull.is_on_hull(id),
        show(hull.cw(id)),
        show(hull.ccw(id))
      )?;
    }
  } else {
    for pt in hull.hull_points() {
      writeln!(out, "{}", pt)?;
    }
  }
  out.flush()
}

fn main() {
  env_logger::init();
  let args = Cli::parse();

  let points = load_points(&args);
  info!("computing the hull of {} points", points.len());

  let result = if args.step {
    let stdin = io::stdin();
    run(points, StepThrough::new(stdin.lock(), io::stdout()))
  } else {
    run(points, dchull::observer::NoopObserver)
  };
  let hull = match result {
    Ok(hull) => hull,
    Err(err) => {
      let mut cmd = Cli::command();
      cmd.error(ErrorKind::InvalidValue, err).exit();
    }
  };
  info!("{} of {} points on the hull", hull.hull().len(), hull.len());

  if let Err(err) = print_hull(&hull, args.all) {
    // Closed pipes are not worth a message.
    if err.kind() != io::ErrorKind::BrokenPipe {
      eprintln!("error: {}", err);
      std::process::exit(1);
    }
  }
}
