//! Hooks for watching a hull being built.
//!
//! [`HullBuilder`](crate::algorithms::HullBuilder) calls its observer after
//! every base case and around every merge. Observers only look: nothing they
//! do feeds back into the algorithm, and [`NoopObserver`] is the default.
use log::warn;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::data::LinkedHull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  /// A hull of two or three points was linked up.
  BaseCase,
  /// Two finished hulls are about to be merged. Their points are highlighted.
  Merging,
  /// The merge finished. The merged points are still highlighted.
  Merged,
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Step::BaseCase => write!(f, "base case"),
      Step::Merging => write!(f, "merging"),
      Step::Merged => write!(f, "merged"),
    }
  }
}

pub trait HullObserver<T> {
  /// Called synchronously; may block.
  fn on_step(&mut self, hull: &LinkedHull<T>, step: Step);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> HullObserver<T> for NoopObserver {
  fn on_step(&mut self, _hull: &LinkedHull<T>, _step: Step) {}
}

impl<T, F> HullObserver<T> for F
where
  F: FnMut(&LinkedHull<T>, Step),
{
  fn on_step(&mut self, hull: &LinkedHull<T>, step: Step) {
    self(hull, step)
  }
}

/// Prints every intermediate hull and waits for a line of input before
/// letting the algorithm continue.
///
/// Once `input` reaches end of file the observer keeps printing but stops
/// waiting.
///
/// ```rust
/// # use dchull::algorithms::HullBuilder;
/// # use dchull::data::{LinkedHull, Point};
/// # use dchull::observer::StepThrough;
/// let mut hull = LinkedHull::new(vec![
///   Point::new([0, 0]),
///   Point::new([1, 2]),
///   Point::new([2, 0]),
/// ])?;
/// let mut out = Vec::new();
/// let mut builder = HullBuilder::with_observer(StepThrough::new(&b"\n"[..], &mut out));
/// builder.build(&mut hull)?;
/// drop(builder);
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("base case\n  hull: (0 0) (1 2) (2 0)\n"));
/// # Ok::<(), dchull::Error>(())
/// ```
pub struct StepThrough<R, W> {
  input: R,
  output: W,
  pause: bool,
}

impl<R, W> StepThrough<R, W>
where
  R: BufRead,
  W: Write,
{
  pub fn new(input: R, output: W) -> StepThrough<R, W> {
    StepThrough {
      input,
      output,
      pause: true,
    }
  }

  fn show<T: fmt::Display>(&mut self, hull: &LinkedHull<T>, step: Step) -> io::Result<()> {
    writeln!(self.output, "{}", step)?;
    for cycle in hull.cycles() {
      write!(self.output, "  hull:")?;
      for id in cycle {
        let marker = if hull.is_highlighted(id) { "*" } else { "" };
        write!(self.output, " ({}){}", hull.point(id), marker)?;
      }
      writeln!(self.output)?;
    }
    if self.pause {
      write!(self.output, "Press Enter to proceed ")?;
      self.output.flush()?;
      let mut line = String::new();
      if self.input.read_line(&mut line)? == 0 {
        self.pause = false;
      }
    }
    self.output.flush()
  }
}

impl<T, R, W> HullObserver<T> for StepThrough<R, W>
where
  T: fmt::Display,
  R: BufRead,
  W: Write,
{
  fn on_step(&mut self, hull: &LinkedHull<T>, step: Step) {
    if let Err(err) = self.show(hull, step) {
      warn!("step-through viewer failed: {}", err);
    }
  }
}
