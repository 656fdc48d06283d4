//! Reading points from text.
use crate::data::Point;
use crate::Error;

/// Parse one point per line, written as two whitespace separated numbers.
///
/// Blank lines are skipped. Anything else that is not exactly two finite
/// numbers is rejected with the (1-based) number of the offending line.
///
/// ```rust
/// # use dchull::data::Point;
/// # use dchull::parse::parse_points;
/// # use dchull::Error;
/// let pts = parse_points("0 0\n\n1.5 -2\n")?;
/// assert_eq!(pts, vec![Point::new([0.0, 0.0]), Point::new([1.5, -2.0])]);
/// assert_eq!(parse_points("0 0\n1\n").err(), Some(Error::MalformedInput { line: 2 }));
/// # Ok::<(), Error>(())
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point<f64>>, Error> {
  let mut points = Vec::new();
  for (index, line) in text.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    let malformed = Error::MalformedInput { line: index + 1 };
    let mut fields = line.split_whitespace().map(str::parse::<f64>);
    let point = match (fields.next(), fields.next(), fields.next()) {
      (Some(Ok(x)), Some(Ok(y)), None) => Point::new([x, y]),
      _ => return Err(malformed),
    };
    if !point.is_finite() {
      return Err(malformed);
    }
    points.push(point);
  }
  Ok(points)
}
