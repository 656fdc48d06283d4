mod convex_hull {
  use dchull::algorithms::convex_hull::gift_wrapping;
  use dchull::algorithms::{convex_hull, HullBuilder};
  use dchull::data::*;
  use dchull::observer::{Step, StepThrough};
  use dchull::parse::parse_points;
  use dchull::*;

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};

  fn coords<T: Clone>(hull: &LinkedHull<T>) -> Vec<Point<T>> {
    hull.hull_points().into_iter().cloned().collect()
  }

  #[test]
  fn segment() -> Result<(), Error> {
    let hull = convex_hull(vec![Point::new([0, 0]), Point::new([1, 1])])?;
    hull.validate()?;
    let ids: Vec<PointId> = hull.ids().collect();
    assert_eq!(hull.cw(ids[0]), Some(ids[1]));
    assert_eq!(hull.ccw(ids[0]), Some(ids[1]));
    Ok(())
  }

  #[test]
  fn triangle() -> Result<(), Error> {
    let hull = convex_hull(vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 1]),
    ])?;
    hull.validate()?;
    assert_eq!(
      coords(&hull),
      vec![Point::new([0, 0]), Point::new([0, 1]), Point::new([1, 0])]
    );
    Ok(())
  }

  #[test]
  fn colinear() -> Result<(), Error> {
    let hull = convex_hull(vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
    ])?;
    hull.validate()?;
    assert_eq!(coords(&hull), vec![Point::new([0, 0]), Point::new([2, 0])]);
    let middle = hull.find(&Point::new([1, 0])).ok_or(Error::BrokenLink)?;
    assert!(!hull.is_on_hull(middle));
    Ok(())
  }

  #[test]
  fn two_unit_squares() -> Result<(), Error> {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([0, 1]),
      Point::new([1, 0]),
      Point::new([1, 1]),
      Point::new([3, 2]),
      Point::new([3, 3]),
      Point::new([4, 2]),
      Point::new([4, 3]),
    ];
    let hull = convex_hull(pts.clone())?;
    hull.validate()?;
    assert_eq!(coords(&hull), gift_wrapping::convex_hull(pts)?);
    assert_eq!(hull.hull().len(), 6);
    Ok(())
  }

  #[test]
  fn random_floats() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(1);
    for n in [2, 3, 10, 100, 1000] {
      let pts: Vec<Point<f64>> = (0..n).map(|_| rng.gen()).collect();
      let hull = convex_hull(pts.clone())?;
      hull.validate()?;
      assert_eq!(coords(&hull), gift_wrapping::convex_hull(pts)?);
    }
    Ok(())
  }

  #[test]
  fn random_grid() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..100 {
      let pts: Vec<Point<i32>> = (0..50)
        .map(|_| Point::new([rng.gen_range(0..6), rng.gen_range(0..6)]))
        .collect();
      let hull = convex_hull(pts.clone())?;
      hull.validate()?;
      assert_eq!(coords(&hull), gift_wrapping::convex_hull(pts)?);
    }
    Ok(())
  }

  #[test]
  fn parsed_input() -> Result<(), Error> {
    let pts = parse_points("0 0\n4 0\n\n2 1\n0 4\n4 4\n")?;
    let hull = convex_hull(pts)?;
    assert_eq!(hull.hull().len(), 4);
    assert!(!hull.is_on_hull(hull.find(&Point::new([2.0, 1.0])).ok_or(Error::BrokenLink)?));
    Ok(())
  }

  #[test]
  fn step_through_transcript() -> Result<(), Error> {
    let mut hull = LinkedHull::new(vec![
      Point::new([3, 1]),
      Point::new([0, 0]),
      Point::new([3, 0]),
      Point::new([0, 1]),
    ])?;
    let mut out = Vec::new();
    // Empty input: pause once, then run to completion.
    HullBuilder::with_observer(StepThrough::new(&b""[..], &mut out)).build(&mut hull)?;
    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(
      transcript,
      "base case\n  hull: (0 0) (0 1)\nPress Enter to proceed \
       base case\n  hull: (0 0) (0 1)\n  hull: (3 0) (3 1)\n\
       merging\n  hull: (0 0)* (0 1)*\n  hull: (3 0)* (3 1)*\n\
       merged\n  hull: (0 0)* (0 1)* (3 1)* (3 0)*\n"
    );
    Ok(())
  }

  #[test]
  fn observer_after_every_step() -> Result<(), Error> {
    let mut hull = LinkedHull::new((0..16).map(|i| Point::new([i, (i * 7) % 5])).collect())?;
    let mut steps = Vec::new();
    let mut builder = HullBuilder::with_observer(|hull: &LinkedHull<i32>, step: Step| {
      steps.push((step, hull.cycles().len()));
    });
    builder.build(&mut hull)?;
    drop(builder);
    // 16 points: 8 base cases of two points and 7 merges.
    assert_eq!(steps.iter().filter(|(step, _)| *step == Step::BaseCase).count(), 8);
    assert_eq!(steps.iter().filter(|(step, _)| *step == Step::Merged).count(), 7);
    assert_eq!(steps.last(), Some(&(Step::Merged, 1)));
    hull.validate()
  }
}
