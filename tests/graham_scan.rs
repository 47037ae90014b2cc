mod graham_scan {
  use hull2d::algorithms::*;
  use hull2d::data::*;
  use hull2d::shapes::*;
  use hull2d::*;

  use claims::assert_ok;

  fn points(pts: &[[i32; 2]]) -> Vec<Point<i32>> {
    pts.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn square_with_interior_point() -> Result<(), Error> {
    let hull = graham_scan(points(&[[0, 0], [4, 0], [4, 4], [0, 4], [2, 2]]));
    hull.validate()?;
    assert_eq!(hull.to_vec(), points(&[[4, 0], [4, 4], [0, 4], [0, 0]]));
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::Inside);
    Ok(())
  }

  #[test]
  fn degenerate_inputs() {
    assert!(graham_scan::<i32>(vec![]).is_empty());
    assert_eq!(graham_scan(points(&[[5, 5]])).to_vec(), points(&[[5, 5]]));
    assert_eq!(
      graham_scan(points(&[[0, 0], [1, 0], [2, 0]])).to_vec(),
      points(&[[2, 0], [0, 0]])
    );
    assert_eq!(
      graham_scan(points(&[[7, 7], [7, 7], [7, 7]])).to_vec(),
      points(&[[7, 7]])
    );
    let hull = graham_scan(points(&[[0, 0], [0, 0], [2, 0], [1, 2]]));
    assert_eq!(hull.to_vec(), points(&[[2, 0], [1, 2], [0, 0]]));
    assert!(hull.is_polygon());
  }

  #[test]
  fn shapes() {
    for shape in Shape::ALL {
      for n in [0, 1, 2, 3, 7, 100, 1001] {
        let pts = shape.generate(n);
        for scan in [GrahamScan::new(), GrahamScan::new().with_prefilter(false)] {
          let hull = scan.run(pts.clone());
          assert_ok!(hull.validate());
          for pt in &pts {
            assert_ne!(hull.locate(pt), PointLocation::Outside, "{} {}", shape, n);
          }
        }
      }
    }
  }

  #[test]
  fn square_outline() {
    let hull = convex_hull(square(400));
    assert_eq!(
      hull.to_vec(),
      points(&[[375, 125], [375, 375], [125, 375], [125, 125]])
    );
  }

  #[test]
  fn wide_coordinates() -> Result<(), Error> {
    let corners: Vec<Point<i64>> = vec![
      Point::new([i64::MIN, i64::MIN]),
      Point::new([i64::MAX, i64::MIN]),
      Point::new([i64::MAX, i64::MAX]),
      Point::new([i64::MIN, i64::MAX]),
      Point::new([i64::MAX - 1, i64::MAX - 1]),
    ];
    let pts: Vec<Point<num_bigint::BigInt>> = corners.into_iter().map(|pt| pt.into()).collect();
    let hull = convex_hull(pts);
    hull.validate()?;
    assert_eq!(hull.len(), 4);
    assert_eq!(hull[0], Point::<num_bigint::BigInt>::from(Point::new([i64::MAX, i64::MIN])));
    Ok(())
  }
}
