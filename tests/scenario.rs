use std::f64::consts::PI;
use std::io::Write;

use shapebox::{BoxConfig, BoxError, Circle, Geometry, Shape, ShapeBox, Square, Triangle};
use tempfile::NamedTempFile;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_capacity_three_scenario() {
    let mut shape_box = ShapeBox::new(3);
    shape_box.add_shape(Circle::new(2.0)).unwrap();
    shape_box.add_shape(Square::new(4.0)).unwrap();
    shape_box.add_shape(Circle::new(1.0)).unwrap();

    let err = shape_box.add_shape(Triangle::new(1.0)).unwrap_err();
    assert!(matches!(err, BoxError::CapacityExceeded { capacity: 3, .. }));
    assert_eq!(shape_box.len(), 3);

    assert!(close(shape_box.sum_area(), PI * 4.0 + 16.0 + PI));
    assert!(close(shape_box.sum_perimeter(), 4.0 * PI + 16.0 + 2.0 * PI));

    assert_eq!(shape_box.remove_all_circles(), Ok(2));
    assert_eq!(shape_box.shapes(), &[Shape::from(Square::new(4.0))]);

    assert_eq!(shape_box.remove_all_circles(), Err(BoxError::CirclesNotFound));
    assert_eq!(shape_box.len(), 1);
}

#[test]
fn test_extract_and_replace_walkthrough() {
    let mut shape_box = ShapeBox::new(4);
    for side in [1.0, 2.0, 3.0] {
        shape_box.add_shape(Square::new(side)).unwrap();
    }

    let old = shape_box.replace_by_index(0, Circle::new(1.0)).unwrap();
    assert!(close(old.area(), 1.0));
    assert!(shape_box.get_by_index(0).unwrap().is_circle());

    let extracted = shape_box.extract_by_index(1).unwrap();
    assert_eq!(extracted, Shape::from(Square::new(2.0)));
    assert_eq!(
        shape_box.get_by_index(1).unwrap(),
        &Shape::from(Square::new(3.0))
    );
    assert!(shape_box.extract_by_index(2).is_err());
    assert_eq!(shape_box.len(), 2);
}

#[test]
fn test_box_built_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "capacity = 1").unwrap();
    writeln!(file, "log_filter = \"shapebox=debug\"").unwrap();

    let config = BoxConfig::load(file.path()).unwrap();
    let mut shape_box = config.build_box();

    assert!(shape_box.add_shape(Triangle::new(2.0)).is_ok());
    let rejected = shape_box
        .add_shape(Circle::new(5.0))
        .unwrap_err()
        .into_rejected_shape();
    assert_eq!(rejected, Some(Shape::from(Circle::new(5.0))));
}
