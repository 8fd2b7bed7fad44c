//! Integration tests for the rectangle record.

use kata_objects::Rectangle;

#[test]
fn test_rectangle_area() {
    let rect = Rectangle::new(10.0, 20.0);
    assert!((rect.get_area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_rectangle_exposes_fields() {
    let rect = Rectangle::new(3.0, 4.5);
    assert!((rect.width - 3.0).abs() < f64::EPSILON);
    assert!((rect.height - 4.5).abs() < f64::EPSILON);
}

#[test]
fn test_zero_sized_rectangle() {
    assert!(Rectangle::new(0.0, 7.0).get_area().abs() < f64::EPSILON);
}
