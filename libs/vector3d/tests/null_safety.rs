//! Calls with absent operands fail cleanly and leave outputs untouched.

use vector3d::{ops, Vector3D, VectorError};

#[test]
fn cross_with_absent_operands_does_not_panic() {
    let a = ops::create_with_value(1.0, 2.0, 3.0);
    let b = ops::create_with_value(4.0, 5.0, 6.0);
    let mut out = ops::create_with_value(-1.0, -1.0, -1.0);

    assert!(ops::cross(None, Some(&b), Some(&mut out)).is_err());
    assert!(ops::cross(Some(&a), None, Some(&mut out)).is_err());
    assert!(ops::cross(Some(&a), Some(&b), None).is_err());

    assert_eq!(out, Vector3D::with_value(-1.0, -1.0, -1.0));
    assert_eq!(a, Vector3D::with_value(1.0, 2.0, 3.0));
    assert_eq!(b, Vector3D::with_value(4.0, 5.0, 6.0));
}

#[test]
fn every_operation_reports_absent_operands() {
    let v = Vector3D::with_value(1.0, 1.0, 1.0);
    let mut out = Vector3D::with_value(2.0, 2.0, 2.0);

    let results = [
        ops::sum(None, Some(&v), Some(&mut out)),
        ops::sub(Some(&v), None, Some(&mut out)),
        ops::cross(Some(&v), Some(&v), None),
        ops::scale(None, 3.0, Some(&mut out)),
        ops::set_x(None, 0.0),
        ops::set_y(None, 0.0),
        ops::set_z(None, 0.0),
        ops::set_xyz(None, 0.0, 0.0, 0.0),
    ];
    for result in results {
        assert!(matches!(result, Err(VectorError::InvalidArgument { .. })));
    }
    assert_eq!(out, Vector3D::with_value(2.0, 2.0, 2.0));

    assert!(ops::dot(None, None).is_nan());
    assert!(ops::get_x(None).is_nan());
    assert!(ops::get_y(None).is_nan());
    assert!(ops::get_z(None).is_nan());
}

#[test]
fn error_message_names_operation_and_operand() {
    let err = ops::sub(None, None, None).unwrap_err();
    assert_eq!(err.to_string(), "sub: first operand is absent");
}
