use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use dusk_ngin::math::{Degrees, Matrix4x4F, Quaternion, QuaternionF, Radians, Vector3F};

fn unit_x() -> Vector3F {
    Vector3F::new([1.0, 0.0, 0.0])
}

fn unit_y() -> Vector3F {
    Vector3F::new([0.0, 1.0, 0.0])
}

fn unit_z() -> Vector3F {
    Vector3F::new([0.0, 0.0, 1.0])
}

#[test]
fn default_construction_is_the_identity_rotation() {
    let quaternion = QuaternionF::default();
    assert_eq!(Radians::new(0.0), quaternion.angle());
    assert_eq!(QuaternionF::identity(), quaternion);
}

#[test]
fn construction_from_degrees_converts_explicitly() {
    let from_degrees = Quaternion::from_degrees(unit_y(), Degrees::new(90.0));
    let from_radians = Quaternion::new(unit_y(), Radians::new(FRAC_PI_2));
    assert_eq!(from_radians, from_degrees);
}

#[test]
fn identity_composed_with_any_rotation_is_that_rotation() {
    let rotation = Quaternion::new(unit_z(), Radians::new(FRAC_PI_3));
    assert_eq!(rotation, QuaternionF::identity() * rotation);
    assert_eq!(rotation, rotation * QuaternionF::identity());
}

#[test]
fn multiplication_is_associative() {
    let q1 = Quaternion::new(unit_x(), Radians::new(FRAC_PI_4));
    let q2 = Quaternion::new(unit_y(), Radians::new(FRAC_PI_3));
    let q3 = Quaternion::new(unit_z(), Radians::new(0.5));
    assert_eq!((q1 * q2) * q3, q1 * (q2 * q3));
}

#[test]
fn multiplication_is_not_commutative() {
    let q1 = Quaternion::new(unit_x(), Radians::new(FRAC_PI_2));
    let q2 = Quaternion::new(unit_y(), Radians::new(FRAC_PI_2));
    assert_ne!(q1 * q2, q2 * q1);
}

#[test]
fn same_axis_rotations_accumulate_their_angles() {
    let quarter = Quaternion::new(unit_z(), Radians::new(FRAC_PI_4));
    let composed = quarter * quarter;
    assert_eq!(Radians::new(FRAC_PI_2), composed.angle());
    assert_eq!(unit_z(), *composed.axis());
}

#[test]
fn normalize_produces_a_unit_axis() {
    let mut quaternion = Quaternion::new(Vector3F::new([0.0, 3.0, 0.0]), Radians::new(1.0));
    quaternion.normalize();
    assert!((quaternion.axis().length() - 1.0).abs() < 1.0e-4);
}

#[test]
fn normalizing_the_identity_is_a_no_op() {
    let mut quaternion = QuaternionF::identity();
    quaternion.normalize();
    assert_eq!(QuaternionF::identity(), quaternion);
}

#[test]
fn conversion_of_the_identity_is_the_identity_matrix() {
    let matrix = Matrix4x4F::from(QuaternionF::identity());
    assert_eq!(Matrix4x4F::identity(), matrix);
}

#[test]
fn conversion_of_a_quarter_turn_about_z() {
    let quaternion = Quaternion::new(unit_z(), Radians::new(FRAC_PI_2));
    let matrix = Matrix4x4F::from(quaternion);
    let expected = Matrix4x4F::new([
        [0.0, -1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(expected, matrix);
}
