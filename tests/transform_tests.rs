//! Transform tests
//!
//! Tests for:
//! - Transform TRS defaults and dirty checking
//! - Local matrix after driver writes (hands, crowns)
//! - look_at orientation

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};

use configurator::animation::slide::PartSlideAnimator;
use configurator::scene::transform::Transform;
use configurator::watch::clock::{ClockHandDriver, ClockHands, ClockTime};
use configurator::watch::crowns::first_crown_track;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

// ============================================================================
// Transform Unit Tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // The identity matrix already matches a fresh transform
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.set_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.scale = Vec3::splat(0.4);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());
}

#[test]
fn positioned_transform_builds_matrix_on_first_pull() {
    let mut t = Transform::from_position(Vec3::new(0.392, 0.184, -0.06));

    assert!(t.update_local_matrix());
    assert!(vec3_approx(
        t.local_matrix().translation.into(),
        Vec3::new(0.392, 0.184, -0.06)
    ));
}

#[test]
fn rewriting_same_values_is_not_a_change() {
    let mut t = Transform::from_position(Vec3::new(0.0, 0.199, 0.0));
    t.set_rotation_y(0.3);
    t.update_local_matrix();

    t.set_rotation_y(0.3);
    t.position = Vec3::new(0.0, 0.199, 0.0);
    assert!(!t.update_local_matrix());
}

// ============================================================================
// Driver writes
// ============================================================================

#[test]
fn hand_matrix_rotates_about_pivot() {
    let mut hands = ClockHands::default();
    ClockHandDriver::default().update(
        ClockTime {
            hour12: 0,
            minute: 0,
            second: 0,
        },
        &mut hands,
    );
    hands.second.update_local_matrix();

    let mat = Mat4::from(*hands.second.local_matrix());
    let pivot = mat.transform_point3(Vec3::ZERO);
    assert!(vec3_approx(pivot, Vec3::new(0.0, 0.199, 0.0)));

    let expected = Quat::from_rotation_y(-0.739) * Vec3::X + Vec3::new(0.0, 0.199, 0.0);
    assert!(vec3_approx(mat.transform_point3(Vec3::X), expected));
}

#[test]
fn hidden_crown_collapses_to_point() {
    let mut t = Transform::new();
    let mut crown = PartSlideAnimator::new("crown", first_crown_track(0.5));

    crown.update(false, 0.016).apply_to(&mut t);
    t.update_local_matrix();

    let mat = Mat4::from(*t.local_matrix());
    let hidden = first_crown_track(0.5).hidden_position();
    assert!(vec3_approx(mat.transform_point3(Vec3::ONE), hidden));
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn transform_look_at_basic() {
    let mut t = Transform::from_position(Vec3::new(8.0, 8.0, 8.0));
    t.look_at(Vec3::ZERO, Vec3::Y);

    t.update_local_matrix();
    let mat = Mat4::from(*t.local_matrix());
    let forward = -mat.z_axis.truncate().normalize();
    assert!(vec3_approx(forward, -Vec3::ONE.normalize()));
}

#[test]
fn transform_look_at_collinear_up_noop() {
    let mut t = Transform::new();
    let original_rotation = t.rotation;
    t.look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y);
    assert_eq!(t.rotation, original_rotation);
}
