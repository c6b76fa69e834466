//! Part Slide Tests
//!
//! Tests for:
//! - Hidden -> SlidingIn -> Visible -> SlidingOut -> Hidden cycle
//! - Pose and scale pinned in the resting phases
//! - Progress bounds under hostile delta times
//! - Restart vs. Mirror behavior when the predicate flips mid-slide

use glam::Vec3;

use configurator::animation::slide::{PartSlideAnimator, ReversalMode, SlidePhase, SlideTrack};
use configurator::scene::transform::Transform;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn track() -> SlideTrack {
    SlideTrack {
        visible_position: Vec3::new(0.392, 0.184, -0.06),
        hidden_offset: Vec3::new(0.25, 0.0, 0.0),
        visible_scale: 0.4,
        duration_secs: 0.5,
    }
}

fn animator() -> PartSlideAnimator {
    PartSlideAnimator::new("crown", track())
}

// ============================================================================
// Full cycle
// ============================================================================

#[test]
fn starts_hidden_and_retracted() {
    let mut part = animator();
    assert_eq!(part.phase(), SlidePhase::Hidden);

    let pose = part.update(false, 0.1);
    assert_eq!(part.phase(), SlidePhase::Hidden);
    assert_eq!(pose.position, track().hidden_position());
    assert_eq!(pose.scale, 0.0);
}

#[test]
fn show_then_hide_over_half_a_second_each() {
    let mut part = animator();

    for _ in 0..3 {
        part.update(true, 0.125);
        assert_eq!(part.phase(), SlidePhase::SlidingIn);
    }
    let pose = part.update(true, 0.125);
    assert_eq!(part.phase(), SlidePhase::Visible);
    assert_eq!(pose.position, track().visible_position);
    assert_eq!(pose.scale, 0.4);

    for _ in 0..3 {
        part.update(false, 0.125);
        assert_eq!(part.phase(), SlidePhase::SlidingOut);
    }
    let pose = part.update(false, 0.125);
    assert_eq!(part.phase(), SlidePhase::Hidden);
    assert_eq!(pose.position, track().hidden_position());
    assert_eq!(pose.scale, 0.0);
}

#[test]
fn sixty_fps_frames_totalling_half_a_second_finish_the_slide() {
    let mut part = animator();
    for _ in 0..30 {
        part.update(true, 1.0 / 60.0);
    }
    assert_eq!(part.phase(), SlidePhase::Visible);
}

#[test]
fn sliding_in_interpolates_from_hidden_to_visible() {
    let mut part = animator();
    let pose = part.update(true, 0.125);

    let expected = track().hidden_position().lerp(track().visible_position, 0.25);
    assert!((part.progress() - 0.25).abs() < EPSILON);
    assert!(vec3_approx(pose.position, expected));
    assert_eq!(pose.scale, 0.4);
}

#[test]
fn sliding_out_keeps_visible_scale() {
    let mut part = animator();
    part.update(true, 1.0);
    let pose = part.update(false, 0.25);

    assert_eq!(part.phase(), SlidePhase::SlidingOut);
    assert_eq!(pose.scale, 0.4);
    let expected = track().visible_position.lerp(track().hidden_position(), 0.5);
    assert!(vec3_approx(pose.position, expected));
}

#[test]
fn oversized_delta_completes_in_one_tick() {
    let mut part = animator();
    part.update(true, 10.0);
    assert_eq!(part.phase(), SlidePhase::Visible);
}

#[test]
fn visible_pose_is_pinned() {
    let mut part = animator();
    part.update(true, 1.0);
    for _ in 0..10 {
        let pose = part.update(true, 0.3);
        assert_eq!(pose.position, track().visible_position);
        assert_eq!(pose.scale, 0.4);
    }
}

#[test]
fn pose_is_written_to_transform() {
    let mut part = animator();
    let mut transform = Transform::new();

    part.update(true, 1.0).apply_to(&mut transform);

    assert_eq!(transform.position, track().visible_position);
    assert_eq!(transform.scale, Vec3::splat(0.4));
}

// ============================================================================
// Delta-time hygiene
// ============================================================================

#[test]
fn bad_delta_times_count_as_zero() {
    let mut part = animator();

    part.update(true, f32::NAN);
    assert_eq!(part.phase(), SlidePhase::SlidingIn);
    assert_eq!(part.progress(), 0.0);

    part.update(true, -0.3);
    part.update(true, f32::NEG_INFINITY);
    assert_eq!(part.progress(), 0.0);

    part.update(true, f32::INFINITY);
    assert_eq!(part.phase(), SlidePhase::SlidingIn);
    assert_eq!(part.progress(), 0.0);
}

#[test]
fn progress_never_leaves_unit_interval() {
    let deltas = [0.07_f32, 0.31, f32::NAN, -1.0, 0.0, 2.5, 0.016, 0.2, 0.49];
    for reversal in [ReversalMode::Restart, ReversalMode::Mirror] {
        let mut part = animator().with_reversal(reversal);
        for i in 0..200 {
            let should_show = (i / 3) % 2 == 0;
            part.update(should_show, deltas[i % deltas.len()]);
            let progress = part.progress();
            assert!((0.0..=1.0).contains(&progress), "{reversal:?}: progress {progress}");
        }
    }
}

// ============================================================================
// Reversal
// ============================================================================

#[test]
fn restart_finishes_current_slide_before_reversing() {
    let mut part = animator();
    part.update(true, 0.25);
    assert_eq!(part.phase(), SlidePhase::SlidingIn);

    // Predicate flips mid-slide: the slide in still completes.
    part.update(false, 0.125);
    assert_eq!(part.phase(), SlidePhase::SlidingIn);
    part.update(false, 0.125);
    assert_eq!(part.phase(), SlidePhase::Visible);

    // Next tick starts the slide out from progress 0.
    let pose = part.update(false, 0.125);
    assert_eq!(part.phase(), SlidePhase::SlidingOut);
    assert!((part.progress() - 0.25).abs() < EPSILON);
    let expected = track().visible_position.lerp(track().hidden_position(), 0.25);
    assert!(vec3_approx(pose.position, expected));
}

#[test]
fn mirror_reverses_from_current_pose() {
    let mut part = animator().with_reversal(ReversalMode::Mirror);
    let before = part.update(true, 0.125);

    let after = part.update(false, 0.0);

    assert_eq!(part.phase(), SlidePhase::SlidingOut);
    assert!((part.progress() - 0.75).abs() < EPSILON);
    assert!(vec3_approx(before.position, after.position));
}

#[test]
fn mirror_round_trip_settles_hidden() {
    let mut part = animator().with_reversal(ReversalMode::Mirror);
    part.update(true, 0.125);

    // Mirrored to 0.75, then advanced by 0.125.
    part.update(false, 0.0625);
    assert_eq!(part.phase(), SlidePhase::SlidingOut);
    assert!((part.progress() - 0.875).abs() < EPSILON);

    part.update(false, 0.0625);
    assert_eq!(part.phase(), SlidePhase::Hidden);
}
