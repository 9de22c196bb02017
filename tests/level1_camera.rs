//! Level 1: Camera Basics
//!
//! Tests initial state, viewport resizing, coordinate mapping, wheel zoom
//! and fitting the view to a scene rect.

mod common;

use common::assert_close;
use common::harness::CanvasTestHarness;
use slint_node_canvas::{AffineCamera, AffineTransform, MovementState, Point, Rect};

#[test]
fn test_initial_camera_is_identity() {
    let harness = CanvasTestHarness::new();
    assert_eq!(harness.transform(), AffineTransform::IDENTITY);
    assert_eq!(harness.movement_state(), MovementState::None);
    assert!(harness.selected_ids().is_empty());
}

#[test]
fn test_viewport_resize_updates_camera_and_redraws() {
    let harness = CanvasTestHarness::new();
    harness.ctrl.viewport_resized_callback()(1024.0, 768.0);

    let size = harness.ctrl.view().borrow().camera().viewport_size();
    assert_eq!(size.width, 1024.0);
    assert_eq!(size.height, 768.0);
    assert_eq!(harness.tracker.render_count(), 1);
}

#[test]
fn test_map_round_trip_after_zoom_and_pan() {
    let harness = CanvasTestHarness::new();
    harness.wheel(200.0, 150.0, 0.0, 120.0);
    harness.pan_drag((10.0, 10.0), (70.0, -20.0));

    let scene = harness.map_to_scene(333.0, 444.0);
    let screen = harness.map_from_scene(scene.x, scene.y);
    assert_close(screen.x, 333.0, 1e-3);
    assert_close(screen.y, 444.0, 1e-3);
}

#[test]
fn test_wheel_step_keeps_point_under_cursor() {
    let harness = CanvasTestHarness::new();
    let anchor = harness.map_to_scene(300.0, 200.0);

    harness.wheel(300.0, 200.0, 0.0, 120.0);
    assert_close(harness.scale().0, 1.05, 1e-6);

    let screen = harness.map_from_scene(anchor.x, anchor.y);
    assert_close(screen.x, 300.0, 1e-3);
    assert_close(screen.y, 200.0, 1e-3);
    assert_eq!(harness.tracker.render_count(), 1);
}

#[test]
fn test_wheel_zoom_is_not_clamped() {
    let harness = CanvasTestHarness::new();
    for _ in 0..40 {
        harness.wheel(0.0, 0.0, 0.0, -120.0);
    }
    assert!(harness.scale().0 < 0.2);
}

#[test]
fn test_zero_wheel_delta_is_ignored() {
    let harness = CanvasTestHarness::new();
    harness.wheel(100.0, 100.0, 0.0, 0.0);
    assert_eq!(harness.transform(), AffineTransform::IDENTITY);
    assert_eq!(harness.tracker.render_count(), 0);
}

#[test]
fn test_visible_scene_rect_tracks_camera() {
    let mut cam = AffineCamera::new();
    cam.set_viewport_size(slint::LogicalSize::new(800.0, 600.0));
    cam.set_scale(2.0, 2.0);
    cam.pan(slint_node_canvas::Vector::new(-100.0, -50.0));

    let visible = cam.visible_scene_rect().unwrap();
    assert_eq!(visible, Rect::new(50.0, 25.0, 400.0, 300.0));
}

#[test]
fn test_frame_selected_fits_all_items_when_nothing_selected() {
    let harness = CanvasTestHarness::with_nodes(&[(1, 0.0, 0.0, 100.0, 100.0)]);
    assert!(harness.ctrl.frame_selected());

    // target (-64,-114)-(164,164): 228x278 into 796x596 usable pixels
    let k = 596.0 / 278.0;
    assert_close(harness.scale().0, k, 1e-4);
    assert_close(harness.scale().1, k, 1e-4);

    let center = harness.map_from_scene(50.0, 25.0);
    assert_close(center.x, 400.0, 1e-3);
    assert_close(center.y, 300.0, 1e-3);
}

#[test]
fn test_fit_in_view_drops_shear() {
    let mut cam = AffineCamera::with_transform(AffineTransform::new(1.0, 0.2, 0.3, 1.0, 5.0, 5.0));
    cam.set_viewport_size(slint::LogicalSize::new(400.0, 400.0));
    assert!(cam.fit_in_view(&Rect::new(0.0, 0.0, 100.0, 100.0), 0.0));
    assert!(!cam.transform().has_shear());
    assert_eq!(cam.map_from_scene(Point::new(50.0, 50.0)), Point::new(200.0, 200.0));
}

#[test]
fn test_fit_in_view_rejects_empty_inputs() {
    let mut cam = AffineCamera::new();
    assert!(!cam.fit_in_view(&Rect::new(0.0, 0.0, 10.0, 10.0), 2.0));

    cam.set_viewport_size(slint::LogicalSize::new(400.0, 400.0));
    assert!(!cam.fit_in_view(&Rect::new(0.0, 0.0, 0.0, 10.0), 2.0));
    assert_eq!(*cam.transform(), AffineTransform::IDENTITY);
}
