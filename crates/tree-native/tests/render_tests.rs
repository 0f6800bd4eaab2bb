// Host-side tests for per-frame sprite building.

#![allow(dead_code)]
mod render {
    include!("../src/render.rs");
}

use render::{build_instances, MAX_INSTANCES};
use tree_core::{FrameInput, GestureEvent, Scene, SpiralPath, APEX_LOOK_Y};

fn frame_with(gestures: &[GestureEvent], photo_count: usize) -> (Scene, tree_core::FrameOutput) {
    let mut scene = Scene::new(3);
    let mut out = scene.frame(&FrameInput::default());
    for g in gestures {
        out = scene.frame(&FrameInput {
            gestures: std::iter::once(*g).collect(),
            dt: 1.0 / 60.0,
            photo_count,
            ..FrameInput::default()
        });
    }
    (scene, out)
}

#[test]
fn one_sprite_per_bead_star_and_photo() {
    let ribbon = SpiralPath::default().points(120);
    let (_, out) = frame_with(&[], 0);
    let instances = build_instances(&ribbon, &out, 5, 0.0);
    assert_eq!(instances.len(), 120 + 1 + 5);

    // The star sits where the apex camera looks
    let star = instances[120];
    assert_eq!(star.pos, [0.0, APEX_LOOK_Y, 0.0]);
}

#[test]
fn ribbon_spreads_out_in_galaxy() {
    let ribbon = SpiralPath::default().points(10);
    let (_, tree) = frame_with(&[], 0);
    let (_, galaxy) = frame_with(&[GestureEvent::Open], 0);
    let a = build_instances(&ribbon, &tree, 0, 0.0);
    let b = build_instances(&ribbon, &galaxy, 0, 0.0);
    assert_eq!(a[0].pos[0] * 2.2, b[0].pos[0]);
    assert_eq!(a[0].pos[1], b[0].pos[1]);
}

#[test]
fn focused_photo_is_enlarged() {
    let ribbon = SpiralPath::default().points(4);
    let (_, out) = frame_with(&[GestureEvent::Open, GestureEvent::Pinch], 6);
    let focused = out.focused_photo.expect("pinch in galaxy focuses a photo");
    let instances = build_instances(&ribbon, &out, 6, 0.0);
    let photos = &instances[5..];
    assert_eq!(photos.len(), 6);
    for (i, p) in photos.iter().enumerate() {
        if i == focused {
            assert!(p.scale > 1.0);
        } else {
            assert!(p.scale < 1.0);
        }
    }
}

#[test]
fn sprite_count_is_capped() {
    let ribbon = SpiralPath::default().points(MAX_INSTANCES + 50);
    let (_, out) = frame_with(&[], 0);
    assert_eq!(build_instances(&ribbon, &out, 12, 0.0).len(), MAX_INSTANCES);
}
