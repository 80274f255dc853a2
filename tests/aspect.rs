use backdrop_wasm::camera::{Camera, CameraRig, Viewport};
use glam::Vec3;

fn ndc(camera: &Camera, point: Vec3) -> Vec3 {
    camera.view_projection().project_point3(point)
}

#[test]
fn vertical_framing_ignores_width() {
    let rig = CameraRig::looking_down_z(10.0, 75.0);
    let wide = Camera::new(&rig, Viewport::new(1920, 1080));
    let tall = Camera::new(&rig, Viewport::new(1080, 1920));

    for point in [Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -3.5, -4.0), Vec3::new(0.0, 1.0, 5.0)] {
        let a = ndc(&wide, point);
        let b = ndc(&tall, point);
        assert!((a.y - b.y).abs() < 1e-5, "{a:?} vs {b:?}");
    }
}

#[test]
fn horizontal_extent_shrinks_with_aspect() {
    let rig = CameraRig::default();
    let wide = Camera::new(&rig, Viewport::new(2000, 1000));
    let square = Camera::new(&rig, Viewport::new(1000, 1000));
    let point = Vec3::new(1.0, 0.0, 0.0);
    let ratio = ndc(&square, point).x / ndc(&wide, point).x;
    assert!((ratio - 2.0).abs() < 1e-4, "ratio {ratio}");
}

#[test]
fn point_scale_depends_on_height_only() {
    let rig = CameraRig::default();
    let a = Camera::new(&rig, Viewport::new(640, 480));
    let b = Camera::new(&rig, Viewport::new(1920, 480));
    assert_eq!(a.point_scale(480), b.point_scale(480));
    assert!((a.point_scale(960) / a.point_scale(480) - 2.0).abs() < 1e-6);
}

#[test]
fn degenerate_viewport_falls_back_to_square() {
    assert_eq!(Viewport::new(0, 0).aspect(), None);
    let camera = Camera::new(&CameraRig::default(), Viewport::new(300, 0));
    assert_eq!(camera.aspect, 1.0);
}
