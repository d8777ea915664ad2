/// End-to-end: a cube seen head-on through an orthographic camera
use nalgebra::{Point3, Vector3};
use wireview_core::{draw_line, Camera, Color, Face, MeshModel, PixelBuffer, RendererConfig, Scene, ScreenPoint, WireframeRenderer};

const SIZE: usize = 64;

fn cube_scene() -> Scene {
    // Eye 4 units away: the orthographic view spans [-2, 2], so cube corners
    // at +-1 land exactly on pixels 16 and 48.
    let camera = Camera::orthographic(SIZE as u32, SIZE as u32, Point3::new(0.0, 0.0, 4.0), Point3::origin());
    let mut scene = Scene::new(camera);
    scene.add_model(MeshModel::cube(2.0));
    scene
}

fn render(scene: &Scene) -> WireframeRenderer {
    let mut renderer = WireframeRenderer::new(RendererConfig {
        background: Color::WHITE,
        ..RendererConfig::with_size(SIZE, SIZE)
    });
    renderer.clear();
    renderer.render(scene);
    renderer
}

fn screen(x: f32, y: f32) -> ScreenPoint {
    ScreenPoint::new((16.0 * x + 32.0) as i32, (16.0 * y + 32.0) as i32)
}

#[test]
fn test_cube_matches_golden_outline() {
    let renderer = render(&cube_scene());

    // Golden image: the same edges drawn straight from hand-projected corners.
    let cube = MeshModel::cube(2.0);
    let mut expected = PixelBuffer::new(SIZE, SIZE);
    expected.clear(Color::WHITE);
    for face in 0..cube.face_count() {
        let p: Vec<ScreenPoint> = (0..3)
            .map(|corner| {
                let v = cube.face_vertex(face, corner).unwrap();
                screen(v.x, v.y)
            })
            .collect();
        draw_line(&mut expected, p[0], p[1], Color::BLACK);
        draw_line(&mut expected, p[1], p[2], Color::BLACK);
        draw_line(&mut expected, p[2], p[0], Color::BLACK);
    }

    let lit = renderer.buffer().pixels_not(Color::WHITE);
    assert_eq!(lit, expected.pixels_not(Color::WHITE));

    // Square outline (4 * 32) plus the interior of one shared diagonal (31).
    assert_eq!(lit.len(), 159);
    for &(x, y) in &lit {
        assert!((16..=48).contains(&x) && (16..=48).contains(&y));
    }
    for corner in [(16, 16), (48, 16), (16, 48), (48, 48), (32, 32)] {
        assert!(lit.contains(&corner), "missing {:?}", corner);
    }
    for i in 16..=48 {
        assert_eq!(renderer.buffer().pixel(16, i), Some(Color::BLACK));
        assert_eq!(renderer.buffer().pixel(i, 48), Some(Color::BLACK));
    }
}

#[test]
fn test_small_triangle_exact_pixels() {
    // Corners land on (16, 16), (20, 18) and (16, 18).
    let triangle = MeshModel::new(
        "triangle",
        vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(-0.75, -0.875, 0.0),
            Point3::new(-1.0, -0.875, 0.0),
        ],
        vec![Vector3::new(0.0, 0.0, 1.0)],
        vec![Face::new([1, 2, 3], [1; 3])],
    );
    let camera = Camera::orthographic(SIZE as u32, SIZE as u32, Point3::new(0.0, 0.0, 4.0), Point3::origin());
    let mut scene = Scene::new(camera);
    scene.add_model(triangle);

    let renderer = render(&scene);
    let expected = vec![
        (16, 16),
        (16, 17),
        (17, 17),
        (18, 17),
        (16, 18),
        (17, 18),
        (18, 18),
        (19, 18),
        (20, 18),
    ];
    assert_eq!(renderer.buffer().pixels_not(Color::WHITE), expected);
    assert_eq!(renderer.last_frame().lines_drawn, 3);
}

#[test]
fn test_render_is_reproducible() {
    let scene = cube_scene();
    let first = render(&scene);
    let second = render(&scene);
    assert_eq!(first.buffer(), second.buffer());
    assert_eq!(first.last_frame(), second.last_frame());
    assert_eq!(first.last_frame().faces_drawn, 12);
    assert_eq!(first.last_frame().skipped_primitives, 0);
}

#[test]
fn test_world_translation_shifts_image() {
    let mut scene = cube_scene();
    let reference = render(&scene).buffer().pixels_not(Color::WHITE);

    // One world unit is 16 pixels at this zoom.
    scene.model_mut(0).unwrap().translate_world(0.5, 0.0, 0.0);
    let moved = render(&scene).buffer().pixels_not(Color::WHITE);

    let shifted: Vec<(usize, usize)> = reference.iter().map(|&(x, y)| (x + 8, y)).collect();
    let mut moved_sorted = moved.clone();
    moved_sorted.sort_unstable_by_key(|&(x, y)| (y, x));
    assert_eq!(moved_sorted, shifted);
}

#[test]
fn test_clear_between_frames() {
    let mut scene = cube_scene();
    let mut renderer = render(&scene);
    scene.model_mut(0).unwrap().scale_world(0.5);

    renderer.clear();
    renderer.render(&scene);
    let lit = renderer.buffer().pixels_not(Color::WHITE);
    assert!(lit.iter().all(|&(x, y)| (24..=40).contains(&x) && (24..=40).contains(&y)));
    assert_eq!(renderer.buffer().pixel(16, 16), Some(Color::WHITE));
}
