use artistic_canvas::id_generator::generate_id;
use artistic_canvas::shape::{self, Shape, ShapeType, factory};
use egui::{Color32, Pos2, Vec2};

const EPS: f32 = 1e-3;

fn create_test_shapes() -> Vec<ShapeType> {
    vec![
        factory::create_circle(generate_id(), Pos2::new(100.0, 100.0), 30.0, Color32::RED),
        factory::create_rectangle(
            generate_id(),
            Pos2::new(200.0, 150.0),
            Vec2::new(60.0, 30.0),
            Color32::GREEN,
        ),
        factory::create_triangle(generate_id(), Pos2::new(300.0, 300.0), 40.0, Color32::BLUE),
    ]
}

fn assert_close(a: Pos2, b: Pos2) {
    assert!((a - b).length() < EPS, "{:?} != {:?}", a, b);
}

#[test]
fn test_shape_creation() {
    let shapes = create_test_shapes();
    assert_eq!(shapes[0].kind().name(), "circle");
    assert_eq!(shapes[1].kind().name(), "rectangle");
    assert_eq!(shapes[2].kind().name(), "triangle");

    assert_eq!(shapes[0].anchor(), Pos2::new(100.0, 100.0));
    assert_eq!(shapes[2].color(), Color32::BLUE);
}

#[test]
fn test_resize_round_trip() {
    for mut shape in create_test_shapes() {
        let before = shape.vertices();
        let anchor = shape.anchor();

        shape.resize(1.1).unwrap();
        assert_close(shape.anchor(), anchor);
        shape.resize(1.0 / 1.1).unwrap();

        for (a, b) in shape.vertices().into_iter().zip(before) {
            assert_close(a, b);
        }
    }
}

#[test]
fn test_resize_keeps_anchor_and_scales_dimensions() {
    let mut shapes = create_test_shapes();
    for shape in &mut shapes {
        shape.resize(2.0).unwrap();
    }

    match &shapes[0] {
        ShapeType::Circle(c) => {
            assert!((c.radius() - 60.0).abs() < EPS);
            assert_eq!(c.center(), Pos2::new(100.0, 100.0));
        }
        other => panic!("expected circle, got {:?}", other.kind()),
    }
    match &shapes[1] {
        ShapeType::Rectangle(r) => {
            assert!((r.size() - Vec2::new(120.0, 60.0)).length() < EPS);
            assert_eq!(r.center(), Pos2::new(200.0, 150.0));
        }
        other => panic!("expected rectangle, got {:?}", other.kind()),
    }
    match &shapes[2] {
        ShapeType::Triangle(t) => {
            assert!((t.size() - 80.0).abs() < EPS);
            assert_eq!(t.origin(), Pos2::new(300.0, 300.0));
        }
        other => panic!("expected triangle, got {:?}", other.kind()),
    }
}

#[test]
fn test_invalid_resize_is_rejected() {
    let mut shapes = create_test_shapes();
    let before = shapes[1].clone();

    let err = shapes[1].resize(0.0).unwrap_err();
    assert!(err.to_string().contains("positive"));
    assert_eq!(shapes[1], before);
}

#[test]
fn test_move_round_trip_is_exact() {
    for mut shape in create_test_shapes() {
        let before = shape.clone();
        shape.translate(Vec2::new(5.0, -5.0));
        assert_ne!(shape, before);
        shape.translate(Vec2::new(-5.0, 5.0));
        assert_eq!(shape, before);
    }
}

#[test]
fn test_rotation_turns_about_the_anchor() {
    let mut shapes = create_test_shapes();
    let rect = &mut shapes[1];
    rect.rotate(90.0);

    assert_eq!(rect.anchor(), Pos2::new(200.0, 150.0));
    // A 60x30 rectangle turned a quarter is 30 wide and 60 tall, plus the outline.
    let bounds = rect.bounds();
    assert!((bounds.width() - 32.0).abs() < EPS);
    assert!((bounds.height() - 62.0).abs() < EPS);

    rect.rotate(-90.0);
    assert!(rect.rotation().abs() < EPS);
}

#[test]
fn test_hit_testing_uses_bounding_boxes() {
    let shapes = create_test_shapes();
    let circle = &shapes[0];

    assert!(circle.contains(Pos2::new(100.0, 100.0)));
    // Corner of the bounding square: outside the circle itself, but still a hit.
    assert!(circle.contains(Pos2::new(128.0, 128.0)));
    assert!(!circle.contains(Pos2::new(140.0, 100.0)));

    let triangle = &shapes[2];
    // Empty space left of the apex, inside the box.
    assert!(triangle.contains(Pos2::new(282.0, 282.0)));
    assert!(!triangle.contains(Pos2::new(250.0, 300.0)));
}

#[test]
fn test_duplicate_is_a_deep_copy_with_new_identity() {
    for mut shape in create_test_shapes() {
        shape.rotate(15.0);
        let copy = shape.duplicate(generate_id());

        assert_ne!(copy.id(), shape.id());
        assert_eq!(copy.kind(), shape.kind());
        assert_eq!(copy.color(), shape.color());
        assert_eq!(copy.rotation(), shape.rotation());
        assert_eq!(copy.vertices(), shape.vertices());
    }
}

#[test]
fn test_circle_vertices_lie_on_radius() {
    let shapes = create_test_shapes();
    let vertices = shapes[0].vertices();
    assert_eq!(vertices.len(), shape::CIRCLE_SEGMENTS);
    for v in vertices {
        assert!(((v - Pos2::new(100.0, 100.0)).length() - 30.0).abs() < EPS);
    }
}
