use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::{Matrix4, Point3, Vector3, Vector4};
use xform_core::{
    apply, apply_to_point, compose, dehomogenize, homogenize, look_at, Composition, Mesh, Transform,
};

const ANGLES: [f64; 7] = [-270.0, -90.0, -12.5, 0.0, 30.0, 135.0, 720.0];

fn sample_points() -> Vec<Point3<f64>> {
    vec![
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(-4.5, 0.25, 7.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, -3.0, -1.0),
    ]
}

#[test]
fn rotation_followed_by_its_inverse_is_identity() {
    for angle in ANGLES {
        let m = compose(&[Transform::rotation_z(angle), Transform::rotation_z(-angle)]);
        for p in sample_points() {
            assert_relative_eq!(apply_to_point(&m, &p).unwrap(), p, epsilon = 1e-9);
        }
    }
}

#[test]
fn translations_compose_additively() {
    let t1 = Vector3::new(1.5, -2.0, 4.0);
    let t2 = Vector3::new(-0.5, 7.0, 0.25);
    let composed = compose(&[Transform::translation_vec(&t1), Transform::translation_vec(&t2)]);
    let summed = Transform::translation_vec(&(t1 + t2));
    for p in sample_points() {
        assert_relative_eq!(
            apply_to_point(&composed, &p).unwrap(),
            apply_to_point(&summed, &p).unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn composition_order_matches_sequential_application() {
    let a = Transform::rotation_x(40.0) * Transform::scale(2.0, 1.0, 0.5);
    let b = Transform::translation(3.0, -1.0, 2.0) * Transform::rotation_y(-75.0);
    let m = compose(&[a, b]);
    for p in sample_points() {
        let v = homogenize(&p);
        let sequential = apply(&b, &apply(&a, &[v]))[0];
        assert_relative_eq!(m * v, sequential, epsilon = 1e-12);
    }
}

#[test]
fn dehomogenized_apply_matches_direct_multiply() {
    let m = Transform::translation(1.0, 2.0, 3.0)
        * Transform::rotation_z(17.0)
        * Transform::shear(0.3, xform_core::Axis::X, &[xform_core::Axis::Y]).unwrap();
    for p in sample_points() {
        let direct = m * Vector4::new(p.x, p.y, p.z, 1.0);
        let via_apply = dehomogenize(&apply(&m, &[homogenize(&p)])[0]).unwrap();
        assert_relative_eq!(via_apply, Point3::new(direct.x, direct.y, direct.z), epsilon = 1e-12);
    }
}

#[test]
fn double_reflection_is_identity() {
    for (m, b) in [(1.0, 3.0), (0.0, -2.0), (-2.5, 0.5), (100.0, 7.0), (0.3, 0.0)] {
        let twice = compose(&[Transform::reflect_line_2d(m, b), Transform::reflect_line_2d(m, b)]);
        assert_relative_eq!(twice, Matrix4::identity(), epsilon = 1e-9);
    }
}

#[test]
fn scenario_translate_rotate_scale_point() {
    let m = Transform::translation(4.0, 0.0, 2.0) * Transform::rotation_z(90.0) * Transform::scale(2.0, 3.0, 4.0);
    let out = m * Vector4::new(1.0, 2.0, 3.0, 1.0);
    assert_relative_eq!(out, Vector4::new(-2.0, 2.0, 14.0, 1.0), epsilon = 1e-12);

    let listed = compose(&[
        Transform::scale(2.0, 3.0, 4.0),
        Transform::rotation_z(90.0),
        Transform::translation(4.0, 0.0, 2.0),
    ]);
    assert_relative_eq!(listed, m, epsilon = 1e-12);
}

#[test]
fn scenario_reflect_over_y_equals_x_plus_three() {
    let p = apply_to_point(&Transform::reflect_line_2d(1.0, 3.0), &Point3::new(6.0, 0.0, 0.0)).unwrap();
    assert_relative_eq!(p, Point3::new(-3.0, 9.0, 0.0), epsilon = 1e-12);
}

#[test]
fn scenario_look_at_basis_is_orthonormal() {
    let view = look_at(
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::origin(),
        &Vector3::new(1.0, 1.0, 0.0),
    )
    .unwrap();

    let right: Vector3<f64> = view.fixed_view::<3, 1>(0, 0).into_owned();
    let up: Vector3<f64> = view.fixed_view::<3, 1>(0, 1).into_owned();
    let forward: Vector3<f64> = view.fixed_view::<3, 1>(0, 2).into_owned();

    assert_relative_eq!(forward, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(right.norm(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(up.norm(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(right.dot(&up), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(right.dot(&forward), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(up.dot(&forward), 0.0, epsilon = 1e-12);
}

#[test]
fn scenario_cube_keeps_its_edges() {
    let cube = Mesh::cube(2.0);
    let m = Composition::new()
        .then("scale", Transform::scale(2.0, 1.5, 1.0))
        .then("rotate", Transform::rotation_z(30.0))
        .then("translate", Transform::translation(3.0, 2.0, 1.0))
        .matrix();
    let transformed = cube.transformed(&m);
    let points = transformed.points().unwrap();

    let edges = transformed.edges();
    assert_eq!(edges, cube.edges());
    assert_eq!(edges.len(), 12);
    for (a, b) in edges {
        assert!((points[a] - points[b]).norm() > 1e-6);
    }

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            assert!((points[i] - points[j]).norm() > 1e-6, "vertices {} and {} merged", i, j);
        }
    }
    assert!(m.determinant().abs() > 1e-9);
}
