use super::*;
use crate::geom::GeomCfg;
use nalgebra::{vector, Vector2};

fn square(min: f64, max: f64) -> Obstacle {
    Obstacle::rect(vector![min, min], vector![max, max])
}

#[test]
fn wall_count_is_border_plus_every_edge() {
    let area = Area::new(100.0, 100.0);
    let tri = Obstacle::new(vec![
        vector![10.0, 10.0],
        vector![20.0, 10.0],
        vector![15.0, 18.0],
    ]);
    let obstacles = vec![square(40.0, 60.0), tri];
    let walls = build_walls(area, &obstacles).unwrap();
    let expected = 4 + obstacles.iter().map(|o| o.points.len()).sum::<usize>();
    assert_eq!(walls.len(), expected);
    for (i, w) in walls.iter().enumerate() {
        assert_eq!(w.id, WallId(i));
        assert_ne!(w.a, w.b);
        assert!((w.centroid - (w.a + w.b) * 0.5).norm() < 1e-12);
    }
}

#[test]
fn borders_form_a_loop_and_closing_edge_is_kept() {
    let area = Area::new(80.0, 60.0);
    let walls = build_walls(area, &[square(10.0, 20.0)]).unwrap();
    for k in 0..4 {
        assert_eq!(walls[k].b, walls[(k + 1) % 4].a);
    }
    assert_eq!(walls[0].a, vector![80.0, 0.0]);
    assert_eq!(walls[1].a, vector![80.0, 60.0]);
    // last obstacle edge closes the outline
    assert_eq!(walls[7].a, vector![10.0, 20.0]);
    assert_eq!(walls[7].b, vector![10.0, 10.0]);
}

#[test]
fn empty_area_has_four_linked_corners() {
    let geo = Geometry::build(Area::new(100.0, 100.0), &[] as &[Obstacle], GeomCfg::default())
        .unwrap();
    assert_eq!(geo.walls().len(), 4);
    assert_eq!(geo.endpoints().len(), 4);
    let lower_right = &geo.endpoints()[0];
    assert_eq!(lower_right.position, vector![100.0, 0.0]);
    assert_eq!(lower_right.begins, Some(WallId(0)));
    assert_eq!(lower_right.ends, Some(WallId(3)));
    for e in geo.endpoints() {
        assert!(e.begins.is_some() && e.ends.is_some());
    }
}

#[test]
fn shared_corner_is_one_endpoint_and_last_wall_wins() {
    let a = Obstacle::rect(vector![10.0, 10.0], vector![20.0, 20.0]);
    let b = Obstacle::rect(vector![20.0, 20.0], vector![30.0, 30.0]);
    let geo = Geometry::build(Area::new(100.0, 100.0), &[a, b], GeomCfg::default()).unwrap();
    assert_eq!(geo.walls().len(), 12);
    assert_eq!(geo.endpoints().len(), 11);
    assert!(geo.endpoints().len() < geo.walls().len() * 2);
    let shared = geo
        .endpoints()
        .iter()
        .find(|e| e.position == vector![20.0, 20.0])
        .unwrap();
    assert_eq!(shared.begins, Some(WallId(8)));
    assert_eq!(shared.ends, Some(WallId(11)));
}

#[test]
fn dedup_tolerance_merges_near_duplicates() {
    let a = Obstacle::rect(vector![10.0, 10.0], vector![20.0, 20.0]);
    let b = Obstacle::new(vec![
        vector![20.0 + 1e-12, 20.0],
        vector![30.0, 20.0],
        vector![30.0, 30.0],
    ]);
    let area = Area::new(100.0, 100.0);
    let exact = Geometry::build(area, &[a.clone(), b.clone()], GeomCfg::default()).unwrap();
    assert_eq!(exact.endpoints().len(), 4 + 4 + 3);
    let loose = Geometry::build(
        area,
        &[a, b],
        GeomCfg {
            eps_dedup: 1e-9,
            ..GeomCfg::default()
        },
    )
    .unwrap();
    assert_eq!(loose.endpoints().len(), 4 + 4 + 2);
}

#[test]
fn two_point_obstacle_is_a_double_sided_wall() {
    let seg = vec![vector![30.0, 30.0], vector![70.0, 30.0]];
    let geo = Geometry::build(Area::new(100.0, 100.0), &[seg], GeomCfg::default()).unwrap();
    assert_eq!(geo.walls().len(), 6);
    assert_eq!(geo.endpoints().len(), 6);
    let left = geo.endpoints()[4];
    assert_eq!(left.position, vector![30.0, 30.0]);
    assert_eq!(left.begins, Some(WallId(4)));
    assert_eq!(left.ends, Some(WallId(5)));
}

#[test]
fn malformed_input_is_rejected() {
    let area = Area::new(100.0, 100.0);
    let lone: Vec<Vector2<f64>> = vec![vector![1.0, 1.0]];
    let err = build_walls(area, &[lone]).unwrap_err();
    assert_eq!(
        err,
        SceneError::TooFewPoints {
            obstacle: 0,
            points: 1
        }
    );
    assert!(err.to_string().contains("at least 2"));

    let dup = vec![vector![1.0, 1.0], vector![1.0, 1.0], vector![3.0, 1.0]];
    assert_eq!(
        build_walls(area, &[dup]).unwrap_err(),
        SceneError::DegenerateEdge {
            obstacle: 0,
            edge: 0
        }
    );

    let nan = vec![vector![1.0, 1.0], vector![f64::NAN, 1.0]];
    assert!(matches!(
        build_walls(area, &[nan]),
        Err(SceneError::NonFinite { obstacle: 0, point: 1 })
    ));

    assert!(matches!(
        build_walls(Area::new(0.0, 10.0), &[] as &[Obstacle]),
        Err(SceneError::InvalidArea { .. })
    ));
}

#[test]
fn sorting_helpers_follow_the_light() {
    let geo = Geometry::build(Area::new(100.0, 100.0), &[] as &[Obstacle], GeomCfg::default())
        .unwrap();
    let origin = vector![50.0, 10.0];
    // ids: 0 (100,0), 1 (100,100), 2 (0,100), 3 (0,0)
    assert_eq!(geo.endpoints_by_angle(origin), vec![2, 3, 0, 1]);
    // equal centroid distances keep insertion order
    assert_eq!(geo.walls_by_distance(origin), vec![3, 0, 2, 1]);
}

#[test]
fn line_of_sight_through_a_square() {
    let geo = Geometry::build(
        Area::new(100.0, 100.0),
        &[square(40.0, 60.0)],
        GeomCfg::default(),
    )
    .unwrap();
    let light = vector![50.0, 10.0];
    assert!(!geo.visible(light, vector![50.0, 80.0]));
    assert!(geo.visible(light, vector![10.0, 80.0]));
    // grazing the near corner does not block
    assert!(geo.visible(light, vector![40.0, 40.0]));
    let targets = [vector![10.0, 80.0], vector![50.0, 80.0], vector![90.0, 20.0]];
    let (all, seen) = geo.all_visible_from(light, &targets);
    assert!(!all);
    assert_eq!(seen, vec![targets[0], targets[2]]);
}

#[test]
fn snapshot_is_read_through_accessors() {
    let area = Area::new(80.0, 60.0);
    let cfg = GeomCfg {
        eps_dedup: 1e-9,
        ..GeomCfg::default()
    };
    let geo = Geometry::build(area, &[square(10.0, 20.0)], cfg).unwrap();
    assert_eq!(geo.area(), area);
    assert_eq!(geo.cfg().eps_dedup, 1e-9);
    for (i, w) in geo.walls().iter().enumerate() {
        assert_eq!(geo.wall(WallId(i)), w);
    }
    let copy = geo.clone();
    assert_eq!(copy.walls(), geo.walls());
    assert_eq!(copy.endpoints(), geo.endpoints());
}
