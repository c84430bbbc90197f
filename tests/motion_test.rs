//! Integration tests for mesh point motion.
//!
//! These tests verify:
//! - The rounding ramp is continuous across its onset band
//! - Points about to cross a wall are slowed to 0.4 of the remaining
//!   distance, together with their first close neighbor
//! - Periodic domains are never clamped
//! - Wall edges do not move along their normal

use ale_rs::mesh::MeshParts;
use ale_rs::motion::rounding_velocity;
use ale_rs::{
    AleError, BoundaryKind, Bounds2D, ComputationalCell, IdealGas, Lagrangian, OuterBoundary,
    PointMotion, PolygonMesh2D, RoundCells, RoundCellsConfig, Tessellation, TracerStickerNames,
    edge_velocities,
};
use approx::assert_relative_eq;
use glam::DVec2;

/// Motion returning fixed velocities.
struct Fixed(Vec<DVec2>);

impl PointMotion for Fixed {
    fn velocities(
        &self,
        _tess: &dyn Tessellation,
        _cells: &[ComputationalCell],
        _time: f64,
        _names: &TracerStickerNames,
    ) -> Result<Vec<DVec2>, AleError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Two neighboring points near the west wall, each at its centre of mass.
fn wall_pair() -> PolygonMesh2D {
    let points = vec![DVec2::new(0.1, 0.5), DVec2::new(0.11, 0.5)];
    let parts = MeshParts {
        centers_of_mass: points.clone(),
        points,
        volumes: vec![0.05, 0.05],
        widths: vec![0.3, 0.3],
        neighbors: vec![vec![1], vec![0]],
        original_indices: vec![0, 1],
        edges: Vec::new(),
        n_real: 2,
    };
    PolygonMesh2D::from_parts(parts).unwrap()
}

fn fixed_velocities(kind: BoundaryKind) -> Vec<DVec2> {
    let mesh = wall_pair();
    let cells = vec![ComputationalCell::new(1.0, 0.6, DVec2::ZERO); 2];
    let names = TracerStickerNames::default();
    let motion = RoundCells::new(
        Fixed(vec![DVec2::new(-1.0, 0.0), DVec2::new(0.05, 0.0)]),
        IdealGas::default(),
        OuterBoundary::new(Bounds2D::new(0.0, 1.0, 0.0, 1.0), kind),
        RoundCellsConfig::new(),
    );
    let mut v = motion.velocities(&mesh, &cells, 0.0, &names).unwrap();
    motion
        .apply_fix(&mesh, &cells, 0.0, 0.1, &mut v, &names)
        .unwrap();
    v
}

#[test]
fn test_rounding_ramp_is_continuous() {
    let config = RoundCellsConfig::new().with_chi(1.0).with_eta(0.1);
    let width = 1.0;
    let eta_r = config.eta * width;
    let samples = 300;
    let mut previous = 0.0;
    for k in 0..=samples {
        let d = eta_r * (0.85 + 0.3 * k as f64 / samples as f64);
        let w = rounding_velocity(DVec2::ZERO, DVec2::new(d, 0.0), width, 1.0, &config);
        assert!(w.x >= previous, "ramp decreased at d = {d}");
        // Slope of the ramp is 1/(0.2 η R) per unit offset
        assert!(w.x - previous <= 0.3 * eta_r / samples as f64 / (0.2 * eta_r) + 1e-12);
        previous = w.x;
    }
    assert_relative_eq!(previous, 1.0, epsilon = 1e-12);
}

#[test]
fn test_overshoot_clamps_point_and_close_neighbor() {
    let v = fixed_velocities(BoundaryKind::Rigid);
    // 2 dt |v| = 0.2 overshoots the 0.1 left to the wall: factor 0.4
    assert_relative_eq!(v[0].x, -0.4, epsilon = 1e-12);
    assert_relative_eq!(v[0].y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(v[1].x, 0.02, epsilon = 1e-12);
}

#[test]
fn test_periodic_domain_is_not_clamped() {
    let v = fixed_velocities(BoundaryKind::Periodic);
    assert_eq!(v, vec![DVec2::new(-1.0, 0.0), DVec2::new(0.05, 0.0)]);
}

#[test]
fn test_wall_edges_stay_put() {
    let bounds = Bounds2D::new(0.0, 1.0, 0.0, 1.0);
    let mesh = PolygonMesh2D::uniform_rectangle(bounds, 4, 4, BoundaryKind::Rigid);
    let real: Vec<_> = (0..16)
        .map(|i| ComputationalCell::new(1.0, 1.0, DVec2::new(0.3, 0.1 * (i % 3) as f64)))
        .collect();
    let cells = mesh.with_ghost_states(&real).unwrap();
    let names = TracerStickerNames::default();
    let motion = RoundCells::new(
        Lagrangian,
        IdealGas::default(),
        OuterBoundary::new(bounds, BoundaryKind::Rigid),
        RoundCellsConfig::new(),
    );

    let mut v = motion.velocities(&mesh, &cells, 0.0, &names).unwrap();
    motion
        .apply_fix(&mesh, &cells, 0.0, 0.01, &mut v, &names)
        .unwrap();
    let w = edge_velocities(&mesh, &v).unwrap();

    let mut walls = 0;
    for (edge, w) in mesh.edges().iter().zip(&w) {
        if mesh.is_self_edge(edge) {
            assert_relative_eq!(w.dot(mesh.edge_normal(edge)), 0.0, epsilon = 1e-14);
            walls += 1;
        }
    }
    assert_eq!(walls, 16);
}
