//! Edge velocities from mesh point velocities.

use glam::DVec2;

use crate::error::AleError;
use crate::mesh::{Edge, Tessellation};

/// Velocity of the face between points `rl` and `rr` moving with `wl` and
/// `wr`, evaluated at the face point `f`.
///
/// The average velocity of the two points plus the correction that keeps
/// the face on the perpendicular bisector as the points move.
///
/// ```text
/// w = (wl + wr)/2 + ((wl - wr)·(f - (rl + rr)/2)) (rr - rl)/|rr - rl|²
/// ```
#[inline]
pub fn face_velocity(rl: DVec2, rr: DVec2, wl: DVec2, wr: DVec2, f: DVec2) -> DVec2 {
    let delta = rr - rl;
    0.5 * (wl + wr) + (wl - wr).dot(f - 0.5 * (rl + rr)) * delta / delta.length_squared()
}

fn point_velocity(tess: &dyn Tessellation, velocities: &[DVec2], edge: &Edge, index: usize) -> DVec2 {
    if tess.is_real(index) {
        return velocities[index];
    }
    let w = velocities[tess.original_index(index)];
    if tess.is_self_edge(edge) {
        // Mirror image across the wall
        let n = tess.edge_normal(edge);
        w - 2.0 * w.dot(n) * n
    } else {
        w
    }
}

/// Velocity of every edge, in edge order.
///
/// `point_velocities` has one entry per real point. Ghost points move like
/// the point they are an image of: mirrored about the edge when both sides
/// are the same cell (a wall), translated otherwise (a periodic image).
///
/// # Example
///
/// ```
/// use ale_rs::boundary::BoundaryKind;
/// use ale_rs::mesh::{PolygonMesh2D, Tessellation};
/// use ale_rs::motion::edge_velocities;
/// use ale_rs::types::Bounds2D;
/// use glam::DVec2;
///
/// let mesh = PolygonMesh2D::uniform_rectangle(
///     Bounds2D::new(0.0, 1.0, 0.0, 1.0), 1, 1, BoundaryKind::Rigid,
/// );
/// let w = edge_velocities(&mesh, &[DVec2::new(0.3, 0.0)]).unwrap();
/// // Wall edges do not move along their normal
/// assert_eq!(w[0].x, 0.0);
/// ```
pub fn edge_velocities(
    tess: &dyn Tessellation,
    point_velocities: &[DVec2],
) -> Result<Vec<DVec2>, AleError> {
    let n = tess.point_count();
    if point_velocities.len() != n {
        return Err(AleError::length_mismatch(
            "point velocities",
            n,
            point_velocities.len(),
        ));
    }
    Ok(tess
        .edges()
        .iter()
        .map(|edge| {
            let (a, b) = edge.neighbors;
            face_velocity(
                tess.mesh_point(a),
                tess.mesh_point(b),
                point_velocity(tess, point_velocities, edge, a),
                point_velocity(tess, point_velocities, edge, b),
                edge.midpoint(),
            )
        })
        .collect())
}
