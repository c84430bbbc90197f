//! Cell rounding: steer mesh points toward their cell's centre of mass.
//!
//! A point r at distance d from its cell's centre of mass s gets the extra
//! velocity
//!
//! ```text
//! w = χ · c · (s - r)/d · ramp(d)
//! ramp(d) = 0                          for d < 0.9 η R
//!         = (d - 0.9 η R)/(0.2 η R)    for 0.9 η R ≤ d ≤ 1.1 η R
//!         = 1                          for d > 1.1 η R
//! ```
//!
//! where R is the cell width and c a velocity scale: the sound speed of the
//! cell, or 0.25 R/dt in cold mode. Once dt is known, points whose two-step
//! advance would leave the domain are slowed down to cover 40% of the
//! remaining distance per step.

use glam::DVec2;

use crate::boundary::OuterBoundary;
use crate::equations::EquationOfState;
use crate::error::AleError;
use crate::mesh::Tessellation;
use crate::solver::{ComputationalCell, TracerStickerNames};

use super::PointMotion;

/// Rounding parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundCellsConfig {
    /// Strength of the correction, as a fraction of the velocity scale
    pub chi: f64,
    /// Offset (relative to the cell width) below which no correction applies
    pub eta: f64,
    /// Use 0.25 R/dt instead of the sound speed as velocity scale
    pub cold: bool,
}

impl Default for RoundCellsConfig {
    fn default() -> Self {
        Self {
            chi: 0.15,
            eta: 0.02,
            cold: false,
        }
    }
}

impl RoundCellsConfig {
    /// Default parameters: χ = 0.15, η = 0.02, sound-speed scaling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the correction strength χ.
    pub fn with_chi(mut self, chi: f64) -> Self {
        self.chi = chi;
        self
    }

    /// Set the offset threshold η.
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Enable or disable cold mode.
    pub fn with_cold(mut self, cold: bool) -> Self {
        self.cold = cold;
        self
    }
}

/// Rounding velocity of a point with the given velocity scale.
///
/// # Example
///
/// ```
/// use ale_rs::motion::{RoundCellsConfig, rounding_velocity};
/// use glam::DVec2;
///
/// let config = RoundCellsConfig::new();
/// // Offset well above 1.1 η R: full correction toward the centre of mass
/// let w = rounding_velocity(DVec2::ZERO, DVec2::new(0.1, 0.0), 1.0, 2.0, &config);
/// assert!((w.x - 0.3).abs() < 1e-12);
///
/// // Offset below 0.9 η R: nothing
/// let w = rounding_velocity(DVec2::ZERO, DVec2::new(0.001, 0.0), 1.0, 2.0, &config);
/// assert_eq!(w, DVec2::ZERO);
/// ```
pub fn rounding_velocity(
    point: DVec2,
    center_of_mass: DVec2,
    width: f64,
    speed: f64,
    config: &RoundCellsConfig,
) -> DVec2 {
    let offset = center_of_mass - point;
    let d = offset.length();
    let onset = 0.9 * config.eta * width;
    if d < onset {
        return DVec2::ZERO;
    }
    let ramp = if d > 1.1 * config.eta * width {
        1.0
    } else {
        (d - onset) / (0.2 * config.eta * width)
    };
    config.chi * speed * offset / d * ramp
}

/// Rounding velocity in cold mode, with velocity scale 0.25 R/dt.
pub fn cold_rounding_velocity(
    point: DVec2,
    center_of_mass: DVec2,
    width: f64,
    dt: f64,
    config: &RoundCellsConfig,
) -> DVec2 {
    rounding_velocity(point, center_of_mass, width, 0.25 * width / dt, config)
}

/// Scale the first close neighbor of `index` by `factor`.
///
/// Close means a different original cell whose point lies within 0.1 of
/// the cell width. Only real neighbors carry a velocity here.
fn limit_neighbor_velocity(
    velocities: &mut [DVec2],
    tess: &dyn Tessellation,
    index: usize,
    factor: f64,
) {
    let r = tess.mesh_point(index);
    let radius = tess.width(index);
    let close = tess
        .neighbors(index)
        .iter()
        .copied()
        .find(|&j| tess.original_index(j) != index && r.distance(tess.mesh_point(j)) < 0.1 * radius);
    if let Some(j) = close {
        if let Some(v) = velocities.get_mut(j) {
            *v *= factor;
        }
    }
}

/// Regularizing wrapper around another point motion.
///
/// # Example
///
/// ```
/// use ale_rs::boundary::{BoundaryKind, OuterBoundary};
/// use ale_rs::equations::IdealGas;
/// use ale_rs::motion::{Eulerian, PointMotion, RoundCells, RoundCellsConfig};
/// use ale_rs::mesh::PolygonMesh2D;
/// use ale_rs::solver::{ComputationalCell, TracerStickerNames};
/// use ale_rs::types::Bounds2D;
/// use glam::DVec2;
///
/// let bounds = Bounds2D::new(0.0, 1.0, 0.0, 1.0);
/// let mesh = PolygonMesh2D::uniform_rectangle(bounds, 4, 4, BoundaryKind::Rigid);
/// let real = vec![ComputationalCell::new(1.0, 1.0, DVec2::ZERO); 16];
/// let cells = mesh.with_ghost_states(&real).unwrap();
///
/// let motion = RoundCells::new(
///     Eulerian,
///     IdealGas::default(),
///     OuterBoundary::new(bounds, BoundaryKind::Rigid),
///     RoundCellsConfig::new(),
/// );
/// let names = TracerStickerNames::default();
/// let mut v = motion.velocities(&mesh, &cells, 0.0, &names).unwrap();
/// motion.apply_fix(&mesh, &cells, 0.0, 0.01, &mut v, &names).unwrap();
///
/// // Points already sit at their centres of mass
/// assert!(v.iter().all(|w| *w == DVec2::ZERO));
/// ```
#[derive(Clone, Debug)]
pub struct RoundCells<P, E> {
    base: P,
    eos: E,
    outer: OuterBoundary,
    config: RoundCellsConfig,
}

impl<P: PointMotion, E: EquationOfState> RoundCells<P, E> {
    /// Wrap `base`.
    pub fn new(base: P, eos: E, outer: OuterBoundary, config: RoundCellsConfig) -> Self {
        Self {
            base,
            eos,
            outer,
            config,
        }
    }

    /// Rounding parameters.
    pub fn config(&self) -> &RoundCellsConfig {
        &self.config
    }

    /// Wrapped point motion.
    pub fn base(&self) -> &P {
        &self.base
    }

    /// Sound-speed rounding term of every real point.
    fn rounding_terms(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        names: &TracerStickerNames,
    ) -> Vec<DVec2> {
        let term = |i: usize| {
            let cell = &cells[i];
            let c = self
                .eos
                .dp2c(cell.density, cell.pressure, &cell.tracers, names);
            rounding_velocity(
                tess.mesh_point(i),
                tess.cell_cm(i),
                tess.width(i),
                c,
                &self.config,
            )
        };
        map_points(tess.point_count(), term)
    }

    /// Cold-mode rounding term of every real point.
    fn cold_terms(&self, tess: &dyn Tessellation, dt: f64) -> Vec<DVec2> {
        let term = |i: usize| {
            cold_rounding_velocity(
                tess.mesh_point(i),
                tess.cell_cm(i),
                tess.width(i),
                dt,
                &self.config,
            )
        };
        map_points(tess.point_count(), term)
    }

    /// Slow down points whose two-step advance crosses a side of the domain.
    ///
    /// Returns the number of clamps applied.
    fn correct_overshoot(&self, tess: &dyn Tessellation, dt: f64, velocities: &mut [DVec2]) -> usize {
        let sides = self.outer.extent();
        let mut clamped = 0;
        for i in 0..velocities.len() {
            let d = sides.distances(tess.mesh_point(i));
            // Re-read the velocity after each clamp, it may have shrunk
            if 2.0 * dt * velocities[i].x > d.east {
                clamp(velocities, tess, i, d.east, dt);
                clamped += 1;
            }
            if -2.0 * dt * velocities[i].x > d.west {
                clamp(velocities, tess, i, d.west, dt);
                clamped += 1;
            }
            if 2.0 * dt * velocities[i].y > d.north {
                clamp(velocities, tess, i, d.north, dt);
                clamped += 1;
            }
            if -2.0 * dt * velocities[i].y > d.south {
                clamp(velocities, tess, i, d.south, dt);
                clamped += 1;
            }
        }
        clamped
    }
}

fn clamp(velocities: &mut [DVec2], tess: &dyn Tessellation, index: usize, distance: f64, dt: f64) {
    let factor = 0.4 * distance / dt / velocities[index].length();
    velocities[index] *= factor;
    limit_neighbor_velocity(velocities, tess, index, factor);
    log::trace!(
        "Clamped point {} to factor {} ({} from the boundary)",
        index,
        factor,
        distance
    );
}

#[cfg(feature = "parallel")]
fn map_points<F>(n: usize, term: F) -> Vec<DVec2>
where
    F: Fn(usize) -> DVec2 + Sync + Send,
{
    use rayon::prelude::*;

    (0..n).into_par_iter().map(term).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_points<F>(n: usize, term: F) -> Vec<DVec2>
where
    F: Fn(usize) -> DVec2,
{
    (0..n).map(term).collect()
}

impl<P: PointMotion, E: EquationOfState> PointMotion for RoundCells<P, E> {
    fn velocities(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        time: f64,
        names: &TracerStickerNames,
    ) -> Result<Vec<DVec2>, AleError> {
        let n = tess.point_count();
        if cells.len() < n {
            return Err(AleError::length_mismatch("cell states", n, cells.len()));
        }
        let mut velocities = self.base.velocities(tess, cells, time, names)?;
        if velocities.len() != n {
            return Err(AleError::length_mismatch(
                "point velocities",
                n,
                velocities.len(),
            ));
        }
        for (v, w) in velocities.iter_mut().zip(self.rounding_terms(tess, cells, names)) {
            *v += w;
        }
        Ok(velocities)
    }

    fn apply_fix(
        &self,
        tess: &dyn Tessellation,
        _cells: &[ComputationalCell],
        _time: f64,
        dt: f64,
        velocities: &mut Vec<DVec2>,
        _names: &TracerStickerNames,
    ) -> Result<(), AleError> {
        velocities.resize(tess.point_count(), DVec2::ZERO);
        if self.config.cold {
            for (v, w) in velocities.iter_mut().zip(self.cold_terms(tess, dt)) {
                *v += w;
            }
        }
        if !self.outer.is_periodic() {
            let clamped = self.correct_overshoot(tess, dt, velocities);
            if clamped > 0 {
                log::debug!("Clamped {} point velocities at the outer boundary", clamped);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "round_cells"
    }
}
