//! Extensive updaters: apply edge fluxes to the conserved cell records.

use crate::error::AleError;
use crate::flux::EdgeKinematics;
use crate::mesh::{GeometryCache, Tessellation};
use crate::types::EdgeIndex;

use super::state::{ComputationalCell, Extensive, TracerStickerNames};

/// Everything an updater reads for one timestep.
#[derive(Clone, Copy)]
pub struct UpdateContext<'a> {
    /// One flux per edge, in edge order
    pub fluxes: &'a [Extensive],
    /// The tessellation
    pub tess: &'a dyn Tessellation,
    /// Interface areas and cell volumes
    pub cache: &'a GeometryCache,
    /// Timestep
    pub dt: f64,
    /// Cell states at the start of the step, real and ghost
    pub cells: &'a [ComputationalCell],
    /// Simulation time
    pub time: f64,
    /// Tracer and sticker registry
    pub names: &'a TracerStickerNames,
    /// Interface kinematics recorded by the flux stage
    pub kinematics: &'a EdgeKinematics,
}

impl UpdateContext<'_> {
    fn check(&self, extensives: &[Extensive]) -> Result<(), AleError> {
        let n_edges = self.tess.edges().len();
        if self.fluxes.len() != n_edges {
            return Err(AleError::length_mismatch("fluxes", n_edges, self.fluxes.len()));
        }
        if extensives.len() != self.tess.point_count() {
            return Err(AleError::length_mismatch(
                "extensives",
                self.tess.point_count(),
                extensives.len(),
            ));
        }
        self.cache.check(self.tess)?;
        for (i, flux) in self.fluxes.iter().enumerate() {
            flux.check_tracers(self.names, "flux", i)?;
        }
        for (i, ext) in extensives.iter().enumerate() {
            ext.check_tracers(self.names, "extensive", i)?;
        }
        Ok(())
    }
}

/// Applies one timestep of fluxes to the extensive records of the real cells.
pub trait ExtensiveUpdater: Send + Sync {
    /// Update `extensives` (one record per real cell) in place.
    fn update(&self, ctx: &UpdateContext<'_>, extensives: &mut [Extensive]) -> Result<(), AleError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Baseline conservative update.
///
/// For every edge, `flux × area × dt` leaves the first neighbor and enters
/// the second. Ghost sides are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleExtensiveUpdater;

impl ExtensiveUpdater for SimpleExtensiveUpdater {
    fn update(&self, ctx: &UpdateContext<'_>, extensives: &mut [Extensive]) -> Result<(), AleError> {
        ctx.check(extensives)?;
        let tess = ctx.tess;
        for (i, (edge, flux)) in tess.edges().iter().zip(ctx.fluxes).enumerate() {
            let delta = flux * (ctx.cache.areas[i] * ctx.dt);
            if let Some(c) = tess.classify(edge.neighbors.0).real() {
                extensives[c] -= &delta;
            }
            if let Some(c) = tess.classify(edge.neighbors.1).real() {
                extensives[c] += &delta;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

/// Baseline update followed by a swept-volume correction.
///
/// Lagrangian interfaces move with the contact, so the volume each real
/// cell will occupy after the step differs from the cached one by
/// `dV = Σ ±area·dt·edge_speed`. Each edge then transfers the fraction
/// `area·wave_speed·dt / (V + dV)` of the adjacent record: removed from
/// the first neighbor, added to the second. Edges whose two sides are
/// images of the same cell are skipped.
#[derive(Clone, Copy, Debug)]
pub struct LagrangianExtensiveUpdater<B = SimpleExtensiveUpdater> {
    base: B,
}

impl Default for LagrangianExtensiveUpdater {
    fn default() -> Self {
        Self::new(SimpleExtensiveUpdater)
    }
}

impl<B: ExtensiveUpdater> LagrangianExtensiveUpdater<B> {
    /// Wrap a baseline updater.
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: ExtensiveUpdater> ExtensiveUpdater for LagrangianExtensiveUpdater<B> {
    fn update(&self, ctx: &UpdateContext<'_>, extensives: &mut [Extensive]) -> Result<(), AleError> {
        self.base.update(ctx, extensives)?;

        let tess = ctx.tess;
        let edges = tess.edges();
        if ctx.kinematics.len() != edges.len() {
            return Err(AleError::length_mismatch(
                "edge kinematics",
                edges.len(),
                ctx.kinematics.len(),
            ));
        }

        let mut swept = vec![0.0; tess.point_count()];
        for (i, edge) in edges.iter().enumerate() {
            let dv = ctx.cache.areas[i] * ctx.dt * ctx.kinematics.edge_speeds[i];
            if let Some(c) = tess.classify(edge.neighbors.0).real() {
                swept[c.get()] += dv;
            }
            if let Some(c) = tess.classify(edge.neighbors.1).real() {
                swept[c.get()] -= dv;
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            if tess.is_self_edge(edge) {
                log::trace!("Swept-volume correction skips {} (self-edge)", EdgeIndex::new(i));
                continue;
            }
            let transfer = ctx.cache.areas[i] * ctx.kinematics.wave_speeds[i] * ctx.dt;
            if let Some(c) = tess.classify(edge.neighbors.0).real() {
                let fraction = transfer / (ctx.cache.volumes[c.get()] + swept[c.get()]);
                let delta = &extensives[c] * fraction;
                extensives[c] -= &delta;
            }
            if let Some(c) = tess.classify(edge.neighbors.1).real() {
                let fraction = transfer / (ctx.cache.volumes[c.get()] + swept[c.get()]);
                let delta = &extensives[c] * fraction;
                extensives[c] += &delta;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "lagrangian"
    }
}
