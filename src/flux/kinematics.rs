//! Per-edge kinematic record shared between the flux and update stages.

use crate::types::EdgeIndex;

/// What an action records about one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeMotion {
    /// Resolved wave (contact) speed along the normal
    pub wave_speed: f64,
    /// Normal speed of the interface
    pub edge_speed: f64,
    /// Whether the edge was treated as Lagrangian (no mass flux)
    pub lagrangian: bool,
}

/// Wave speeds, edge speeds and Lagrangian flags by edge index.
///
/// Cleared and resized by the dispatcher at the start of every flux call;
/// entries not written by a Lagrangian-aware action stay zero (and
/// non-Lagrangian), so the swept-volume correction is a no-op there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeKinematics {
    /// Wave speeds, by edge index
    pub wave_speeds: Vec<f64>,
    /// Interface normal speeds, by edge index
    pub edge_speeds: Vec<f64>,
    /// Lagrangian flags, by edge index
    pub lagrangian: Vec<bool>,
}

impl EdgeKinematics {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroed record for `n_edges` edges.
    pub fn with_edges(n_edges: usize) -> Self {
        let mut k = Self::new();
        k.reset(n_edges);
        k
    }

    /// Zero every entry and resize to `n_edges`.
    pub fn reset(&mut self, n_edges: usize) {
        self.wave_speeds.clear();
        self.wave_speeds.resize(n_edges, 0.0);
        self.edge_speeds.clear();
        self.edge_speeds.resize(n_edges, 0.0);
        self.lagrangian.clear();
        self.lagrangian.resize(n_edges, false);
    }

    /// Number of edges covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.wave_speeds.len()
    }

    /// Whether the record covers no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wave_speeds.is_empty()
    }

    /// Store the motion of one edge.
    #[inline]
    pub fn record(&mut self, edge: EdgeIndex, motion: EdgeMotion) {
        self.wave_speeds[edge.get()] = motion.wave_speed;
        self.edge_speeds[edge.get()] = motion.edge_speed;
        self.lagrangian[edge.get()] = motion.lagrangian;
    }

    /// Motion recorded for one edge.
    #[inline]
    pub fn get(&self, edge: EdgeIndex) -> EdgeMotion {
        EdgeMotion {
            wave_speed: self.wave_speeds[edge.get()],
            edge_speed: self.edge_speeds[edge.get()],
            lagrangian: self.lagrangian[edge.get()],
        }
    }

    /// Number of edges flagged Lagrangian.
    pub fn lagrangian_count(&self) -> usize {
        self.lagrangian.iter().filter(|&&l| l).count()
    }
}
