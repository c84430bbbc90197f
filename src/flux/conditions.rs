//! Edge predicates for the condition-action sequence.
//!
//! Conditions inspect the raw neighbor states and the tessellation, never
//! the reconstructed interface values. Sticker names are resolved to
//! positions once, at construction.

use crate::error::AleError;
use crate::solver::TracerStickerNames;

use super::traits::{CellSide, FluxCondition, FluxContext};

fn sticker_position(names: &TracerStickerNames, sticker: &str) -> Result<usize, AleError> {
    names
        .sticker_position(sticker)
        .ok_or_else(|| AleError::UnknownSticker(sticker.to_string()))
}

/// Both neighbors are real cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsBulkEdge;

impl FluxCondition for IsBulkEdge {
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide> {
        let (first, second) = ctx.edge.neighbors;
        (ctx.tess.is_real(first) && ctx.tess.is_real(second)).then_some(CellSide::First)
    }

    fn name(&self) -> &'static str {
        "is_bulk_edge"
    }
}

/// Exactly one neighbor is a ghost; selects the real side.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsBoundaryEdge;

impl FluxCondition for IsBoundaryEdge {
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide> {
        let (first, second) = ctx.edge.neighbors;
        match (ctx.tess.is_real(first), ctx.tess.is_real(second)) {
            (true, false) => Some(CellSide::First),
            (false, true) => Some(CellSide::Second),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "is_boundary_edge"
    }
}

/// Both neighbors carry the sticker.
#[derive(Clone, Copy, Debug)]
pub struct RegularSpecialEdge {
    sticker: usize,
}

impl RegularSpecialEdge {
    /// Condition on the named sticker.
    pub fn new(sticker: &str, names: &TracerStickerNames) -> Result<Self, AleError> {
        Ok(Self {
            sticker: sticker_position(names, sticker)?,
        })
    }
}

impl FluxCondition for RegularSpecialEdge {
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide> {
        (ctx.cell(CellSide::First).sticker(self.sticker)
            && ctx.cell(CellSide::Second).sticker(self.sticker))
        .then_some(CellSide::First)
    }

    fn name(&self) -> &'static str {
        "regular_special_edge"
    }
}

/// At least one neighbor carries the sticker; selects the first side that
/// does.
#[derive(Clone, Copy, Debug)]
pub struct SpecialEdge {
    sticker: usize,
}

impl SpecialEdge {
    /// Condition on the named sticker.
    pub fn new(sticker: &str, names: &TracerStickerNames) -> Result<Self, AleError> {
        Ok(Self {
            sticker: sticker_position(names, sticker)?,
        })
    }
}

impl FluxCondition for SpecialEdge {
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide> {
        [CellSide::First, CellSide::Second]
            .into_iter()
            .find(|&side| ctx.cell(side).sticker(self.sticker))
    }

    fn name(&self) -> &'static str {
        "special_edge"
    }
}

/// Matches every edge; selects the first real side (first side if neither
/// is real).
#[derive(Clone, Copy, Debug, Default)]
pub struct Always;

impl FluxCondition for Always {
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide> {
        Some(ctx.real_side().unwrap_or(CellSide::First))
    }

    fn name(&self) -> &'static str {
        "always"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use crate::equations::IdealGas;
    use crate::mesh::{PolygonMesh2D, Tessellation};
    use crate::solver::ComputationalCell;
    use crate::types::{Bounds2D, EdgeIndex};
    use glam::DVec2;

    fn check(condition: &dyn FluxCondition, stickers: [bool; 2], edge: usize) -> Option<CellSide> {
        let mesh = PolygonMesh2D::uniform_rectangle(
            Bounds2D::new(0.0, 2.0, 0.0, 1.0),
            2,
            1,
            BoundaryKind::Rigid,
        );
        let names = TracerStickerNames::new(Vec::<String>::new(), ["obstacle"]);
        let real: Vec<_> = stickers
            .iter()
            .map(|&s| ComputationalCell::new(1.0, 1.0, DVec2::ZERO).with_stickers(vec![s]))
            .collect();
        let cells = mesh.with_ghost_states(&real).unwrap();
        let eos = IdealGas::default();
        let ctx = FluxContext::new(
            EdgeIndex::new(edge),
            &mesh.edges()[edge],
            &mesh,
            &cells,
            &eos,
            DVec2::ZERO,
            0.0,
            &names,
        );
        condition.evaluate(&ctx)
    }

    #[test]
    fn test_bulk_and_boundary() {
        assert_eq!(check(&IsBulkEdge, [false; 2], 1), Some(CellSide::First));
        assert_eq!(check(&IsBulkEdge, [false; 2], 0), None);
        assert_eq!(check(&IsBoundaryEdge, [false; 2], 0), Some(CellSide::Second));
        assert_eq!(check(&IsBoundaryEdge, [false; 2], 2), Some(CellSide::First));
        assert_eq!(check(&IsBoundaryEdge, [false; 2], 1), None);
    }

    #[test]
    fn test_sticker_conditions() {
        let names = TracerStickerNames::new(Vec::<String>::new(), ["obstacle"]);
        let regular = RegularSpecialEdge::new("obstacle", &names).unwrap();
        let special = SpecialEdge::new("obstacle", &names).unwrap();

        assert_eq!(check(&regular, [true, true], 1), Some(CellSide::First));
        assert_eq!(check(&regular, [true, false], 1), None);
        assert_eq!(check(&special, [false, true], 1), Some(CellSide::Second));
        assert_eq!(check(&special, [true, true], 1), Some(CellSide::First));
        assert_eq!(check(&special, [false, false], 1), None);
    }

    #[test]
    fn test_unknown_sticker() {
        let names = TracerStickerNames::default();
        assert!(matches!(
            SpecialEdge::new("wall", &names),
            Err(AleError::UnknownSticker(s)) if s == "wall"
        ));
    }

    #[test]
    fn test_always_prefers_real_side() {
        assert_eq!(check(&Always, [false; 2], 0), Some(CellSide::Second));
        assert_eq!(check(&Always, [false; 2], 1), Some(CellSide::First));
    }
}
