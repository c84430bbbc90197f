//! Tracer and sticker naming registry.

/// Ordered names of the passive tracers and boolean stickers carried by cells.
///
/// The registry fixes the length of every tracer list in the simulation:
/// cell concentrations, extensive tracer masses and tracer fluxes all have
/// exactly `tracer_names.len()` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TracerStickerNames {
    /// Tracer names, in storage order.
    pub tracer_names: Vec<String>,
    /// Sticker names, in storage order.
    pub sticker_names: Vec<String>,
}

impl TracerStickerNames {
    /// Create a registry from tracer and sticker names.
    pub fn new<T, S>(tracers: T, stickers: S) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            tracer_names: tracers.into_iter().map(Into::into).collect(),
            sticker_names: stickers.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of registered tracers.
    #[inline]
    pub fn tracer_count(&self) -> usize {
        self.tracer_names.len()
    }

    /// Position of a tracer in the tracer lists.
    pub fn tracer_position(&self, name: &str) -> Option<usize> {
        self.tracer_names.iter().position(|n| n == name)
    }

    /// Position of a sticker in the sticker lists.
    pub fn sticker_position(&self, name: &str) -> Option<usize> {
        self.sticker_names.iter().position(|n| n == name)
    }
}
