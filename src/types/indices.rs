//! Index newtypes for cells and edges.
//!
//! The tessellation addresses both by plain `usize`. Wrapping them keeps an
//! edge position from ever reaching a per-cell array in the flux and update
//! loops.

use std::fmt;

macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw position.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Raw position.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        // Per-item slices (extensive records, fluxes) can be indexed directly
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Real (locally owned) cell.
    ///
    /// Only built for positions below the tessellation's real-cell count;
    /// ghost neighbors stay raw `usize` inside
    /// [`CellRef::Ghost`](crate::mesh::CellRef).
    ///
    /// # Example
    ///
    /// ```
    /// use ale_rs::types::CellIndex;
    ///
    /// let cell = CellIndex::new(7);
    /// assert_eq!(cell.get(), 7);
    /// assert_eq!(cell.to_string(), "cell 7");
    /// ```
    CellIndex,
    "cell "
);

define_index!(
    /// Interface in the tessellation's edge enumeration.
    EdgeIndex,
    "edge "
);
