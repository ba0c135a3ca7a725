use crate::point::Axis;

/// Errors returned when building or querying an index.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Rectangle bounds that are not finite and strictly increasing on both axes.
    #[error("invalid region: x in ({min_x}, {max_x}], y in ({min_y}, {max_y}] is not strictly increasing")]
    InvalidRegion {
        /// Requested lower x bound.
        min_x: f64,
        /// Requested upper x bound.
        max_x: f64,
        /// Requested lower y bound.
        min_y: f64,
        /// Requested upper y bound.
        max_y: f64,
    },

    /// Point set a tree cannot be built from.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What is wrong with the input.
        reason: &'static str,
    },

    /// A k-d split was attempted on an axis along which every point shares the same coordinate.
    #[error("degenerate split: all points share the same {axis} coordinate")]
    DegenerateSplit {
        /// Axis with zero spread.
        axis: Axis,
    },
}

/// Result type of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) const EMPTY_INPUT: Self = Self::InvalidInput {
        reason: "point set is empty",
    };

    pub(crate) const NON_FINITE_INPUT: Self = Self::InvalidInput {
        reason: "point set contains a non-finite coordinate",
    };
}
