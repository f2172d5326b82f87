//! Configuration options for building expressions.

/// How the stops of exponential and interval functions are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopOrder {
    /// Use the stops in the order the document lists them. Lookups assume
    /// ascending keys; a document with unordered keys gets unspecified (but
    /// deterministic) results.
    #[default]
    Trust,

    /// Stable-sort the stops by key before building the lookup table.
    Sort,
}

/// Configuration options for [`build_with_options`](crate::evaluator::build_with_options).
///
/// # Example
///
/// ```
/// use stylefn_core::{BuildOptions, StopOrder};
///
/// let options = BuildOptions {
///     stop_order: StopOrder::Sort,
/// };
/// assert_ne!(options, BuildOptions::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Ordering policy for range-lookup stops.
    ///
    /// Default: [`StopOrder::Trust`]
    pub stop_order: StopOrder,
}
