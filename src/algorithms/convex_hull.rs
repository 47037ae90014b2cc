//! Graham scan, split into its stages so callers can run them individually.
//!
//! Points flow through the stages in order:
//! [`prefilter`] → [`pivot`] → [`radial_sort`] → [`scan`].
//! [`graham_scan`] composes them.
pub mod graham_scan;
pub mod pivot;
pub mod prefilter;
pub mod radial_sort;
pub mod scan;
