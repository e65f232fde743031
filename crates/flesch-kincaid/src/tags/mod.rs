//! Part-of-speech tag taxonomies.
//!
//! Two closed vocabularies are supported, one per annotation backend:
//!
//! - [`PennTag`] - the Penn Treebank tag set produced by local taggers
//! - [`UniversalTag`] - the universal-dependency style tag set produced by
//!   cloud syntax services
//!
//! The two are independent: neither is a subset of the other and there is no
//! shared enum spanning both. Parsing is total in both cases. Any string that
//! is not an exact, case-sensitive match for a canonical code maps to the
//! taxonomy's `Unknown` member.

pub mod penn;
pub mod universal;

pub use penn::PennTag;
pub use universal::UniversalTag;
