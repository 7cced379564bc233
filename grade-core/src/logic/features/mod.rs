//! Features Module - Student Feature Schema
//!
//! Fixed 7-feature layout, the versioned vector built from it, and the typed
//! form input that feeds it.

pub mod input;
pub mod layout;
pub mod vector;


// Re-export common types
pub use input::{StudentInput, YesNo};
pub use layout::{FeatureKind, FeatureSpec, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_SPECS};
pub use vector::FeatureVector;
