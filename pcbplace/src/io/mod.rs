/// External (serializable) representations of instances and solutions
pub mod ext_repr;

/// Exporting a search outcome to its external representation
pub mod export;

/// Importing an instance from its external representation
pub mod import;

/// Plain text summary of a search outcome
pub mod report;

/// Rendering solutions as SVG
pub mod svg;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
