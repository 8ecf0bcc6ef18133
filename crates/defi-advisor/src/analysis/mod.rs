//! Analyzers
//!
//! Pure, synchronous analysis over externally-fetched listings. Each call is
//! independent; the only shared state is the immutable platform registry.

mod platforms;
mod portfolio;

pub use platforms::PlatformDetector;
pub use portfolio::analyze_portfolio;
