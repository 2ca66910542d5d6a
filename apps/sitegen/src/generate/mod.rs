// Static page generation.
// Implements: view-model load, detail-page rendering, tag index derivation,
// index-page rendering, full-rebuild orchestration.
// Rendering functions are pure; all filesystem work lives in generator.

pub mod detail;
pub mod generator;
pub mod index;
pub mod tags;

// Re-export the public API consumed by main.
pub use generator::{generate, GenerateSummary};
