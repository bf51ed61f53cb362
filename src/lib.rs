// Limelight: influencer vetting for brand partnerships.
//
// This is the library root. The scoring engine is pure and synchronous —
// it performs no I/O and holds no state between calls. Everything with a
// side effect (file loading, terminal output, export) lives at the edges.

pub mod config;
pub mod contact;
pub mod input;
pub mod model;
pub mod output;
pub mod safety;
pub mod scoring;
