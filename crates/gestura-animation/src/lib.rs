//! Post-release motion for Gestura
//!
//! Provides the friction-based inertia simulation that lets a released pan
//! coast to a stop.

mod inertia;

pub use inertia::*;
