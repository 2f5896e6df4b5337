//! # Elementum Core
//!
//! The generation engine for Elementum - a one-dimensional elementary
//! cellular automaton.
//!
//! This crate contains the presentation-free automaton logic:
//! - Fixed-size binary grid storage with single-cell seeding
//! - The 3-neighbor transition table and the generation pass
//! - Rule handling (raw input parse, decimal-digit preview, base-2 conversion)
//! - Structured error types and logging setup
//!
//! ## Architecture
//!
//! One engine instance owns one grid. The surrounding application constructs
//! a fresh [`Automaton`] per recomputation, optionally overlays the rule
//! preview, calls [`Automaton::run`], and reads cells back for rendering.
//! Everything is synchronous; there are no suspension points and no shared
//! mutable state.
//!
//! ## Example
//!
//! ```
//! use elementum_core::{Automaton, Rule};
//!
//! let rule = Rule::parse("10010110")?;
//! let mut automaton = Automaton::new(5, 7, rule)?;
//! let grid = automaton.run();
//! assert_eq!(grid.row(0), &[0, 0, 0, 1, 0, 0, 0]);
//! # Ok::<(), elementum_core::CoreError>(())
//! ```

/// Automaton construction, the transition table and the generation pass
pub mod engine;
/// Engine error types
pub mod error;
/// Fixed-size cell grid storage
pub mod grid;
/// Rule value handling and binary-to-decimal conversion
pub mod rule;
/// Logging initialization
pub mod telemetry;

pub use engine::{transition, Automaton};
pub use error::{CoreError, Result};
pub use grid::Grid;
pub use rule::{decimal_of, Rule};
pub use telemetry::init_logging;
