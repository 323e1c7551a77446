//! Shared components for nesting rectangular pieces onto stock sheets:
//! entities, geometry, validation, export and cutting diagrams.

/// Entities to model rectangle nesting on stock sheets
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Partitioning of piece requests into material groups
pub mod grouping;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
