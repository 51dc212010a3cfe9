//! Game orchestration.
//!
//! The controller owns the live position, validates human moves against it
//! and runs the automated side's search on a background worker, publishing
//! each new position whole.

mod controller;

pub use controller::{GameController, SearchJob};
