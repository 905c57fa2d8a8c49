//!
//! The benchmark data model.
//!

pub mod algorithm;
pub mod dataset;
pub mod record;
pub mod size;
pub mod trial;
