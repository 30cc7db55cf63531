//! This module contains generic algorithms used by the grouping engine.

pub mod clustering;
pub mod geometry;
pub mod statistics;
