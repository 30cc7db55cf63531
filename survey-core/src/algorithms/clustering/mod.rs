//! This module contains clustering algorithms working on planar points or generic items.

pub mod dbscan;
pub mod kmeans;
