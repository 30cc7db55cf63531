//! This module contains property based tests which probe grouping invariants on generated villages.

mod property;
