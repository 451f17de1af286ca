//! Worship Room: the onboarding quiz that recommends where to start, and the
//! Prayer Wall backed by a fixed in-memory catalog.

pub mod catalog;
pub mod error;
pub mod logging;
pub mod model;
pub mod quiz;
pub mod report;
pub mod time;
pub mod wall;
