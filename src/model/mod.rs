pub mod features;
pub mod limits;
pub mod prayer_wall;
pub mod quiz;
