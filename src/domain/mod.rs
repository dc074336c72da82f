pub mod cylinder;
pub mod errors;
pub mod features;
pub mod geometry;
