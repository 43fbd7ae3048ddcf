pub mod clean;
pub mod system;
