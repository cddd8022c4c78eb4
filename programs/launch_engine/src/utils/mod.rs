pub mod curve;
pub mod limits;
pub mod window;
