pub mod render;
pub mod status;
