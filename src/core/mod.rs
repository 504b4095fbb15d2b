pub mod analysis;
pub mod ballistics;
pub mod window;
