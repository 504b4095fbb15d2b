pub mod animation;
pub mod paths;
pub mod plot;
pub mod table;
