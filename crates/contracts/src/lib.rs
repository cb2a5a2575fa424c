pub mod resources;
pub mod shared;
