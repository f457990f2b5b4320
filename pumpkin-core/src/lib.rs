pub mod gamemode;
pub mod math;

pub use gamemode::GameMode;
