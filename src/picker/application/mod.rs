pub mod directory;
pub mod fixture;
