pub mod args;
pub mod drive;
pub mod preset;
pub mod print;
