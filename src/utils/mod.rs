pub mod args;
pub mod distance;
