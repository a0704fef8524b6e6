pub mod check;
pub mod refresh;
