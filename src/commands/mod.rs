pub mod check;
pub mod limit_up;
