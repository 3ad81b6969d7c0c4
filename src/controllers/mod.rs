pub mod follow;
pub mod ports;
pub mod trace;
