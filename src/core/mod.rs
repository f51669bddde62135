pub mod flow;
pub mod gate;
pub mod log;
pub mod logic;
