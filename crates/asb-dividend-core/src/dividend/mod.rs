pub mod chart;
pub mod simulator;
