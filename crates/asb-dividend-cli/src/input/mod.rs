pub mod coerce;
pub mod file;
pub mod stdin;
