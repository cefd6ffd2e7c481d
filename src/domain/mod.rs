// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde/chrono; all I/O lives behind the ports.

pub mod model;
pub mod ports;
