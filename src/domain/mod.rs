// Domain layer: value types and ports. Concrete adapters live under core/.

pub mod model;
pub mod ports;
