// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde_json where needed.

pub mod model;
pub mod ports;
