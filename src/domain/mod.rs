// Domain layer: form models and ports. Adapters and the controller depend on it, never the reverse.

pub mod model;
pub mod ports;
