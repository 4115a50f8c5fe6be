// Domain layer: core models and ports. No dependency on concrete HTTP or filesystem code.

pub mod model;
pub mod ports;
