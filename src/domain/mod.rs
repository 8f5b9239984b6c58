// Domain layer: commands, outcomes and the ports the dispatcher talks through.

pub mod model;
pub mod ports;
