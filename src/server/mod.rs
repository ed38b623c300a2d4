//! TCP accept loop and per-connection task dispatch.

pub mod listener;
pub mod tracker;

pub use listener::{ListenerError, Server, run};
pub use tracker::{InFlight, InFlightGuard};
