//! hello-listener - minimal HTTP/1.1 responder
//!
//! Core library: the connection handler and the accept loop.

pub mod config;
pub mod http;
pub mod server;
