//! Application layer - Use cases and port contracts
//!
//! Services coordinate the domain model and depend on outbound ports, never
//! on concrete infrastructure.

pub mod dto;
pub mod ports;
pub mod services;
