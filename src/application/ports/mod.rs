//! Ports - Contracts between the application core and the outside world

pub mod outbound;
