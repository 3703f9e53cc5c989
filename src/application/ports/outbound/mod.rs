//! Outbound ports - Interfaces the application depends on

mod store_port;

pub use store_port::CharacterStorePort;
