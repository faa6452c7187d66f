//! Service layer: concurrent game registry over the domain engine.

pub mod games;

pub use games::GameRegistry;
