//! Session orchestration on top of the generators: configuration, the
//! interactive galaxy map, and save snapshots.

pub mod config;
pub mod session;
pub mod starmap;

pub use config::GameConfig;
pub use session::Session;
pub use starmap::{MapCommand, MapEvent, StarMap};
