//! External program discovery.

mod path;

pub use path::PathToolProbe;
