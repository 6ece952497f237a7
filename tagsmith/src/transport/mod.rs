// tagsmith/src/transport/mod.rs

//! Platform NFC channel abstraction and a simulated tag.

pub mod mock;
pub mod traits;

pub use mock::MockTag;
pub use traits::Transport;
