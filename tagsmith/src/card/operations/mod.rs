// tagsmith/src/card/operations/mod.rs

//! Operations the coordinator dispatches on a tag in the field.

pub mod content;
pub mod protect;
pub mod uid;

pub use content::{read_content, write_content};
pub use protect::{lock, remove_password, set_password};
pub use uid::write_uid;
