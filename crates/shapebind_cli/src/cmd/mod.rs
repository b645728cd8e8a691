/// Document binding command.
pub mod bind;
/// Document tree inspection command.
pub mod inspect;
/// Text tree printing.
pub mod print;
/// JSON rendering of bound trees.
pub mod render;
/// Schema listing command.
pub mod schema;
/// Round-trip re-encoding command.
pub mod unbind;
/// Shared command helpers.
pub mod util;

mod error;

pub use error::{CliError, Result};

#[cfg(test)]
mod test_support;
