//! Command-line interface definitions and helpers.

mod args;

pub use args::Args;

use clap::error::ErrorKind;

/// Process exit code for a clap parse outcome.
///
/// Help and version output are successful exits; every other parse
/// failure (including usage shown because no arguments were given) is 1.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
