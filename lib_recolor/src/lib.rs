pub mod codec;
pub mod color;
pub mod convert;
pub mod enumerate;
pub mod report;

use log::*;
use std::io::Write;

pub use crate::codec::{FsCodec, ImageCodec};
pub use crate::color::{pack, parse_hex_color, unpack, ColorParseError, ColorTuple};
pub use crate::convert::{substitute_pixels, Converter, Substitution};
pub use crate::enumerate::{find_files, EnumerateError};
pub use crate::report::{FileReport, FileStatus, RunTotals};

/// Sets up `env_logger` on stderr for this library and the `replace_color`
/// binary. `RUST_LOG` still overrides the given level.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_recolor"), level)
        .filter(Some("replace_color"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
