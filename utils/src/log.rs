
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::Result;

///
/// Macros to write to the backing file logger.
///
pub use log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Initializes the logstream to write timestamped files named after `filename` into
/// `path`, at the given level specification (e.g. "info" or "debug").
///
/// The returned handle flushes the buffered stream when dropped, so it must be held
/// for the lifetime of the program.
///
pub fn initialize (path: & str, filename: & str, level: & str) -> Result<LoggerHandle>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let handle = Logger::try_with_str(level)?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread)
        .start()?;

    Ok(handle)
}
