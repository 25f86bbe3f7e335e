use core::fmt::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};

/// `log` backend that formats straight into a byte sink, without allocating.
pub struct PutStrLogger {
    max_level: LevelFilter,
}

impl PutStrLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Writes one record as `"[LEVEL] target: message\n"`.
    ///
    /// # Errors
    /// Propagates the sink's formatting error.
    pub fn write_record<W: Write>(&self, out: &mut W, record: &Record) -> fmt::Result {
        writeln!(
            out,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

#[cfg(feature = "putstr-stub")]
impl PutStrLogger {
    /// Installs the fixture logger at [`crate::config::LOG_LEVEL`]. Call once,
    /// before the first log statement.
    ///
    /// # Errors
    /// Fails if a logger is already installed.
    pub fn init() -> Result<(), log::SetLoggerError> {
        static LOGGER: PutStrLogger = PutStrLogger::new(crate::config::LOG_LEVEL);

        log::set_logger(&LOGGER)?;
        log::set_max_level(LOGGER.max_level);
        Ok(())
    }
}

impl Log for PutStrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    #[cfg(feature = "putstr-stub")]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Best effort; there is nowhere to report a failed write.
        let mut out = crate::putstr::Bytewise(crate::putstr::PutStrSink);
        self.write_record(&mut out, record).ok();
    }

    #[cfg(not(feature = "putstr-stub"))]
    fn log(&self, _record: &Record) {
        // no sink without the stub
    }

    fn flush(&self) {}
}
