//! Tracing setup.
//!
//! The terminal is owned by the UI, so native builds log to a file in the data
//! directory. Web builds log to the browser console.

#[cfg(feature = "native")]
pub use native::init_logging;

#[cfg(feature = "web")]
pub use web::init_logging_web;

#[cfg(feature = "native")]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{self, Read, Seek, SeekFrom, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    pub const LOG_FILE: &str = "compound.log";
    /// Maximum log file size before trimming (5 MB)
    const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
    /// Size kept after trimming (1 MB of most recent logs)
    const KEEP_SIZE: u64 = 1024 * 1024;

    /// Trim the log file to its most recent KEEP_SIZE bytes once it exceeds MAX_LOG_SIZE.
    pub(super) fn rotate_log_if_needed(log_path: &Path) -> io::Result<()> {
        if !log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(log_path)?;
        if metadata.len() <= MAX_LOG_SIZE {
            return Ok(());
        }

        let mut file = File::open(log_path)?;
        let start_pos = metadata.len().saturating_sub(KEEP_SIZE);
        file.seek(SeekFrom::Start(start_pos))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        drop(file);

        // Drop the partial first line
        let skip = buffer
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut file = File::create(log_path)?;
        file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
        file.write_all(&buffer[skip..])?;

        Ok(())
    }

    /// Hands out writers sharing one append-mode log file
    #[derive(Clone)]
    struct LogWriterFactory {
        file: Arc<Mutex<File>>,
    }

    struct LogWriter {
        file: Arc<Mutex<File>>,
    }

    impl Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))?
                .flush()
        }
    }

    impl<'a> MakeWriter<'a> for LogWriterFactory {
        type Writer = LogWriter;

        fn make_writer(&'a self) -> Self::Writer {
            LogWriter {
                file: self.file.clone(),
            }
        }
    }

    /// Initialize logging to `{data_dir}/compound.log`.
    ///
    /// The level applies to this crate; the calculator crate logs at `warn`.
    /// `RUST_LOG` overrides both.
    pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;

        let log_path = data_dir.join(LOG_FILE);
        if let Err(e) = rotate_log_if_needed(&log_path) {
            eprintln!("Warning: Failed to rotate log file: {}", e);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        let writer_factory = LogWriterFactory {
            file: Arc::new(Mutex::new(file)),
        };

        let default_filter = format!("compound={level},compound_core=warn");
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer_factory)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .init();

        tracing::info!(log_path = %log_path.display(), "Compound logging initialized");
        Ok(())
    }
}

#[cfg(feature = "web")]
mod web {
    /// Route tracing output to the browser console.
    pub fn init_logging_web() {
        tracing_wasm::set_as_global_default();
    }
}
