// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Filter for the operator-facing channel: RUST_LOG when set, otherwise
/// info, so progress messages and record-write warnings always print.
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes log output for a binary.
pub fn init() {
    fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Arc, Mutex},
    };
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn progress_and_warnings_print_without_rust_log() {
        std::env::remove_var("RUST_LOG");
        let capture = Capture::default();
        let subscriber = fmt()
            .with_env_filter(default_filter())
            .with_target(false)
            .with_writer(capture.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Deployed!");
            tracing::warn!("Write file error: permission denied");
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Deployed!"));
        assert!(output.contains("Write file error: permission denied"));
    }
}
