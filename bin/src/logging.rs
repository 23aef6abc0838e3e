//! Log output for the CLI.

use tracing_subscriber::EnvFilter;

/// Target of the estimate flow, whose failure logs carry the raw service cause.
const FLOW_TARGET: &str = "reelquote_estimate";

/// Returns the filter directives for the verbosity flags.
///
/// The flow's own logs are only shown with `-v` or more, so a failed request
/// prints nothing but the generic message by default.
fn directives(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    if verbose == 0 {
        format!("{level},{FLOW_TARGET}=off")
    } else {
        level.to_string()
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbose, quiet)));

    // stdout carries the rendered estimate
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelquote_lib::{EstimateFlow, ServiceError};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs a failing request under the given flags and returns the log text.
    fn failure_logs(verbose: u8, quiet: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives(verbose, quiet)))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut flow = EstimateFlow::new();
            let submission = flow.submit("A 30-second explainer video").unwrap();
            flow.resolve(
                submission.ticket,
                Err(ServiceError::Unavailable("tcp connect error".to_string())),
            );
            tracing::warn!("unrelated warning");
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_filter_hides_failure_cause() {
        let logs = failure_logs(0, false);
        assert!(!logs.contains("tcp connect error"));
        assert!(logs.contains("unrelated warning"));
    }

    #[test]
    fn test_quiet_filter_hides_failure_cause() {
        let logs = failure_logs(0, true);
        assert!(!logs.contains("tcp connect error"));
        assert!(!logs.contains("unrelated warning"));
    }

    #[test]
    fn test_verbose_filter_shows_failure_cause() {
        assert!(failure_logs(1, false).contains("tcp connect error"));
    }

    #[test]
    fn test_directives() {
        assert_eq!(directives(0, false), "warn,reelquote_estimate=off");
        assert_eq!(directives(2, false), "debug");
        assert_eq!(directives(3, true), "error");
    }
}
