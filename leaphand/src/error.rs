use std::path::PathBuf;

/// Errors surfaced by configuration loading and hardware sources.
///
/// The tracker itself never fails: a bad sample only affects its own frame.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("calibration axis `{axis}` has a degenerate range [{min}, {max}]")]
    DegenerateRange {
        axis: &'static str,
        min:  f32,
        max:  f32,
    },

    #[error("grab threshold must be finite, got {0}")]
    InvalidThreshold(f32),

    #[error("sensor connection failed: {0}")]
    Connection(String),

    #[error("failed to spawn frame source thread: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_message() {
        let e = Error::Connection("no device attached".into());
        assert_eq!(e.to_string(), "sensor connection failed: no device attached");
    }
}
