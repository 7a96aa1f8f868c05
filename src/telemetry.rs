//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                       | Return Type         |
// |----------------|---------------------------------------------------|---------------------|
// | init           | Installs the global tracing subscriber            | ()                  |
//--------------------------------------------------------------------------------------------------

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is a no-op.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().with_target(false).try_init(),
    };
}
