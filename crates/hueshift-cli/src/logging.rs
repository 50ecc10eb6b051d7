use tracing_subscriber::EnvFilter;

use crate::env::EnvReader;

pub const LOG_ENV: &str = "HUESHIFT_LOG";

/// Filter directives: `HUESHIFT_LOG` when set, else a level from `-v` count.
pub fn filter_directives(verbose: u8, env: &dyn EnvReader) -> String {
    if let Some(directives) = env.setting(LOG_ENV) {
        return directives;
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
    .to_string()
}

/// Installs the stderr subscriber. Later calls are no-ops.
pub fn install(verbose: u8, env: &dyn EnvReader) {
    let directives = filter_directives(verbose, env);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
