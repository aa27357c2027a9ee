use env_logger::Env;

/// Installs the global logger, filtered by `RUST_LOG` or `info` when unset.
///
/// Calling it again, or after another logger was installed, is a no-op.
pub fn init_logging() {
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .try_init()
        .is_ok();
    if installed {
        log::debug!("logging initialized");
    }
}
