use log::LevelFilter;

/// Routes `log` records to the browser console and panics to `console.error`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init(level: LevelFilter) {
    console_error_panic_hook::set_once();

    if let Some(level) = level.to_level() {
        if console_log::init_with_level(level).is_err() {
            log::debug!("Console logger already installed");
        }
    }
}
