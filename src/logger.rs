/// Initializes the global logger.
///
/// Verbose runs log everything down to `Debug`; otherwise only warnings and
/// errors reach stderr, progress goes to stdout through `println!`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
