use std::io::Write;

/// Plain-text logging to stderr: `<timestamp> - <LEVEL> - <message>`.
///
/// `level` is the fallback; directives in `RUST_LOG` take precedence.
pub fn init_logging(level: log::LevelFilter) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {}", e);
    }
}
