use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Defaults to Info, overridable through `RUST_LOG`.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    Ok(())
}
