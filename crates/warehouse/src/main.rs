use anyhow::Context;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = stockroom_warehouse::WarehouseConfig::from_env();
    tracing::info!(report_format = ?config.report_format, today = %config.today, "starting warehouse run");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockroom_warehouse::demo::run(&config, &mut out).context("warehouse run failed")?;

    Ok(())
}
