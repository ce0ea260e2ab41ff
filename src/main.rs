use std::path::Path;

use parcelmap_lib::bootstrap::{self, DEFAULT_CONFIG_FILE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::tracing::init_tracing_subscriber()?;

    // 加载配置（文件缺失时使用默认值）
    let config = bootstrap::resolve_config(Path::new(DEFAULT_CONFIG_FILE))?;

    let summary = bootstrap::run_app(config).await?;
    if let Some(message) = summary.status.error_message() {
        tracing::error!(reason = message, "Parcel catalog failed to load");
        std::process::exit(1);
    }

    Ok(())
}
