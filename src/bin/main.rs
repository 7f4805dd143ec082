use anyhow::{anyhow, Result};
use std::sync::Arc;
use stockboard_server::api::rest::{AppState, RestApi};
use stockboard_server::config;
use stockboard_server::storage::database;
use stockboard_server::storage::repository::PgStockDataRepository;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化配置
    let app_config = config::init_config()?;

    // 初始化日誌系統
    let _log_guard = init_logging(&app_config.log)?;

    // 獲取全局資料庫連線池（連不上時直接啟動失敗）
    let db_pool = database::get_db_pool().await?;

    // 組裝注入處理器的共享狀態
    let state = AppState {
        repository: Arc::new(PgStockDataRepository::new(db_pool.clone())),
    };

    info!("伺服器初始化完成，等待請求...");
    info!("監聽端口: {}", app_config.server.port);

    // 啟動REST API，阻塞至收到關閉信號
    let rest_api = RestApi::new(app_config.server.clone(), state);
    rest_api.start().await
}

// 組合日誌過濾器：配置級別作為預設指令，RUST_LOG 可按模組覆寫
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

// 初始化日誌系統
fn init_logging(log_config: &config::LogConfig) -> Result<Option<WorkerGuard>> {
    let level = match log_config.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // 默認為INFO
    };

    // 配置了輸出目錄時寫入每日輪轉文件，否則輸出到標準輸出
    let (writer, guard, ansi) = match &log_config.directory {
        Some(directory) => {
            let file_appender =
                tracing_appender::rolling::daily(directory, &log_config.file_name_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None => (BoxMakeWriter::new(std::io::stdout), None, true),
    };

    let builder = FmtSubscriber::builder()
        .with_env_filter(build_env_filter(level))
        .with_writer(writer)
        .with_ansi(ansi);

    // format 為 json 時逐行輸出 JSON，供日誌管線收集
    if log_config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
            .map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())
            .map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;
    }

    info!("日誌系統初始化完成");
    Ok(guard)
}
