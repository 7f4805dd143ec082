// src/api/rest.rs
use axum::Router;
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use anyhow::Result;
use tracing::{error, info};

use super::handlers::system::SERVER_START;
use super::routes::api_routes;
use crate::config::ServerConfig;
use crate::storage::repository::StockDataRepository;

/// 注入請求處理器的共享狀態
///
/// 數據存取層以接口形式注入，而非全局單例，測試時可替換為替身。
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StockDataRepository>,
}

pub struct RestApi {
    server_config: ServerConfig,
    state: AppState,
}

impl RestApi {
    pub fn new(server_config: ServerConfig, state: AppState) -> Self {
        Self {
            server_config,
            state,
        }
    }

    pub async fn start(self) -> Result<()> {
        // 固定服務啟動時間點，供健康檢查回報運行時長
        Lazy::force(&SERVER_START);

        // 建立應用
        let app = self.build_app();

        // 解析地址
        let addr = SocketAddr::from((
            self.server_config.host.parse::<std::net::IpAddr>()?,
            self.server_config.port,
        ));

        info!("Starting REST API server on {}", addr);

        // 啟動服務器，收到關閉信號後讓進行中的請求跑完
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("REST API server stopped");
        Ok(())
    }

    fn build_app(&self) -> Router {
        // 使用模組化的路由
        let api_router = api_routes();

        // 建立應用並逐層添加中間件
        Router::new()
            .merge(api_router)
            .with_state(self.state.clone())
            // 追蹤層
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            // CORS
            .layer(self.build_cors_layer())
            // 壓縮
            .layer(CompressionLayer::new())
            // 超時設置
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                self.server_config.request_timeout(),
            ))
    }

    fn build_cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new()
            .allow_methods(vec![axum::http::Method::GET])
            .allow_headers(vec![axum::http::header::CONTENT_TYPE]);

        // 根據配置設置允許的來源；來源可解析性已在配置驗證階段確認
        if self.server_config.cors_allow_all {
            cors.allow_origin(tower_http::cors::Any)
        } else {
            cors.allow_origin(
                self.server_config
                    .cors_allowed_origins
                    .iter()
                    .map(|s| s.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
        }
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("接收到關閉信號，正在退出..."),
        Err(err) => error!("無法監聽關閉信號: {}", err),
    }
}
