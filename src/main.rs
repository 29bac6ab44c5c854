use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;
use podcast_studio_server::{
    config::AppConfig, create_router, domain::health::init_start_time, global::init_logging,
    shutdown::shutdown_signal, AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 main 종료까지 유지)
    let _log_guard = init_logging();
    init_start_time();

    // 3. 설정 및 상태
    let config = AppConfig::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let state = AppState::from_config(config)?;

    // 4. 메트릭 레코더 설치 (실패해도 서버는 기동)
    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder, /metrics disabled");
            None
        }
    };

    // 5. 라우터 설정
    let app = create_router(state, metrics_handle);

    // 6. 서버 실행
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}
