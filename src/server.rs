//! 进程启动与监听

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::app::AppState;
use crate::config::Config;
use crate::router::create_router;
use crate::Result;

/// 绑定端口并开始服务，收到退出信号后优雅关闭
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = create_router(config, state);
    let listener = TcpListener::bind(config.bind_address()).await?;

    info!("🚀 Server running on port {} in {} mode", config.port, config.node_env);
    info!("📊 Health check: http://localhost:{}/health", config.port);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("无法监听 Ctrl-C 信号: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("无法监听 SIGTERM 信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到退出信号，开始关闭");
}
