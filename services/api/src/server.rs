use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use carrier_risk::assessment::{
    CarrierCommandService, HttpCallbackPublisher, MyCarrierPacketsClient,
};
use carrier_risk::config::AppConfig;
use carrier_risk::error::AppError;
use carrier_risk::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_command_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateway = Arc::new(MyCarrierPacketsClient::new(&config.upstream)?);
    let callback = Arc::new(HttpCallbackPublisher::new()?);
    let command_service = Arc::new(CarrierCommandService::new(gateway, callback));

    let app = with_command_routes(command_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "carrier risk webhook ready");

    axum::serve(listener, app).await?;
    Ok(())
}
