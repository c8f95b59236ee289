// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 启动Prometheus HTTP导出端点并注册核心计数器
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled by configuration");
        return;
    }

    let builder = PrometheusBuilder::new();
    let addr: SocketAddr = ([0, 0, 0, 0], settings.port).into();

    // Ignore error if a recorder is already installed (for development/testing)
    if let Err(e) = builder.with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(
        "tenant_resolution_fallback_total",
        "Requests whose Host header did not match an active tenant and were served by the default tenant"
    );
    describe_counter!(
        "directory_lookup_miss_total",
        "Company slug lookups that were not visible for the requesting tenant"
    );
    describe_counter!(
        "review_sync_upserts_total",
        "External review rows inserted or updated by sync batches"
    );

    info!("Metrics exporter listening on {}", addr);
}
