// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Initialized at most once; repeated calls (e.g. from tests) are no-ops.
static INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,annuaire=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
});

pub fn init_telemetry() {
    Lazy::force(&INIT);
}
