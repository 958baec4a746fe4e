//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::services::{LoggingOrderSink, OrderSink};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    order_sink: Arc<dyn OrderSink>,
}

impl AppState {
    /// Create a new application state that records submitted orders in the logs.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        Self::with_order_sink(config, pool, Arc::new(LoggingOrderSink))
    }

    /// Create a new application state with a specific order sink.
    #[must_use]
    pub fn with_order_sink(
        config: StorefrontConfig,
        pool: PgPool,
        order_sink: Arc<dyn OrderSink>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                order_sink,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the sink that receives submitted orders.
    #[must_use]
    pub fn order_sink(&self) -> &dyn OrderSink {
        self.inner.order_sink.as_ref()
    }
}
