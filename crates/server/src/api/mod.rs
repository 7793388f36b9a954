//! API 路由模块。

pub mod actions;
pub mod browse;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use actions::create_actions_router;
pub use browse::create_browse_router;
pub use error::ApiError;
pub use state::AppState;

/// 组装完整的路由。固定的操作路径优先于通配的浏览路径。
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_actions_router())
        .merge(create_browse_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
