//! 目录浏览与文件展示路由。

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::debug;
use webfs_capabilities::{ContentKind, FileContent, Resource};

use super::error::ApiError;
use super::state::AppState;
use crate::render::render_directory;

const CONTENT_TRANSFER_ENCODING: HeaderName = HeaderName::from_static("content-transfer-encoding");

/// 创建浏览路由：任意 GET 路径都按文件系统路径处理。
pub fn create_browse_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(browse_root))
        .route("/{*path}", get(browse_path))
}

async fn browse_root(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    browse(&state, "/")
}

async fn browse_path(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // 无法解码的路径（如非 UTF-8 的百分号编码）按浏览失败处理
    let Path(path) = path.map_err(|rejection| ApiError::internal(rejection.body_text()))?;
    browse(&state, &format!("/{path}"))
}

/// 列出目录；不是目录时按文件返回内容。
fn browse(state: &AppState, path: &str) -> Result<Response, ApiError> {
    if path.contains("favicon.ico") {
        debug!(path = %path, "ignoring favicon request");
        return Ok(StatusCode::OK.into_response());
    }

    match state.filesystem.open(path)? {
        Resource::Directory(view) => Ok(Html(render_directory(&view)).into_response()),
        Resource::File(content) => Ok(file_response(content)),
    }
}

fn file_response(content: FileContent) -> Response {
    match content.kind {
        ContentKind::Pdf => {
            let disposition =
                HeaderValue::from_str(&format!("inline;filename={}", content.file_name))
                    .unwrap_or_else(|_| HeaderValue::from_static("inline"));
            (
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                    (header::CONTENT_DISPOSITION, disposition),
                    (CONTENT_TRANSFER_ENCODING, HeaderValue::from_static("binary")),
                    // 不支持分段读取
                    (header::ACCEPT_RANGES, HeaderValue::from_static("none")),
                ],
                content.bytes,
            )
                .into_response()
        }
        ContentKind::PlainText => (
            [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
            content.bytes,
        )
            .into_response(),
    }
}
