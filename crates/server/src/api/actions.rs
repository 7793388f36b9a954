//! 创建、重命名、删除路由。
//!
//! 请求体总是按原始字节解析 JSON，不依赖 `Content-Type`。解析失败直接返回 400，
//! 不会触达文件系统。

use std::sync::Arc;

use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use serde::de::DeserializeOwned;
use webfs_api_types::{EntryRequest, RenameRequest, SuccessResponse};

use super::error::ApiError;
use super::state::AppState;

/// 创建文件操作路由。
pub fn create_actions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create/folder", post(create_folder))
        .route("/create/file", post(create_file))
        .route("/rename", post(rename))
        .route("/delete", post(delete))
}

/// 创建目录。
async fn create_folder(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request: EntryRequest = decode_request(&body)?;
    state.filesystem.create_folder(&request.path, &request.name)?;
    Ok(Json(SuccessResponse::ok()))
}

/// 创建空文件。
async fn create_file(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request: EntryRequest = decode_request(&body)?;
    state.filesystem.create_file(&request.path, &request.name)?;
    Ok(Json(SuccessResponse::ok()))
}

/// 重命名，目标目录中已有同名条目时拒绝。
async fn rename(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request: RenameRequest = decode_request(&body)?;
    state
        .filesystem
        .rename_entry(&request.path, &request.name, &request.new_name)?;
    Ok(Json(SuccessResponse::ok()))
}

/// 递归删除。
async fn delete(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request: EntryRequest = decode_request(&body)?;
    state.filesystem.delete_entry(&request.path, &request.name)?;
    Ok(Json(SuccessResponse::ok()))
}

fn decode_request<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::bad_request(err.to_string()))
}
