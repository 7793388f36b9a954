//! API 错误类型。
//!
//! 只返回 HTTP 状态码和纯文本消息。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use webfs_capabilities::FileSystemError;

#[derive(Debug)]
pub struct ApiError {
    message: String,
    status: StatusCode,
}

impl ApiError {
    /// 请求本身有问题（JSON 无法解析、字段缺失等）。
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// 操作失败。
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FileSystemError> for ApiError {
    fn from(err: FileSystemError) -> Self {
        let status = match err {
            FileSystemError::NameExists(_) | FileSystemError::InvalidName(_) => {
                StatusCode::BAD_REQUEST
            }
            FileSystemError::UnsupportedFile(_) | FileSystemError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError {
            message: err.to_string(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "request rejected");
        }
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_map_to_bad_request() {
        let err = ApiError::from(FileSystemError::NameExists("b.txt".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "name already exist");
    }

    #[test]
    fn test_operation_errors_map_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(FileSystemError::Io(io));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "denied");

        let err = ApiError::from(FileSystemError::UnsupportedFile("/x.iso".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
