//! 统一的应用状态。

use webfs_capabilities::FileSystemCapabilities;

use crate::config::ServerConfig;

/// 所有路由共享的只读状态。目录视图不在这里缓存，每次请求单独构建。
#[derive(Clone)]
pub struct AppState {
    /// 文件系统能力。
    pub filesystem: FileSystemCapabilities,
}

impl AppState {
    /// 根据配置创建应用状态。
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            filesystem: FileSystemCapabilities::with_denylist(config.denylist.clone()),
        }
    }
}
