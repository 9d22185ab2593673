// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含远程系统端点等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 远程系统配置
    pub remote: RemoteSettings,
}

/// 远程系统配置设置
///
/// REST 驱动连接被测系统所需的全部参数
#[derive(Debug, Deserialize)]
pub struct RemoteSettings {
    /// 被测系统的基础URL
    pub base_url: String,
    /// 认证令牌，随每个请求以 Bearer 方式发送（可选）
    pub auth_token: Option<String>,
    /// HTTP请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("remote.base_url", "http://localhost:8080")?
            .set_default("remote.timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SEEDRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
