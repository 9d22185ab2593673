// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Fixture 属性包
///
/// 顶层键到JSON值的扁平映射，值本身允许是嵌套对象或数组
/// （例如库位和发运路线）
pub type AttributeBag = serde_json::Map<String, Value>;

/// Fixture 错误
///
/// 加载 Fixture 文件时的失败情况，与其他错误一样对当前
/// 测试步骤致命
#[derive(Debug, Error)]
pub enum FixtureError {
    /// 文件读取失败
    #[error("failed to read fixture file '{path}': {source}")]
    Io {
        /// Fixture 文件路径
        path: String,
        /// 底层IO错误
        #[source]
        source: std::io::Error,
    },

    /// 文件内容不是合法JSON
    #[error("fixture file '{path}' is not valid JSON: {source}")]
    Json {
        /// Fixture 文件路径
        path: String,
        /// 底层解析错误
        #[source]
        source: serde_json::Error,
    },

    /// 文件顶层不是JSON对象
    #[error("fixture file '{path}' must contain a JSON object at the top level")]
    NotAnObject {
        /// Fixture 文件路径
        path: String,
    },
}

/// 加载一个JSON Fixture 文件为属性包
///
/// # 参数
///
/// * `path` - Fixture 文件路径
///
/// # 返回值
///
/// * `Ok(AttributeBag)` - 顶层对象的键值映射
/// * `Err(FixtureError)` - 读取失败、JSON非法或顶层不是对象
pub fn load(path: impl AsRef<Path>) -> Result<AttributeBag, FixtureError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: display_path.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| FixtureError::Json {
        path: display_path.clone(),
        source,
    })?;

    match value {
        Value::Object(bag) => {
            tracing::debug!(path = %display_path, keys = bag.len(), "fixture loaded");
            Ok(bag)
        }
        _ => Err(FixtureError::NotAnObject { path: display_path }),
    }
}
