// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;

/// 生成一次测试运行内唯一的名称
///
/// 在前缀后追加毫秒时间戳，避免与共享测试环境中残留的持久
/// 记录撞名。唯一性由调用方负责，建造器本身不做检查。
pub fn unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Utc::now().timestamp_millis())
}
