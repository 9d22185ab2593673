// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 端点约定模块
///
/// 被测系统的 REST 路径常量和窗口路由
pub mod endpoints;

/// REST 驱动模块
///
/// 远程驱动接口的 reqwest 实现
pub mod rest_driver;
