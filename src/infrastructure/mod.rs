// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Fixture 模块
///
/// 从静态JSON文件加载属性包
pub mod fixtures;

/// 远程集成模块
///
/// 提供基于 REST 的远程驱动实现和端点约定
pub mod remote;
