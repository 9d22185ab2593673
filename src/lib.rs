// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 包含将已构建的实体树物化到远程系统的 apply 逻辑
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、建造器、错误类型和远程驱动接口
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，如 REST 驱动和 Fixture 加载器
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
