// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 建造器模块
///
/// 为每种实体提供流式链式构造API
pub mod builders;

/// 领域错误模块
///
/// 定义构建期和组合期的错误分类
pub mod errors;

/// 领域模型模块
///
/// 包含主数据实体的不可变值类型
pub mod models;

/// 远程驱动接口模块
///
/// 定义领域层对远程系统的端口，由基础设施层实现
pub mod remote;
