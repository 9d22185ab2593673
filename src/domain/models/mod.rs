// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据录入实体模块
///
/// 包含分组、子分组、区块、字段和列表值等实体
pub mod data_entry;

/// 仓库实体模块
///
/// 包含仓库、库位和发运路线等实体
pub mod warehouse;
