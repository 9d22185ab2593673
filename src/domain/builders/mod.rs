// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 字段建造器模块
///
/// 包含数据录入字段和列表值的建造器
pub mod data_entry_field;

/// 分组建造器模块
///
/// 包含数据录入分组、子分组和区块的建造器
pub mod data_entry_group;

/// 仓库建造器模块
///
/// 包含仓库建造器及其 Fixture 属性合并逻辑
pub mod warehouse;

/// 判断必填字符串是否为空白
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
