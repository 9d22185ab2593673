// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 仓库实体
///
/// 表示一条仓库主数据记录。仓库本身是一次远程创建调用；
/// 库位和发运路线作为载荷的一部分随仓库一起提交，不产生
/// 额外的子记录调用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// 仓库名称
    pub name: String,
    /// 仓库代码
    pub value: String,
    /// 默认库位（可选）
    pub locator: Option<Locator>,
    /// 发运路线的单据基础类型集合（可选，集合语义去重）
    pub routes: BTreeSet<String>,
}

/// 库位
///
/// 仓库内的一个存储位置，由代码和三维坐标组成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    /// 库位代码
    pub value: String,
    /// 通道坐标
    pub x: String,
    /// 货架坐标
    pub y: String,
    /// 层级坐标
    pub z: String,
}
