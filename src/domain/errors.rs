// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::data_entry::RecordType;
use thiserror::Error;

/// 校验错误
///
/// 构建期校验失败，一次性列出所有被违反的约束而不是只报告
/// 第一条。对当前测试步骤是致命错误，不重试。
#[derive(Debug, Error, PartialEq, Eq)]
#[error("validation failed: {}", .violations.join("; "))]
pub struct ValidationError {
    /// 全部被违反的约束描述
    pub violations: Vec<String>,
}

impl ValidationError {
    /// 由单条违规描述构造校验错误
    pub fn single(violation: impl Into<String>) -> Self {
        Self {
            violations: vec![violation.into()],
        }
    }
}

/// 结构错误
///
/// 组合实体树时违反结构不变式，与校验错误同样致命且不重试
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// 向未激活的分组添加子项
    #[error("group '{group}' is inactive and cannot accept {child_kind} children")]
    InactiveParent {
        /// 分组名称
        group: String,
        /// 被拒绝的子项类别
        child_kind: &'static str,
    },

    /// 向记录类型不是 List 的字段添加列表值
    #[error("field '{field}' has record type '{record_type}' and cannot carry list values")]
    ListValuesNotAllowed {
        /// 字段名称
        field: String,
        /// 字段当前的记录类型
        record_type: RecordType,
    },
}
