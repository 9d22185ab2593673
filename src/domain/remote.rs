// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// 实体类别枚举
///
/// 远程驱动据此将创建调用路由到目标系统的对应窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// 数据录入分组
    DataEntryGroup,
    /// 数据录入子分组
    DataEntrySubGroup,
    /// 数据录入区块
    DataEntrySection,
    /// 数据录入字段
    DataEntryField,
    /// 数据录入列表值
    DataEntryListValue,
    /// 仓库
    Warehouse,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityKind::DataEntryGroup => write!(f, "data_entry_group"),
            EntityKind::DataEntrySubGroup => write!(f, "data_entry_sub_group"),
            EntityKind::DataEntrySection => write!(f, "data_entry_section"),
            EntityKind::DataEntryField => write!(f, "data_entry_field"),
            EntityKind::DataEntryListValue => write!(f, "data_entry_list_value"),
            EntityKind::Warehouse => write!(f, "warehouse"),
        }
    }
}

/// 已创建记录
///
/// 远程系统对一次创建调用的应答：分配的记录标识符以及
/// 服务端赋值的其余字段
#[derive(Debug, Clone)]
pub struct CreatedRecord {
    /// 远程系统分配的记录标识符
    pub id: String,
    /// 服务端赋值的其余字段，原样保留
    pub assigned: serde_json::Map<String, Value>,
}

/// 远程错误
///
/// 物化调用失败。错误原样向调用方传播，本层不做重试，
/// 也不回滚已经创建的记录。
#[derive(Debug, Error)]
pub enum RemoteError {
    /// 远程系统返回非成功状态码
    #[error("remote call failed with status {status}: {body}")]
    Http {
        /// HTTP状态码
        status: u16,
        /// 应答体原文
        body: String,
    },

    /// 传输层失败
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 应答格式不符合预期
    #[error("invalid response from remote system: {0}")]
    InvalidResponse(String),
}

/// 远程驱动接口
///
/// 领域层对被测系统的端口。apply 过程通过它逐条创建记录，
/// 每次调用在上一次调用的HTTP往返完成后才会发出。
#[async_trait]
pub trait RemoteDriver: Send + Sync {
    /// 在远程系统中创建一条记录
    ///
    /// # 参数
    ///
    /// * `kind` - 实体类别，决定目标窗口
    /// * `attributes` - 记录属性的JSON载荷
    ///
    /// # 返回值
    ///
    /// * `Ok(CreatedRecord)` - 分配了标识符的新记录
    /// * `Err(RemoteError)` - 创建失败
    async fn create(&self, kind: EntityKind, attributes: Value)
        -> Result<CreatedRecord, RemoteError>;
}
