// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::remote::EntityKind;

/// 窗口CRUD端点前缀
///
/// 记录创建、读取和更新都走 `{WINDOW}/{windowId}[/{recordId}]`
pub const WINDOW: &str = "/rest/api/window";

/// 流程调用端点前缀
///
/// 流程启动走 `{PROCESS}/{processId}/start`
pub const PROCESS: &str = "/rest/api/process";

/// 属性子记录端点
pub const ATTRIBUTE: &str = "/rest/api/pattribute";

/// 返回实体类别对应的窗口标识符
///
/// 这些是被测系统中各主数据窗口的固定标识符
pub fn window_id(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::DataEntryGroup => "540571",
        EntityKind::DataEntrySubGroup => "540572",
        EntityKind::DataEntrySection => "540573",
        EntityKind::DataEntryField => "540574",
        EntityKind::DataEntryListValue => "540575",
        EntityKind::Warehouse => "139",
    }
}
