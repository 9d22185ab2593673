// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::builders::data_entry_field::DataEntryFieldBuilder;
use crate::domain::builders::data_entry_group::DataEntryGroupBuilder;
use crate::domain::builders::warehouse::WarehouseBuilder;
use crate::domain::models::data_entry::{
    DataEntryField, DataEntryGroup, DataEntryListValue, GroupChild,
};
use crate::domain::models::warehouse::Warehouse;
use crate::domain::remote::{CreatedRecord, EntityKind, RemoteDriver, RemoteError};
use serde_json::{json, Value};
use uuid::Uuid;

/// 已物化的子记录
///
/// 一条子记录的远程创建结果，按提交顺序收集
#[derive(Debug, Clone)]
pub struct AppliedChild {
    /// 子记录的实体类别
    pub kind: EntityKind,
    /// 子记录名称
    pub name: String,
    /// 远程系统的应答
    pub record: CreatedRecord,
}

/// 已物化的分组树
#[derive(Debug, Clone)]
pub struct AppliedGroup {
    /// 分组本身的创建应答
    pub group: CreatedRecord,
    /// 全部子记录的创建应答，按实际提交顺序排列
    pub children: Vec<AppliedChild>,
}

/// 已物化的字段树
#[derive(Debug, Clone)]
pub struct AppliedField {
    /// 字段本身的创建应答
    pub field: CreatedRecord,
    /// 全部列表值的创建应答，按实际提交顺序排列
    pub list_values: Vec<AppliedChild>,
}

/// 计算兄弟实体的提交顺序
///
/// 按（序号，插入下标）稳定排序：序号不同者升序，序号相同者保持
/// 插入顺序，没有序号的实体排在所有带序号的实体之后。排序只决定
/// 远程调用的发出顺序，存储顺序以远程系统为准。
fn submission_order<T>(items: &[T], seq_no: impl Fn(&T) -> Option<i32>) -> Vec<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by_key(|item| seq_no(item).map_or(i64::from(i32::MAX) + 1, i64::from));
    ordered
}

impl DataEntryGroup {
    /// 将分组及其全部子项物化到远程系统
    ///
    /// 先创建分组本身，再按序号统一排序后逐个创建子分组和区块，
    /// 使子记录能引用分组被分配的标识符。对 N 个子分组和 M 个区块
    /// 恰好发出 1 + N + M 次创建调用。本操作刻意不保证幂等：
    /// 重复调用会创建重复的远程记录。
    ///
    /// # 返回值
    ///
    /// * `Ok(AppliedGroup)` - 分组与全部子记录的创建应答
    /// * `Err(RemoteError)` - 某次创建调用失败，已创建的记录原样保留
    pub async fn apply(&self, driver: &dyn RemoteDriver) -> Result<AppliedGroup, RemoteError> {
        let apply_id = Uuid::new_v4();
        tracing::info!(%apply_id, group = %self.name, children = self.children.len(), "applying data entry group");

        let group = driver
            .create(EntityKind::DataEntryGroup, group_attributes(self))
            .await?;
        tracing::debug!(%apply_id, id = %group.id, "data entry group created");

        let mut children = Vec::with_capacity(self.children.len());
        for child in submission_order(&self.children, GroupChild::seq_no) {
            let (kind, attributes) = match child {
                GroupChild::SubGroup(sub_group) => (
                    EntityKind::DataEntrySubGroup,
                    json!({
                        "Name": sub_group.name,
                        "TabName": sub_group.tab_name,
                        "Description": sub_group.description,
                        "SeqNo": sub_group.seq_no,
                        "DataEntry_Tab_ID": group.id,
                    }),
                ),
                GroupChild::Section(section) => (
                    EntityKind::DataEntrySection,
                    json!({
                        "Name": section.name,
                        "Description": section.description,
                        "SeqNo": section.seq_no,
                        "DataEntry_Tab_ID": group.id,
                    }),
                ),
            };
            let record = driver.create(kind, attributes).await?;
            tracing::debug!(%apply_id, %kind, name = child.name(), id = %record.id, "group child created");
            children.push(AppliedChild {
                kind,
                name: child.name().to_string(),
                record,
            });
        }

        Ok(AppliedGroup { group, children })
    }
}

impl DataEntryField {
    /// 将字段及其全部列表值物化到远程系统
    ///
    /// 先创建字段本身，再按序号排序后逐个创建列表值。对 L 个列表值
    /// 恰好发出 1 + L 次创建调用。与分组一样不保证幂等。
    ///
    /// # 返回值
    ///
    /// * `Ok(AppliedField)` - 字段与全部列表值的创建应答
    /// * `Err(RemoteError)` - 某次创建调用失败，已创建的记录原样保留
    pub async fn apply(&self, driver: &dyn RemoteDriver) -> Result<AppliedField, RemoteError> {
        let apply_id = Uuid::new_v4();
        tracing::info!(%apply_id, field = %self.name, list_values = self.list_values.len(), "applying data entry field");

        let field = driver
            .create(EntityKind::DataEntryField, field_attributes(self))
            .await?;
        tracing::debug!(%apply_id, id = %field.id, "data entry field created");

        let mut list_values = Vec::with_capacity(self.list_values.len());
        for list_value in submission_order(&self.list_values, |value: &DataEntryListValue| {
            value.seq_no
        }) {
            let record = driver
                .create(
                    EntityKind::DataEntryListValue,
                    json!({
                        "Name": list_value.name,
                        "Description": list_value.description,
                        "SeqNo": list_value.seq_no,
                        "DataEntry_Field_ID": field.id,
                    }),
                )
                .await?;
            tracing::debug!(%apply_id, name = %list_value.name, id = %record.id, "list value created");
            list_values.push(AppliedChild {
                kind: EntityKind::DataEntryListValue,
                name: list_value.name.clone(),
                record,
            });
        }

        Ok(AppliedField { field, list_values })
    }
}

impl Warehouse {
    /// 将仓库物化到远程系统
    ///
    /// 库位和发运路线作为载荷的一部分随仓库提交，整个仓库恰好
    /// 发出一次创建调用。
    ///
    /// # 返回值
    ///
    /// * `Ok(CreatedRecord)` - 仓库的创建应答
    /// * `Err(RemoteError)` - 创建失败
    pub async fn apply(&self, driver: &dyn RemoteDriver) -> Result<CreatedRecord, RemoteError> {
        tracing::info!(warehouse = %self.name, "applying warehouse");
        driver
            .create(EntityKind::Warehouse, warehouse_attributes(self))
            .await
    }
}

impl DataEntryGroupBuilder {
    /// 构建并物化的便捷透传
    ///
    /// 等价于 `build()` 后在实体上调用 `apply()`；构建期校验失败时
    /// 不会发出任何远程调用
    pub async fn apply(self, driver: &dyn RemoteDriver) -> anyhow::Result<AppliedGroup> {
        let group = self.build()?;
        Ok(group.apply(driver).await?)
    }
}

impl DataEntryFieldBuilder {
    /// 构建并物化的便捷透传
    pub async fn apply(self, driver: &dyn RemoteDriver) -> anyhow::Result<AppliedField> {
        let field = self.build()?;
        Ok(field.apply(driver).await?)
    }
}

impl WarehouseBuilder {
    /// 构建并物化的便捷透传
    pub async fn apply(self, driver: &dyn RemoteDriver) -> anyhow::Result<CreatedRecord> {
        let warehouse = self.build()?;
        Ok(warehouse.apply(driver).await?)
    }
}

fn group_attributes(group: &DataEntryGroup) -> Value {
    json!({
        "Name": group.name,
        "TargetTabName": group.target_tab,
        "TabName": group.tab_name,
        "Description": group.description,
        "SeqNo": group.seq_no,
        "IsActive": group.active,
    })
}

fn field_attributes(field: &DataEntryField) -> Value {
    json!({
        "Name": field.name,
        "DataEntry_SubTab": field.sub_group,
        "DataEntry_Section": field.section,
        "Description": field.description,
        "IsMandatory": field.mandatory,
        "Type": field.record_type.to_string(),
        "PersonalDataCategory": field.personal_data_category.map(|category| category.to_string()),
        "SeqNo": field.seq_no,
    })
}

fn warehouse_attributes(warehouse: &Warehouse) -> Value {
    json!({
        "Name": warehouse.name,
        "Value": warehouse.value,
        "Locator": warehouse.locator.as_ref().map(|locator| json!({
            "Value": locator.value,
            "X": locator.x,
            "Y": locator.y,
            "Z": locator.z,
        })),
        "Routes": warehouse.routes.iter()
            .map(|route| json!({ "DocBaseType": route }))
            .collect::<Vec<_>>(),
    })
}
