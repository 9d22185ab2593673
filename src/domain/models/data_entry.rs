// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 数据录入分组实体
///
/// 表示挂载在目标页签（如"Business Partner"）下的一个自定义数据
/// 录入分组。分组拥有一个按插入顺序保存的子集合，其中每个子项
/// 要么是子分组要么是区块；提交顺序由序号跨类别统一决定，因此
/// 两类子项保存在同一个有序集合中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntryGroup {
    /// 分组名称，在一次测试运行内唯一（由调用方追加时间戳保证）
    pub name: String,
    /// 目标页签名称，决定分组挂载到哪个窗口类别
    pub target_tab: String,
    /// 页签显示名称
    pub tab_name: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 序号，仅作为排序提示，不检查唯一性
    pub seq_no: Option<i32>,
    /// 激活标志，未激活的分组不能携带任何子项
    pub active: bool,
    /// 子项集合，按插入顺序保存，子分组与区块混合存放
    pub children: Vec<GroupChild>,
}

impl DataEntryGroup {
    /// 返回分组下的所有子分组，按插入顺序
    pub fn sub_groups(&self) -> impl Iterator<Item = &DataEntrySubGroup> {
        self.children.iter().filter_map(|child| match child {
            GroupChild::SubGroup(sub_group) => Some(sub_group),
            GroupChild::Section(_) => None,
        })
    }

    /// 返回分组下的所有区块，按插入顺序
    pub fn sections(&self) -> impl Iterator<Item = &DataEntrySection> {
        self.children.iter().filter_map(|child| match child {
            GroupChild::Section(section) => Some(section),
            GroupChild::SubGroup(_) => None,
        })
    }
}

/// 分组子项
///
/// 分组的直接子记录，子分组和区块共用同一个有序集合，
/// 以便远程提交时按序号跨类别统一排序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GroupChild {
    /// 子分组
    SubGroup(DataEntrySubGroup),
    /// 区块
    Section(DataEntrySection),
}

impl GroupChild {
    /// 子项名称
    pub fn name(&self) -> &str {
        match self {
            GroupChild::SubGroup(sub_group) => &sub_group.name,
            GroupChild::Section(section) => &section.name,
        }
    }

    /// 子项序号
    pub fn seq_no(&self) -> Option<i32> {
        match self {
            GroupChild::SubGroup(sub_group) => sub_group.seq_no,
            GroupChild::Section(section) => section.seq_no,
        }
    }
}

/// 数据录入子分组实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntrySubGroup {
    /// 子分组名称
    pub name: String,
    /// 页签显示名称
    pub tab_name: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 序号
    pub seq_no: Option<i32>,
}

/// 数据录入区块实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntrySection {
    /// 区块名称
    pub name: String,
    /// 描述
    pub description: Option<String>,
    /// 序号
    pub seq_no: Option<i32>,
}

/// 数据录入字段实体
///
/// 字段通过名称引用其所属的子分组和区块；名称引用在构建期
/// 不做存在性校验，引用完整性由远程系统负责检查。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntryField {
    /// 字段名称
    pub name: String,
    /// 所属子分组名称引用
    pub sub_group: String,
    /// 所属区块名称引用（可选）
    pub section: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 是否必填
    pub mandatory: bool,
    /// 记录类型，决定字段取值方式，仅 List 类型允许列表值子项
    pub record_type: RecordType,
    /// 个人数据类别标签（可选）
    pub personal_data_category: Option<PersonalDataCategory>,
    /// 序号
    pub seq_no: Option<i32>,
    /// 列表值集合，按插入顺序保存，仅当记录类型为 List 时非空
    pub list_values: Vec<DataEntryListValue>,
}

/// 数据录入列表值实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntryListValue {
    /// 列表值名称
    pub name: String,
    /// 描述
    pub description: Option<String>,
    /// 序号
    pub seq_no: Option<i32>,
}

/// 记录类型枚举
///
/// 描述字段取值方式的封闭枚举，其中 List 类型决定字段
/// 是否允许携带列表值子项。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecordType {
    /// 单行文本
    #[default]
    Text,
    /// 多行文本
    LongText,
    /// 数值
    Number,
    /// 日期
    Date,
    /// 是/否
    YesNo,
    /// 预定义列表值
    List,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordType::Text => write!(f, "Text"),
            RecordType::LongText => write!(f, "Long Text"),
            RecordType::Number => write!(f, "Number"),
            RecordType::Date => write!(f, "Date"),
            RecordType::YesNo => write!(f, "Yes-No"),
            RecordType::List => write!(f, "List"),
        }
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(RecordType::Text),
            "Long Text" => Ok(RecordType::LongText),
            "Number" => Ok(RecordType::Number),
            "Date" => Ok(RecordType::Date),
            "Yes-No" => Ok(RecordType::YesNo),
            "List" => Ok(RecordType::List),
            _ => Err(()),
        }
    }
}

/// 个人数据类别枚举
///
/// 标记字段承载的数据是否属于个人数据及其敏感级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalDataCategory {
    /// 普通个人数据
    Personal,
    /// 敏感个人数据
    SensitivePersonal,
}

impl fmt::Display for PersonalDataCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PersonalDataCategory::Personal => write!(f, "Personal"),
            PersonalDataCategory::SensitivePersonal => write!(f, "Sensitive Personal"),
        }
    }
}

impl FromStr for PersonalDataCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Personal" => Ok(PersonalDataCategory::Personal),
            "Sensitive Personal" => Ok(PersonalDataCategory::SensitivePersonal),
            _ => Err(()),
        }
    }
}
