// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::builders::is_blank;
use crate::domain::errors::{StructuralError, ValidationError};
use crate::domain::models::data_entry::{
    DataEntryField, DataEntryListValue, PersonalDataCategory, RecordType,
};

/// 数据录入字段建造器
///
/// 字段通过名称引用其所属的子分组（必填）和区块（可选）。
/// 名称引用在构建期不做存在性校验，由远程系统负责引用完整性。
/// 仅当记录类型已设置为 [`RecordType::List`] 时才允许添加列表值。
#[derive(Debug, Clone)]
pub struct DataEntryFieldBuilder {
    name: String,
    sub_group: String,
    section: Option<String>,
    description: Option<String>,
    mandatory: bool,
    record_type: RecordType,
    personal_data_category: Option<PersonalDataCategory>,
    seq_no: Option<i32>,
    list_values: Vec<DataEntryListValue>,
}

impl DataEntryFieldBuilder {
    /// 创建字段建造器
    ///
    /// # 参数
    ///
    /// * `name` - 字段名称，必填
    /// * `sub_group` - 所属子分组的名称引用，必填
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryFieldBuilder)` - 新建造器，记录类型默认为 Text
    /// * `Err(ValidationError)` - 必填标识字段为空或仅含空白
    pub fn new(
        name: impl Into<String>,
        sub_group: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let sub_group = sub_group.into();

        let mut violations = Vec::new();
        if is_blank(&name) {
            violations.push("field name is required and cannot be blank".to_string());
        }
        if is_blank(&sub_group) {
            violations.push("field sub group reference is required and cannot be blank".to_string());
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(Self {
            name,
            sub_group,
            section: None,
            description: None,
            mandatory: false,
            record_type: RecordType::default(),
            personal_data_category: None,
            seq_no: None,
            list_values: Vec::new(),
        })
    }

    /// 设置所属区块的名称引用
    pub fn set_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// 设置描述
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 设置是否必填
    pub fn set_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// 设置记录类型
    ///
    /// 改回非 List 类型后不再接受列表值；若此前已添加过列表值，
    /// 该矛盾会在 `build()` 时报告为校验错误
    pub fn set_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// 设置个人数据类别
    pub fn set_personal_data_category(mut self, category: PersonalDataCategory) -> Self {
        self.personal_data_category = Some(category);
        self
    }

    /// 设置序号
    pub fn set_seq_no(mut self, seq_no: i32) -> Self {
        self.seq_no = Some(seq_no);
        self
    }

    /// 添加列表值
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryFieldBuilder)` - 列表值已追加到集合末尾
    /// * `Err(StructuralError)` - 字段当前的记录类型不是 List
    pub fn add_list_value(
        mut self,
        list_value: DataEntryListValue,
    ) -> Result<Self, StructuralError> {
        if self.record_type != RecordType::List {
            return Err(StructuralError::ListValuesNotAllowed {
                field: self.name.clone(),
                record_type: self.record_type,
            });
        }
        self.list_values.push(list_value);
        Ok(self)
    }

    /// 冻结为不可变的字段实体
    ///
    /// 执行最终校验，一次性报告全部违规
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryField)` - 校验通过的不可变实体
    /// * `Err(ValidationError)` - 列出所有被违反约束的校验错误
    pub fn build(self) -> Result<DataEntryField, ValidationError> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push("field name is required and cannot be blank".to_string());
        }
        if is_blank(&self.sub_group) {
            violations.push("field sub group reference is required and cannot be blank".to_string());
        }
        if self.record_type != RecordType::List && !self.list_values.is_empty() {
            violations.push(format!(
                "field '{}' has record type '{}' but carries {} list values",
                self.name,
                self.record_type,
                self.list_values.len()
            ));
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(DataEntryField {
            name: self.name,
            sub_group: self.sub_group,
            section: self.section,
            description: self.description,
            mandatory: self.mandatory,
            record_type: self.record_type,
            personal_data_category: self.personal_data_category,
            seq_no: self.seq_no,
            list_values: self.list_values,
        })
    }
}

/// 数据录入列表值建造器
#[derive(Debug, Clone)]
pub struct DataEntryListValueBuilder {
    name: String,
    description: Option<String>,
    seq_no: Option<i32>,
}

impl DataEntryListValueBuilder {
    /// 创建列表值建造器，名称必填
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(ValidationError::single(
                "list value name is required and cannot be blank",
            ));
        }
        Ok(Self {
            name,
            description: None,
            seq_no: None,
        })
    }

    /// 设置描述
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 设置序号
    pub fn set_seq_no(mut self, seq_no: i32) -> Self {
        self.seq_no = Some(seq_no);
        self
    }

    /// 冻结为不可变的列表值实体
    pub fn build(self) -> Result<DataEntryListValue, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::single(
                "list value name is required and cannot be blank",
            ));
        }
        Ok(DataEntryListValue {
            name: self.name,
            description: self.description,
            seq_no: self.seq_no,
        })
    }
}
