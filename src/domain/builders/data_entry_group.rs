// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::builders::is_blank;
use crate::domain::errors::{StructuralError, ValidationError};
use crate::domain::models::data_entry::{
    DataEntryGroup, DataEntrySection, DataEntrySubGroup, GroupChild,
};

/// 数据录入分组建造器
///
/// 流式API，逐步累积分组属性和子项，`build()` 时冻结为不可变的
/// [`DataEntryGroup`] 值并做最终校验。setter 消耗并返回建造器自身
/// 以支持链式调用，重复调用时后写入的值生效。
#[derive(Debug, Clone)]
pub struct DataEntryGroupBuilder {
    name: String,
    target_tab: String,
    tab_name: Option<String>,
    description: Option<String>,
    seq_no: Option<i32>,
    active: bool,
    children: Vec<GroupChild>,
}

impl DataEntryGroupBuilder {
    /// 创建分组建造器
    ///
    /// # 参数
    ///
    /// * `name` - 分组名称，必填
    /// * `target_tab` - 目标页签名称，必填
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryGroupBuilder)` - 新建造器，激活标志默认为 true
    /// * `Err(ValidationError)` - 必填标识字段为空或仅含空白
    pub fn new(
        name: impl Into<String>,
        target_tab: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let target_tab = target_tab.into();

        let mut violations = Vec::new();
        if is_blank(&name) {
            violations.push("group name is required and cannot be blank".to_string());
        }
        if is_blank(&target_tab) {
            violations.push("group target tab is required and cannot be blank".to_string());
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(Self {
            name,
            target_tab,
            tab_name: None,
            description: None,
            seq_no: None,
            active: true,
            children: Vec::new(),
        })
    }

    /// 设置页签显示名称
    pub fn set_tab_name(mut self, tab_name: impl Into<String>) -> Self {
        self.tab_name = Some(tab_name.into());
        self
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

    /// 设置激活标志
    ///
    /// 设为 false 后分组不再接受子项；若此前已添加过子项，
    /// 该矛盾会在 `build()` 时报告为校验错误
    pub fn set_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 添加子分组
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryGroupBuilder)` - 子分组已追加到子项集合末尾
    /// * `Err(StructuralError)` - 分组处于未激活状态
    pub fn add_sub_group(
        mut self,
        sub_group: DataEntrySubGroup,
    ) -> Result<Self, StructuralError> {
        self.check_active("sub group")?;
        self.children.push(GroupChild::SubGroup(sub_group));
        Ok(self)
    }

    /// 添加区块
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryGroupBuilder)` - 区块已追加到子项集合末尾
    /// * `Err(StructuralError)` - 分组处于未激活状态
    pub fn add_section(mut self, section: DataEntrySection) -> Result<Self, StructuralError> {
        self.check_active("section")?;
        self.children.push(GroupChild::Section(section));
        Ok(self)
    }

    fn check_active(&self, child_kind: &'static str) -> Result<(), StructuralError> {
        if self.active {
            Ok(())
        } else {
            Err(StructuralError::InactiveParent {
                group: self.name.clone(),
                child_kind,
            })
        }
    }

    /// 冻结为不可变的分组实体
    ///
    /// 执行最终校验，一次性报告全部违规
    ///
    /// # 返回值
    ///
    /// * `Ok(DataEntryGroup)` - 校验通过的不可变实体
    /// * `Err(ValidationError)` - 列出所有被违反约束的校验错误
    pub fn build(self) -> Result<DataEntryGroup, ValidationError> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push("group name is required and cannot be blank".to_string());
        }
        if is_blank(&self.target_tab) {
            violations.push("group target tab is required and cannot be blank".to_string());
        }
        if !self.active && !self.children.is_empty() {
            violations.push(format!(
                "group '{}' is inactive but carries {} children",
                self.name,
                self.children.len()
            ));
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(DataEntryGroup {
            name: self.name,
            target_tab: self.target_tab,
            tab_name: self.tab_name,
            description: self.description,
            seq_no: self.seq_no,
            active: self.active,
            children: self.children,
        })
    }
}

/// 数据录入子分组建造器
#[derive(Debug, Clone)]
pub struct DataEntrySubGroupBuilder {
    name: String,
    tab_name: Option<String>,
    description: Option<String>,
    seq_no: Option<i32>,
}

impl DataEntrySubGroupBuilder {
    /// 创建子分组建造器，名称必填
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(ValidationError::single(
                "sub group name is required and cannot be blank",
            ));
        }
        Ok(Self {
            name,
            tab_name: None,
            description: None,
            seq_no: None,
        })
    }

    /// 设置页签显示名称
    pub fn set_tab_name(mut self, tab_name: impl Into<String>) -> Self {
        self.tab_name = Some(tab_name.into());
        self
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

    /// 冻结为不可变的子分组实体
    pub fn build(self) -> Result<DataEntrySubGroup, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::single(
                "sub group name is required and cannot be blank",
            ));
        }
        Ok(DataEntrySubGroup {
            name: self.name,
            tab_name: self.tab_name,
            description: self.description,
            seq_no: self.seq_no,
        })
    }
}

/// 数据录入区块建造器
#[derive(Debug, Clone)]
pub struct DataEntrySectionBuilder {
    name: String,
    description: Option<String>,
    seq_no: Option<i32>,
}

impl DataEntrySectionBuilder {
    /// 创建区块建造器，名称必填
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(ValidationError::single(
                "section name is required and cannot be blank",
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

    /// 冻结为不可变的区块实体
    pub fn build(self) -> Result<DataEntrySection, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::single(
                "section name is required and cannot be blank",
            ));
        }
        Ok(DataEntrySection {
            name: self.name,
            description: self.description,
            seq_no: self.seq_no,
        })
    }
}
