// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::builders::is_blank;
use crate::domain::errors::ValidationError;
use crate::domain::models::warehouse::{Locator, Warehouse};
use serde_json::Value;
use std::collections::BTreeSet;

/// Fixture 属性包允许写入仓库建造器的键
const ALLOWED_KEYS: [&str; 4] = ["name", "value", "locator", "routes"];

/// 仓库建造器
///
/// 仓库没有必填的构造参数：原始用法是先用 Fixture 属性包播种一个
/// 空建造器，再用 setter 覆盖名称和代码。名称和代码在 `build()`
/// 时才成为必填项。
#[derive(Debug, Clone, Default)]
pub struct WarehouseBuilder {
    name: Option<String>,
    value: Option<String>,
    locator: Option<Locator>,
    routes: BTreeSet<String>,
}

impl WarehouseBuilder {
    /// 创建空的仓库建造器
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并 Fixture 属性包
    ///
    /// 通过显式的允许键映射把JSON属性包写入建造器的类型化字段。
    /// 未知键不会被静默吸收，而是全部收集后作为校验错误拒绝。
    ///
    /// # 参数
    ///
    /// * `bag` - Fixture 加载器产出的扁平JSON属性包
    ///
    /// # 返回值
    ///
    /// * `Ok(WarehouseBuilder)` - 属性包已合并，已有值被覆盖
    /// * `Err(ValidationError)` - 存在未知键或类型不匹配的值
    pub fn merge_attributes(
        mut self,
        bag: &serde_json::Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        for (key, value) in bag {
            match key.as_str() {
                "name" => match value.as_str() {
                    Some(name) => self.name = Some(name.to_string()),
                    None => violations.push("attribute 'name' must be a string".to_string()),
                },
                "value" => match value.as_str() {
                    Some(code) => self.value = Some(code.to_string()),
                    None => violations.push("attribute 'value' must be a string".to_string()),
                },
                "locator" => match serde_json::from_value::<Locator>(value.clone()) {
                    Ok(locator) => self.locator = Some(locator),
                    Err(err) => {
                        violations.push(format!("attribute 'locator' is malformed: {}", err))
                    }
                },
                "routes" => match serde_json::from_value::<Vec<String>>(value.clone()) {
                    Ok(routes) => self.routes = routes.into_iter().collect(),
                    Err(err) => {
                        violations.push(format!("attribute 'routes' is malformed: {}", err))
                    }
                },
                unknown => violations.push(format!(
                    "unknown attribute '{}' (allowed: {})",
                    unknown,
                    ALLOWED_KEYS.join(", ")
                )),
            }
        }

        if violations.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError { violations })
        }
    }

    /// 设置仓库名称
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 设置仓库代码
    pub fn set_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// 设置默认库位
    pub fn set_locator(mut self, locator: Locator) -> Self {
        self.locator = Some(locator);
        self
    }

    /// 添加一条发运路线的单据基础类型
    pub fn add_route(mut self, doc_base_type: impl Into<String>) -> Self {
        self.routes.insert(doc_base_type.into());
        self
    }

    /// 冻结为不可变的仓库实体
    ///
    /// # 返回值
    ///
    /// * `Ok(Warehouse)` - 校验通过的不可变实体
    /// * `Err(ValidationError)` - 列出所有被违反约束的校验错误
    pub fn build(self) -> Result<Warehouse, ValidationError> {
        let mut violations = Vec::new();
        if self.name.as_deref().map_or(true, is_blank) {
            violations.push("warehouse name is required and cannot be blank".to_string());
        }
        if self.value.as_deref().map_or(true, is_blank) {
            violations.push("warehouse value is required and cannot be blank".to_string());
        }
        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(Warehouse {
            name: self.name.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            locator: self.locator,
            routes: self.routes,
        })
    }
}
