// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::RemoteSettings;
use crate::domain::remote::{CreatedRecord, EntityKind, RemoteDriver, RemoteError};
use crate::infrastructure::remote::endpoints;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// REST 驱动
///
/// 远程驱动接口的 reqwest 实现，按被测系统的窗口约定发出
/// 认证的HTTP调用。超时配置在客户端上，本层之上没有任何
/// 超时或取消逻辑。
pub struct RestDriver {
    /// HTTP 客户端
    client: reqwest::Client,
    /// 基础URL，无结尾斜杠
    base_url: String,
    /// Bearer 认证令牌
    auth_token: Option<String>,
}

impl RestDriver {
    /// 创建新的 REST 驱动
    ///
    /// # 参数
    ///
    /// * `base_url` - 被测系统的基础URL
    /// * `auth_token` - Bearer 认证令牌（可选）
    /// * `timeout` - HTTP请求超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(RestDriver)` - 就绪的驱动
    /// * `Err(anyhow::Error)` - 基础URL非法或客户端构建失败
    pub fn new(
        base_url: &str,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("invalid remote base url: {}", base_url))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    /// 从配置创建 REST 驱动
    pub fn from_settings(settings: &RemoteSettings) -> anyhow::Result<Self> {
        Self::new(
            &settings.base_url,
            settings.auth_token.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<Value, RemoteError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// 读取一条窗口记录
    ///
    /// `GET {WINDOW}/{windowId}/{recordId}`
    pub async fn fetch_record(
        &self,
        kind: EntityKind,
        record_id: &str,
    ) -> Result<Value, RemoteError> {
        let path = format!(
            "{}/{}/{}",
            endpoints::WINDOW,
            endpoints::window_id(kind),
            record_id
        );
        self.execute(self.request(reqwest::Method::GET, &path)).await
    }

    /// 更新一条窗口记录
    ///
    /// `PATCH {WINDOW}/{windowId}/{recordId}`
    pub async fn update_record(
        &self,
        kind: EntityKind,
        record_id: &str,
        attributes: Value,
    ) -> Result<Value, RemoteError> {
        let path = format!(
            "{}/{}/{}",
            endpoints::WINDOW,
            endpoints::window_id(kind),
            record_id
        );
        self.execute(self.request(reqwest::Method::PATCH, &path).json(&attributes))
            .await
    }

    /// 读取记录某字段的动作下拉值
    ///
    /// `GET {WINDOW}/{windowId}/{recordId}/field/{field}/dropdown`
    pub async fn dropdown_values(
        &self,
        kind: EntityKind,
        record_id: &str,
        field: &str,
    ) -> Result<Vec<Value>, RemoteError> {
        let path = format!(
            "{}/{}/{}/field/{}/dropdown",
            endpoints::WINDOW,
            endpoints::window_id(kind),
            record_id,
            field
        );
        let body = self.execute(self.request(reqwest::Method::GET, &path)).await?;
        match body {
            Value::Array(values) => Ok(values),
            Value::Object(mut object) => match object.remove("values") {
                Some(Value::Array(values)) => Ok(values),
                _ => Err(RemoteError::InvalidResponse(
                    "dropdown response carries no 'values' array".to_string(),
                )),
            },
            _ => Err(RemoteError::InvalidResponse(
                "dropdown response is neither an array nor an object".to_string(),
            )),
        }
    }

    /// 启动一个流程
    ///
    /// `POST {PROCESS}/{processId}/start`
    pub async fn start_process(
        &self,
        process_id: &str,
        params: Value,
    ) -> Result<Value, RemoteError> {
        let path = format!("{}/{}/start", endpoints::PROCESS, process_id);
        self.execute(self.request(reqwest::Method::POST, &path).json(&params))
            .await
    }

    /// 创建一条属性子记录
    ///
    /// `POST {ATTRIBUTE}`
    pub async fn create_attribute(
        &self,
        attributes: Value,
    ) -> Result<CreatedRecord, RemoteError> {
        let body = self
            .execute(
                self.request(reqwest::Method::POST, endpoints::ATTRIBUTE)
                    .json(&attributes),
            )
            .await?;
        record_from_value(body)
    }
}

#[async_trait]
impl RemoteDriver for RestDriver {
    async fn create(
        &self,
        kind: EntityKind,
        attributes: Value,
    ) -> Result<CreatedRecord, RemoteError> {
        let path = format!("{}/{}", endpoints::WINDOW, endpoints::window_id(kind));
        tracing::debug!(%kind, %path, "creating remote record");
        let body = self
            .execute(self.request(reqwest::Method::POST, &path).json(&attributes))
            .await?;
        record_from_value(body)
    }
}

/// 从应答体解出已创建记录
///
/// 标识符可能是JSON数字也可能是字符串，统一规整为字符串
fn record_from_value(body: Value) -> Result<CreatedRecord, RemoteError> {
    let object = match body {
        Value::Object(object) => object,
        other => {
            return Err(RemoteError::InvalidResponse(format!(
                "expected a JSON object, got: {}",
                other
            )))
        }
    };
    let id = match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            return Err(RemoteError::InvalidResponse(
                "creation response carries no 'id'".to_string(),
            ))
        }
    };
    Ok(CreatedRecord {
        id,
        assigned: object,
    })
}
