//! 翻译服务适配器
//!
//! 通过 `Translator` trait 抽象外部翻译服务，报告层按需调用。
//! 远程实现基于 HTTP（LibreTranslate 风格的接口），可能缓慢或失败；
//! 未配置端点时使用直通实现，便于在无外部依赖的情况下运行完整服务。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use achieve_shared::config::TranslationConfig;
use achieve_shared::error::{AchieveError, Result};

/// 翻译器 trait
///
/// 把 `text` 从 `from` 语言翻译为 `to` 语言。
/// 实现可能涉及网络调用，调用方不得在持有存储锁时等待结果。
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

/// 根据配置构建翻译器
///
/// 配置了端点时使用 HTTP 实现，否则退回直通实现。
pub fn from_config(config: &TranslationConfig) -> Result<Box<dyn Translator>> {
    match &config.endpoint {
        Some(endpoint) => Ok(Box::new(HttpTranslator::new(
            endpoint,
            Duration::from_secs(config.timeout_seconds),
        )?)),
        None => Ok(Box::new(IdentityTranslator)),
    }
}

// ---------------------------------------------------------------------------
// HTTP 翻译器
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// HTTP 翻译器
///
/// 调用 LibreTranslate 风格的 `/translate` 接口。
/// 超时与非 2xx 响应都归类为适配器错误，由调用方决定降级策略。
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AchieveError::adapter("translate", e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: from,
            target: to,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AchieveError::adapter("translate", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AchieveError::adapter(
                "translate",
                format!("HTTP {}", response.status()),
            ));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| AchieveError::adapter("translate", e.to_string()))?;

        debug!(from, to, "远程翻译完成");
        Ok(body.translated_text)
    }
}

// ---------------------------------------------------------------------------
// 直通翻译器
// ---------------------------------------------------------------------------

/// 直通翻译器
///
/// 原样返回输入，用于开发环境或未配置翻译端点时。
/// 只记录日志，便于确认调用路径。
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        debug!(from, to, "直通翻译，返回原文");
        Ok(text.to_string())
    }
}

// ---------------------------------------------------------------------------
// 测试辅助实现
// ---------------------------------------------------------------------------

/// 测试用翻译器实现
///
/// 字典版和必败版，供单元与集成测试注入。
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// 字典翻译器：按词条查表，查不到时原样返回
    #[derive(Default)]
    pub struct DictionaryTranslator {
        entries: HashMap<String, String>,
    }

    impl DictionaryTranslator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
            self.entries.insert(from.into(), to.into());
            self
        }
    }

    #[async_trait]
    impl Translator for DictionaryTranslator {
        async fn translate(&self, text: &str, _from: &str, _to: &str) -> Result<String> {
            Ok(self
                .entries
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_string()))
        }
    }

    /// 必败翻译器：模拟外部服务故障
    pub struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _from: &str, _to: &str) -> Result<String> {
            Err(AchieveError::adapter("translate", "模拟的服务故障"))
        }
    }
}
