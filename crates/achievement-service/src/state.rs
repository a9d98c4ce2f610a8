//! 应用共享状态

use std::sync::Arc;

use crate::store::LedgerStore;
use crate::translate::Translator;

/// 应用状态
///
/// 账本存储与翻译适配器在所有 handler 间共享。
/// 克隆只复制 Arc 指针。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LedgerStore>,
    pub translator: Arc<dyn Translator>,
    /// 成就文案的源语言
    pub canonical_lang: String,
}

impl AppState {
    pub fn new(
        store: Arc<LedgerStore>,
        translator: Arc<dyn Translator>,
        canonical_lang: impl Into<String>,
    ) -> Self {
        Self {
            store,
            translator,
            canonical_lang: canonical_lang.into(),
        }
    }
}
