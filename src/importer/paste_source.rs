// ==========================================
// 项目会议纪要助手 - 粘贴文本来源
// ==========================================
// 职责: 抽象"读取粘贴文本"这一异步边界（标准输入/内存文本）
// 红线: 空白或不可用的输入返回 None，不阻塞、不报错
// ==========================================

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::warn;

#[async_trait]
pub trait PasteSource: Send + Sync {
    /// 读取一次粘贴文本
    ///
    /// # 返回
    /// - Some(text): 非空白文本
    /// - None: 没有可用文本
    async fn read_text(&self) -> Option<String>;
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

/// 从标准输入读到 EOF
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

#[async_trait]
impl PasteSource for StdinSource {
    async fn read_text(&self) -> Option<String> {
        let mut buf = String::new();
        match tokio::io::stdin().read_to_string(&mut buf).await {
            Ok(_) => non_blank(buf),
            Err(e) => {
                warn!(error = %e, "读取标准输入失败");
                None
            }
        }
    }
}

/// 固定文本来源
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl PasteSource for StaticSource {
    async fn read_text(&self) -> Option<String> {
        non_blank(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new("项目名称：A");
        assert_eq!(source.read_text().await.as_deref(), Some("项目名称：A"));
    }

    #[tokio::test]
    async fn test_blank_source_returns_none() {
        assert!(StaticSource::new("  \n\t").read_text().await.is_none());
        assert!(StaticSource::default().read_text().await.is_none());
    }
}
