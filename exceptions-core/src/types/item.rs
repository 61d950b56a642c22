//! 例外项类型定义

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// 单个例外项（被排除在防护功能之外的站点）
///
/// `host` 同时是身份键：两个 host 相同的项视为同一行，
/// 即使其他显示属性（如图标）不同。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawExceptionsItem")]
pub struct ExceptionsItem {
    host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

impl ExceptionsItem {
    /// 从 host 或完整 URL 创建例外项
    ///
    /// 接受 `example.com`、`https://Example.com:8443/path?q` 等形式，
    /// 统一归一化为小写 host。
    pub fn new(input: &str) -> CoreResult<Self> {
        Ok(Self {
            host: normalize_host(input)?,
            icon: None,
        })
    }

    /// 设置图标引用
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// 身份键（用于 diff）
    pub fn id(&self) -> &str {
        &self.host
    }

    /// 显示用的 host 名称
    pub fn host(&self) -> &str {
        &self.host
    }

    /// 图标引用
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// 是否与另一项为同一身份
    pub fn same_identity(&self, other: &Self) -> bool {
        self.host == other.host
    }
}

/// 反序列化的中间形态，host 经 `normalize_host` 校验后才成为身份键
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExceptionsItem {
    host: String,
    #[serde(default)]
    icon: Option<String>,
}

impl TryFrom<RawExceptionsItem> for ExceptionsItem {
    type Error = CoreError;

    fn try_from(raw: RawExceptionsItem) -> CoreResult<Self> {
        Ok(Self {
            host: normalize_host(&raw.host)?,
            icon: raw.icon,
        })
    }
}

/// 从用户输入中提取 host
fn normalize_host(input: &str) -> CoreResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidHost(input.to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|_| CoreError::InvalidHost(input.to_string()))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_ascii_lowercase()),
        _ => Err(CoreError::InvalidHost(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_is_kept() {
        let item = ExceptionsItem::new("example.com").unwrap();
        assert_eq!(item.id(), "example.com");
        assert_eq!(item.icon(), None);
    }

    #[test]
    fn url_is_reduced_to_host() {
        let item = ExceptionsItem::new("https://user@Example.ORG:8443/path?q=1#frag").unwrap();
        assert_eq!(item.host(), "example.org");
    }

    #[test]
    fn www_prefix_is_not_stripped() {
        let item = ExceptionsItem::new("www.example.com").unwrap();
        assert_eq!(item.host(), "www.example.com");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            ExceptionsItem::new("   "),
            Err(CoreError::InvalidHost(_))
        ));
        assert!(matches!(
            ExceptionsItem::new("https://"),
            Err(CoreError::InvalidHost(_))
        ));
    }

    #[test]
    fn identity_ignores_icon() {
        let a = ExceptionsItem::new("example.com").unwrap();
        let b = ExceptionsItem::new("example.com").unwrap().with_icon("favicon.png");
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn item_serde_roundtrip() {
        let item = ExceptionsItem::new("example.com").unwrap().with_icon("icon.png");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"host":"example.com","icon":"icon.png"}"#);
        let back: ExceptionsItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn deserialize_normalizes_host() {
        let item: ExceptionsItem = serde_json::from_str(r#"{"host":"Example.COM"}"#).unwrap();
        assert_eq!(item.id(), "example.com");

        let item: ExceptionsItem =
            serde_json::from_str(r#"{"host":"Example.COM/path","icon":"a.png"}"#).unwrap();
        assert_eq!(item, ExceptionsItem::new("example.com").unwrap().with_icon("a.png"));
    }

    #[test]
    fn deserialize_rejects_invalid_host() {
        assert!(serde_json::from_str::<ExceptionsItem>(r#"{"host":""}"#).is_err());
        assert!(serde_json::from_str::<ExceptionsItem>(r#"{"host":"https://"}"#).is_err());
    }
}
