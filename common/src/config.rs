//! 設定管理
//!
//! リモコンパネルの設定を定義し、JSONからの読み込みと検証を行います。
//! 設定はページに埋め込まれたJSONから渡され、保存はしません。

use serde::{Deserialize, Serialize};
use url::Url;

use crate::command::CommandRegistry;
use crate::error::{PanelError, Result};
use crate::protocol::{self, DEVICES_PATH, KEYPRESS_PATH};

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// パネル設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// サーバーのベースURL（空の場合は同一オリジン）
    pub base_url: String,
    /// デバイス一覧のパス
    pub devices_path: String,
    /// キー押下のパス
    pub keypress_path: String,
    /// 文字入力からのコマンド送信を有効化
    pub free_typing: bool,
    /// ログレベル
    pub log_level: LogLevel,
    /// ステータスメッセージを消すまでの時間（ミリ秒、0で消さない）
    pub status_clear_ms: u32,
    /// コマンドレジストリの上書き
    pub commands: Option<CommandRegistry>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            devices_path: DEVICES_PATH.to_string(),
            keypress_path: KEYPRESS_PATH.to_string(),
            free_typing: false,
            log_level: LogLevel::default(),
            status_clear_ms: 3000,
            commands: None,
        }
    }
}

impl PanelConfig {
    /// JSONから設定を読み込んで検証
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("設定を読み込みました: {:?}", config);
        Ok(config)
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.is_empty() {
            let url = Url::parse(&self.base_url)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(PanelError::config(format!(
                    "サポートされていないスキームです: {}",
                    url.scheme()
                )));
            }
        }

        for (name, path) in [
            ("devices_path", &self.devices_path),
            ("keypress_path", &self.keypress_path),
        ] {
            if !path.starts_with('/') {
                return Err(PanelError::config(format!(
                    "{} は '/' で始まる必要があります: {}",
                    name, path
                )));
            }
        }

        if let Some(registry) = &self.commands {
            registry.validate()?;
        }

        Ok(())
    }

    /// デバイス一覧のURL
    pub fn devices_url(&self) -> String {
        protocol::join_url(&self.base_url, &self.devices_path)
    }

    /// キー押下のURL
    pub fn keypress_url(&self) -> String {
        protocol::join_url(&self.base_url, &self.keypress_path)
    }

    /// 使用するコマンドレジストリ
    pub fn registry(&self) -> CommandRegistry {
        self.commands.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.free_typing);
        assert_eq!(config.devices_url(), "/devices");
        assert_eq!(config.keypress_url(), "/keypress");
        assert_eq!(config.registry(), CommandRegistry::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PanelConfig::from_json(
            r#"{"base_url": "http://192.168.0.10:8000", "log_level": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.keypress_url(), "http://192.168.0.10:8000/keypress");
        assert_eq!(config.status_clear_ms, 3000);
        assert!(!config.free_typing);
    }

    #[test]
    fn test_invalid_config() {
        assert!(PanelConfig::from_json(r#"{"base_url": "ftp://example.com"}"#).is_err());
        assert!(PanelConfig::from_json(r#"{"base_url": "not a url"}"#).is_err());
        assert!(PanelConfig::from_json(r#"{"devices_path": "devices"}"#).is_err());
        assert!(PanelConfig::from_json("{").is_err());

        // 上書きしたボタンがパネルのコントロールと同じidを使う
        let json = r#"{"commands": {"groups": [
            {"id": "x", "title": "X", "buttons": [{"command": "Features", "label": "F"}]}
        ]}}"#;
        assert!(matches!(PanelConfig::from_json(json), Err(PanelError::Config(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_registry_override() {
        let mut config = PanelConfig::default();
        config.commands = Some(CommandRegistry::default());
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PanelConfig::from_json(&json).unwrap(), config);
    }
}
