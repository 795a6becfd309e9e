//! HTTPプロトコル定義
//!
//! バックエンドサーバーが公開するエンドポイントと、その要求本文を定義します。

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::command::Command;
use crate::device::DeviceId;

/// デバイス一覧の取得先
pub const DEVICES_PATH: &str = "/devices";
/// キー押下の送信先
pub const KEYPRESS_PATH: &str = "/keypress";
/// キー押下の本文形式
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// キー押下要求（`PUT /keypress`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypressRequest {
    /// 対象デバイス
    pub device: DeviceId,
    /// 実行するコマンド
    pub action: Command,
}

impl KeypressRequest {
    /// 新しい要求を作成
    pub fn new(device: DeviceId, action: Command) -> Self {
        Self { device, action }
    }

    /// URLエンコードされたフォーム本文（`device=<id>&action=<command>`）
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("device", self.device.as_str())
            .append_pair("action", self.action.as_str())
            .finish()
    }
}

/// ベースURLとパスを結合
///
/// ベースURLが空の場合は同一オリジンの相対パスを返します。
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}
