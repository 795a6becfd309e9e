//! デバイス一覧
//!
//! `/devices` エンドポイントが返すデバイス識別子の一覧を扱います。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 行の区切り
const LINE_SEPARATOR: &str = "\r\n";
/// デバイス識別子の区切り
const DEVICE_SEPARATOR: char = ',';

/// デバイス識別子
///
/// サーバーが割り当てる不透明な文字列で、クライアント側では解釈しません。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// 新しいデバイス識別子を作成
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// デバイス一覧（サーバーの応答順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    devices: Vec<DeviceId>,
}

impl DeviceList {
    /// `/devices` の応答本文を解析
    ///
    /// 1行目だけを読み、カンマで区切られた空でないトークンを順番通りに
    /// デバイスとして扱います。重複の除去や前後の空白の除去は行いません。
    pub fn parse(body: &str) -> Self {
        let first_line = body.split(LINE_SEPARATOR).next().unwrap_or_default();

        let devices = first_line
            .split(DEVICE_SEPARATOR)
            .filter(|token| !token.is_empty())
            .map(DeviceId::new)
            .collect();

        Self { devices }
    }

    /// デバイス数
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// 先頭のデバイス（選択コントロールの初期値）
    pub fn first(&self) -> Option<&DeviceId> {
        self.devices.first()
    }

    /// 指定したデバイスが含まれているか
    pub fn contains(&self, id: &DeviceId) -> bool {
        self.devices.contains(id)
    }

    /// イテレータを取得
    pub fn iter(&self) -> std::slice::Iter<'_, DeviceId> {
        self.devices.iter()
    }
}

impl<'a> IntoIterator for &'a DeviceList {
    type Item = &'a DeviceId;
    type IntoIter = std::slice::Iter<'a, DeviceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
