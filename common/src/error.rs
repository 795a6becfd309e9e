//! エラー型定義
//!
//! リモコンパネルで使用する共通エラー型を定義します。

use thiserror::Error;

/// 共通エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// ネットワークエラー（リクエストが完了しなかった）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// サーバーが成功以外のステータスを返した
    #[error("サーバーエラー: {endpoint} がステータス {status} を返しました")]
    HttpStatus {
        /// エンドポイントのパス
        endpoint: String,
        /// HTTPステータスコード
        status: u16,
    },

    /// 設定エラー
    #[error("設定エラー: {0}")]
    Config(String),

    /// 無効なコマンド
    #[error("無効なコマンド: {0}")]
    InvalidCommand(String),

    /// デバイスが選択されていない
    #[error("デバイスが選択されていません")]
    NoDeviceSelected,
}

impl PanelError {
    /// ネットワークエラーを作成
    pub fn network<E: std::fmt::Display>(err: E) -> Self {
        PanelError::Network(err.to_string())
    }

    /// 設定エラーを作成
    pub fn config<S: Into<String>>(message: S) -> Self {
        PanelError::Config(message.into())
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Config(format!("JSONの解析に失敗しました: {}", err))
    }
}

impl From<url::ParseError> for PanelError {
    fn from(err: url::ParseError) -> Self {
        PanelError::Config(format!("URLの解析に失敗しました: {}", err))
    }
}

/// 共通結果型
pub type Result<T> = std::result::Result<T, PanelError>;
