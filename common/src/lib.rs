//! TVリモコン共通ライブラリ
//!
//! このクレートは、TVリモコンWebパネルで使用される共通の機能を提供します。
//! デバイス一覧の解析、コマンド定義、HTTP要求の形式、設定を含みます。

pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod protocol;

// 主要コンポーネントを再エクスポート
pub use command::{command_for_key, Command, CommandButton, CommandGroup, CommandRegistry, Placement};
pub use config::{LogLevel, PanelConfig};
pub use device::{DeviceId, DeviceList};
pub use error::{PanelError, Result};
pub use protocol::KeypressRequest;

/// ライブラリのバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
