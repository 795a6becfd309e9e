//! ユーティリティモジュール
//!
//! このモジュールには、Webクライアントで使用される通信とロギングの関数が含まれています。

pub mod logging;
pub mod network;

// 主要ユーティリティを再エクスポート
pub use logging::{init_logger, set_panic_hook};
