//! ロギングユーティリティ
//!
//! `log` の出力先をブラウザのコンソールに設定します。

use tv_remote_rs_common::LogLevel;

/// ロガーを初期化
pub fn init_logger(level: LogLevel) {
    wasm_logger::init(wasm_logger::Config::new(level.into()));
}

/// パニック時にコンソールへ出力するフックを設定
pub fn set_panic_hook() {
    #[cfg(feature = "development")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
