//! Webクライアントエントリポイント
//!
//! このクレートは、TVリモコンパネルのWebクライアント実装を提供します。
//! WebAssemblyにコンパイルされ、ブラウザ上で実行されます。

mod app;
mod components;
mod state;
mod utils;

use std::rc::Rc;
use tv_remote_rs_common::PanelConfig;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// デフォルト設定でWebクライアントを初期化
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    mount(PanelConfig::default())
}

/// JSON形式の設定でWebクライアントを初期化
#[wasm_bindgen]
pub fn initialize_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PanelConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(config)
}

/// バージョン情報を取得
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn mount(config: PanelConfig) -> Result<(), JsValue> {
    utils::set_panic_hook();
    utils::init_logger(config.log_level);

    log::info!("Webクライアントを初期化中...");

    let window = window().ok_or_else(|| JsValue::from_str("ウィンドウが見つかりません"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("ドキュメントが見つかりません"))?;

    let props = app::AppProps {
        config: Rc::new(config),
    };

    // アプリケーションのコンテナを取得
    let root = match document.get_element_by_id("app") {
        Some(container) => container,
        None => {
            // コンテナが存在しない場合は作成
            log::warn!("アプリケーションコンテナが見つかりません。新しく作成します。");

            let body = document.body().ok_or_else(|| JsValue::from_str("ドキュメントのボディが見つかりません"))?;

            let app_div = document.create_element("div")?;
            app_div.set_id("app");
            app_div.set_class_name("tv-remote-app");
            body.append_child(&app_div)?;
            app_div
        }
    };

    yew::Renderer::<app::App>::with_root_and_props(root, props).render();

    log::info!("Webクライアントの初期化が完了しました");
    Ok(())
}
