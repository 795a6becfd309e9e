//! ネットワークユーティリティ
//!
//! バックエンドサーバーへのHTTP通信と、キー押下の逐次送信キューを提供します。

use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use gloo::net::http::{Request, Response};
use wasm_bindgen_futures::spawn_local;

use tv_remote_rs_common::protocol::FORM_CONTENT_TYPE;
use tv_remote_rs_common::{DeviceList, KeypressRequest, PanelError, Result};

/// 成功以外のステータスをエラーに変換
fn check_status(response: &Response, endpoint: &str) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(PanelError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: response.status(),
        })
    }
}

/// デバイス一覧を取得
pub async fn fetch_devices(url: &str) -> Result<DeviceList> {
    log::debug!("デバイス一覧を取得中: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(PanelError::network)?;
    check_status(&response, url)?;

    let body = response.text().await.map_err(PanelError::network)?;
    let devices = DeviceList::parse(&body);

    log::info!("{}台のデバイスを取得しました", devices.len());
    Ok(devices)
}

/// キー押下を送信
pub async fn send_keypress(url: &str, request: &KeypressRequest) -> Result<()> {
    let body = request.to_form_body();
    log::debug!("キー押下を送信中: {} {}", url, body);

    let response = Request::put(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(body)
        .map_err(PanelError::network)?
        .send()
        .await
        .map_err(PanelError::network)?;

    check_status(&response, url)
}

/// 送信結果
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// 送信した要求
    pub request: KeypressRequest,
    /// 結果
    pub result: Result<()>,
}

/// キー押下の送信キュー
///
/// 要求は1件ずつ順番に送信され、前の要求が完了するまで次の要求は送られません。
/// ディスパッチャーが破棄されるとキューを処理するタスクも終了します。
pub struct CommandDispatcher {
    sender: UnboundedSender<KeypressRequest>,
}

impl CommandDispatcher {
    /// 送信タスクを起動
    pub fn spawn<F>(url: String, on_outcome: F) -> Self
    where
        F: Fn(DispatchOutcome) + 'static,
    {
        let (sender, mut receiver) = mpsc::unbounded::<KeypressRequest>();

        spawn_local(async move {
            while let Some(request) = receiver.next().await {
                let result = send_keypress(&url, &request).await;
                if let Err(e) = &result {
                    log::error!("キー押下の送信に失敗しました ({}): {}", request.action, e);
                }
                on_outcome(DispatchOutcome { request, result });
            }
            log::debug!("キー送信キューを終了しました");
        });

        Self { sender }
    }

    /// 要求をキューに追加
    pub fn dispatch(&self, request: KeypressRequest) {
        log::info!("コマンド {} をデバイス {} に送信します", request.action, request.device);
        if let Err(e) = self.sender.unbounded_send(request) {
            log::error!("送信キューに追加できませんでした: {}", e);
        }
    }
}
