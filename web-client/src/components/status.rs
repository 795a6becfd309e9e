//! ステータスバーコンポーネント
//!
//! デバイス一覧の読み込み状態と、直近のコマンド送信結果を表示します。

use yew::prelude::*;

use crate::state::{DeviceLoad, StatusKind, StatusMessage};

/// ステータスバーのプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct StatusBarProps {
    /// 読み込み状態
    pub load: DeviceLoad,
    /// デバイス数
    pub device_count: usize,
    /// メッセージ
    pub status: Option<StatusMessage>,
}

/// ステータスバーコンポーネント
#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let (load_class, load_text) = match &props.load {
        DeviceLoad::Loading => ("status-loading", "読み込み中".to_string()),
        DeviceLoad::Ready => ("status-ready", format!("{}台のデバイス", props.device_count)),
        DeviceLoad::Failed(_) => ("status-error", "読み込み失敗".to_string()),
    };

    html! {
        <div class="status-bar">
            <span class={classes!("status-indicator", load_class)}>{load_text}</span>
            if let Some(status) = &props.status {
                <span class={classes!(
                    "status-message",
                    (status.kind == StatusKind::Error).then_some("error")
                )}>
                    {status.text.clone()}
                </span>
            }
        </div>
    }
}
