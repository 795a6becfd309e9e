//! デバイス選択コンポーネント
//!
//! サーバーから取得したデバイス一覧を選択コントロールとして表示します。

use tv_remote_rs_common::{DeviceId, DeviceList};
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::state::DeviceLoad;

/// デバイス選択のプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct DeviceSelectProps {
    /// デバイス一覧
    pub devices: DeviceList,
    /// 選択中のデバイス
    pub selected: Option<DeviceId>,
    /// 読み込み状態
    pub load: DeviceLoad,
    /// 選択変更ハンドラー
    pub on_select: Callback<DeviceId>,
}

/// デバイス選択コンポーネント
#[function_component(DeviceSelect)]
pub fn device_select(props: &DeviceSelectProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_select.emit(DeviceId::new(select.value()));
            }
        })
    };

    let placeholder = match &props.load {
        DeviceLoad::Loading => Some("デバイスを検索中..."),
        DeviceLoad::Failed(_) => Some("デバイス一覧を取得できません"),
        DeviceLoad::Ready if props.devices.is_empty() => Some("デバイスが見つかりません"),
        DeviceLoad::Ready => None,
    };

    html! {
        <div class="device-select">
            <label for="deviceList">{"デバイス"}</label>
            <select
                id="deviceList"
                onchange={on_change}
                disabled={placeholder.is_some()}
            >
                if let Some(text) = placeholder {
                    <option value="" selected={true} disabled={true}>{text}</option>
                }
                { for props.devices.iter().map(|device| html! {
                    <option
                        value={device.to_string()}
                        selected={props.selected.as_ref() == Some(device)}
                    >
                        {device.to_string()}
                    </option>
                }) }
            </select>
        </div>
    }
}
