//! Webクライアントアプリケーション
//!
//! Yewを使用したリモコンパネルのメインアプリケーションを実装します。

use gloo::timers::callback::Timeout;
use std::rc::Rc;
use tv_remote_rs_common::{Command, DeviceId, PanelConfig, Placement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{DeviceSelect, Keypad, MenuPanel, StatusBar, TextEntry};
use crate::state::{PanelAction, PanelState};
use crate::utils::network::{self, CommandDispatcher, DispatchOutcome};

/// アプリケーションのプロパティ
#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// パネル設定
    pub config: Rc<PanelConfig>,
}

/// メインアプリケーション
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(PanelState::default);

    // ボタン定義
    let registry = use_memo(|config: &Rc<PanelConfig>| config.registry(), props.config.clone());

    // キー押下の送信キュー
    let dispatcher = {
        let dispatch = state.dispatcher();
        use_memo(
            move |config: &Rc<PanelConfig>| {
                CommandDispatcher::spawn(config.keypress_url(), move |outcome: DispatchOutcome| {
                    let DispatchOutcome { request, result } = outcome;
                    let action = match result {
                        Ok(()) => PanelAction::CommandSent {
                            request,
                            at: chrono::Local::now().format("%H:%M:%S").to_string(),
                        },
                        Err(error) => PanelAction::CommandFailed { request, error },
                    };
                    dispatch.dispatch(action);
                })
            },
            props.config.clone(),
        )
    };

    // 起動時にデバイス一覧を取得
    {
        let dispatch = state.dispatcher();
        use_effect_with_deps(
            move |config: &Rc<PanelConfig>| {
                let url = config.devices_url();
                spawn_local(async move {
                    match network::fetch_devices(&url).await {
                        Ok(devices) => dispatch.dispatch(PanelAction::DevicesLoaded(devices)),
                        Err(e) => {
                            log::error!("デバイス一覧の取得に失敗しました: {}", e);
                            dispatch.dispatch(PanelAction::DevicesFailed(e));
                        }
                    }
                });
                || ()
            },
            props.config.clone(),
        );
    }

    // ステータスメッセージを一定時間後に消す
    {
        let dispatch = state.dispatcher();
        let clear_ms = props.config.status_clear_ms;
        let status_id = state.status.as_ref().map(|status| status.id);
        use_effect_with_deps(
            move |status_id: &Option<u64>| {
                let timeout = match *status_id {
                    Some(id) if clear_ms > 0 => Some(Timeout::new(clear_ms, move || {
                        dispatch.dispatch(PanelAction::ClearStatus(id));
                    })),
                    _ => None,
                };
                // タイムアウトを破棄すると予約も取り消される
                move || drop(timeout)
            },
            status_id,
        );
    }

    // コマンド送信ハンドラー
    let on_command = {
        let state = state.clone();
        let dispatcher = dispatcher.clone();
        Callback::from(move |command: Command| match state.keypress(command.clone()) {
            Ok(request) => dispatcher.dispatch(request),
            Err(e) => {
                log::warn!("{} を送信しません: {}", command, e);
                state.dispatch(PanelAction::NoDeviceSelected(command));
            }
        })
    };

    // デバイス選択ハンドラー
    let on_select = {
        let dispatch = state.dispatcher();
        Callback::from(move |device: DeviceId| {
            log::debug!("デバイスを選択: {}", device);
            dispatch.dispatch(PanelAction::SelectDevice(device));
        })
    };

    // メニュー表示切り替えハンドラー
    let on_toggle_menu = {
        let dispatch = state.dispatcher();
        Callback::from(move |_: ()| dispatch.dispatch(PanelAction::ToggleMenu))
    };

    let main_groups: Vec<_> = registry.groups_in(Placement::Main).cloned().collect();
    let menu_groups: Vec<_> = registry.groups_in(Placement::Menu).cloned().collect();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"リモコン"}</h1>
                <DeviceSelect
                    devices={state.devices.clone()}
                    selected={state.selected.clone()}
                    load={state.load.clone()}
                    on_select={on_select}
                />
            </header>

            <main class="remote">
                <Keypad
                    groups={main_groups}
                    disabled={!state.can_send()}
                    on_command={on_command.clone()}
                />

                <MenuPanel menu={state.menu} on_toggle={on_toggle_menu}>
                    <Keypad
                        groups={menu_groups}
                        disabled={!state.can_send()}
                        on_command={on_command.clone()}
                    />
                    <TextEntry enabled={props.config.free_typing} on_command={on_command} />
                </MenuPanel>
            </main>

            <footer class="app-footer">
                <StatusBar
                    load={state.load.clone()}
                    device_count={state.devices.len()}
                    status={state.status.clone()}
                />
            </footer>
        </div>
    }
}
