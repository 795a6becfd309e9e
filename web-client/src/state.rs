//! アプリケーション状態管理
//!
//! リモコンパネルの状態と、その状態遷移（リデューサー）を定義します。

use std::rc::Rc;
use tv_remote_rs_common::{Command, DeviceId, DeviceList, KeypressRequest, PanelError, Result};
use yew::Reducible;

/// デバイス一覧の読み込み状態
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceLoad {
    /// 読み込み中
    Loading,
    /// 読み込み完了
    Ready,
    /// 読み込み失敗
    Failed(String),
}

/// メニューの表示状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Hidden,
    Shown,
}

impl Default for MenuState {
    fn default() -> Self {
        MenuState::Hidden
    }
}

impl MenuState {
    /// 表示状態を反転
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Hidden => MenuState::Shown,
            MenuState::Shown => MenuState::Hidden,
        }
    }

    /// 表示中かどうか
    pub fn is_visible(self) -> bool {
        self == MenuState::Shown
    }

    /// CSSの `display` 値
    pub fn display(self) -> &'static str {
        match self {
            MenuState::Hidden => "none",
            MenuState::Shown => "flex",
        }
    }
}

/// ステータスメッセージの種類
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// ステータスバーに表示するメッセージ
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    /// 連番（タイマーによる消去の対象判定に使用）
    pub id: u64,
    /// 種類
    pub kind: StatusKind,
    /// 本文
    pub text: String,
}

/// 状態遷移
#[derive(Clone, Debug)]
pub enum PanelAction {
    /// デバイス一覧を取得した
    DevicesLoaded(DeviceList),
    /// デバイス一覧の取得に失敗した
    DevicesFailed(PanelError),
    /// デバイスを選択した
    SelectDevice(DeviceId),
    /// メニューの表示を切り替える
    ToggleMenu,
    /// キー押下を送信した
    CommandSent {
        request: KeypressRequest,
        /// 送信時刻（表示用）
        at: String,
    },
    /// キー押下の送信に失敗した
    CommandFailed {
        request: KeypressRequest,
        error: PanelError,
    },
    /// デバイス未選択のためコマンドを送信しなかった
    NoDeviceSelected(Command),
    /// 指定した連番のステータスメッセージを消す
    ClearStatus(u64),
}

/// パネル全体の状態
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    /// デバイス一覧
    pub devices: DeviceList,
    /// 読み込み状態
    pub load: DeviceLoad,
    /// 選択中のデバイス
    pub selected: Option<DeviceId>,
    /// メニューの表示状態
    pub menu: MenuState,
    /// ステータスメッセージ
    pub status: Option<StatusMessage>,
    /// 次に割り当てるメッセージ連番
    next_status_id: u64,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            devices: DeviceList::default(),
            load: DeviceLoad::Loading,
            selected: None,
            menu: MenuState::default(),
            status: None,
            next_status_id: 0,
        }
    }
}

impl PanelState {
    fn with_status(mut self, kind: StatusKind, text: String) -> Self {
        self.status = Some(StatusMessage {
            id: self.next_status_id,
            kind,
            text,
        });
        self.next_status_id += 1;
        self
    }

    /// コマンドを送信できる状態か
    pub fn can_send(&self) -> bool {
        self.selected.is_some()
    }

    /// 選択中のデバイスに対するキー押下要求を作成
    pub fn keypress(&self, command: Command) -> Result<KeypressRequest> {
        let device = self.selected.clone().ok_or(PanelError::NoDeviceSelected)?;
        Ok(KeypressRequest::new(device, command))
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let next = match action {
            PanelAction::DevicesLoaded(devices) => {
                next.selected = devices.first().cloned();
                next.load = DeviceLoad::Ready;
                next.devices = devices;
                next
            }
            PanelAction::DevicesFailed(error) => {
                next.load = DeviceLoad::Failed(error.to_string());
                next.with_status(StatusKind::Error, error.to_string())
            }
            PanelAction::SelectDevice(device) => {
                if !next.devices.contains(&device) {
                    log::warn!("一覧にないデバイスが選択されました: {}", device);
                    return self;
                }
                next.selected = Some(device);
                next
            }
            PanelAction::ToggleMenu => {
                next.menu = next.menu.toggle();
                next
            }
            PanelAction::CommandSent { request, at } => {
                let text = format!("{} → {} ({})", request.action, request.device, at);
                next.with_status(StatusKind::Info, text)
            }
            PanelAction::CommandFailed { request, error } => {
                let text = format!("{} の送信に失敗しました: {}", request.action, error);
                next.with_status(StatusKind::Error, text)
            }
            PanelAction::NoDeviceSelected(command) => {
                let text = format!("{}: {}", command, PanelError::NoDeviceSelected);
                next.with_status(StatusKind::Error, text)
            }
            PanelAction::ClearStatus(id) => {
                if next.status.as_ref().map(|status| status.id) != Some(id) {
                    return self;
                }
                next.status = None;
                next
            }
        };

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: PanelState, action: PanelAction) -> PanelState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn loaded(body: &str) -> PanelState {
        reduce(PanelState::default(), PanelAction::DevicesLoaded(DeviceList::parse(body)))
    }

    fn request(device: &str, action: &str) -> KeypressRequest {
        KeypressRequest::new(DeviceId::new(device), Command::new(action).unwrap())
    }

    #[test]
    fn test_devices_loaded_selects_first() {
        let state = loaded("tv1,tv2\r\nignored");
        assert_eq!(state.load, DeviceLoad::Ready);
        assert_eq!(state.devices.len(), 2);
        assert_eq!(state.selected, Some(DeviceId::new("tv1")));
        assert!(state.can_send());
    }

    #[test]
    fn test_empty_device_list_cannot_send() {
        let state = loaded("");
        assert_eq!(state.load, DeviceLoad::Ready);
        assert!(state.devices.is_empty());
        assert!(!state.can_send());

        let state = reduce(state, PanelAction::NoDeviceSelected(Command::new("Power").unwrap()));
        assert_eq!(state.status.unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_keypress_uses_selected_device() {
        let state = reduce(loaded("tv1,tv2"), PanelAction::SelectDevice(DeviceId::new("tv2")));
        let request = state.keypress(Command::new("Power").unwrap()).unwrap();
        assert_eq!(request.to_form_body(), "device=tv2&action=Power");

        // 選択を変えるとその時点のデバイスが使われる
        let state = reduce(state, PanelAction::SelectDevice(DeviceId::new("tv1")));
        let request = state.keypress(Command::new("Home").unwrap()).unwrap();
        assert_eq!(request.to_form_body(), "device=tv1&action=Home");
    }

    #[test]
    fn test_keypress_without_device() {
        let command = Command::new("Power").unwrap();
        assert_eq!(
            PanelState::default().keypress(command.clone()),
            Err(PanelError::NoDeviceSelected)
        );
        assert_eq!(loaded("").keypress(command), Err(PanelError::NoDeviceSelected));
    }

    #[test]
    fn test_devices_failed() {
        let state = reduce(
            PanelState::default(),
            PanelAction::DevicesFailed(PanelError::network("timeout")),
        );
        assert_eq!(state.load, DeviceLoad::Failed("ネットワークエラー: timeout".to_string()));
        assert!(state.status.is_some());
    }

    #[test]
    fn test_select_device() {
        let state = reduce(loaded("tv1,tv2"), PanelAction::SelectDevice(DeviceId::new("tv2")));
        assert_eq!(state.selected, Some(DeviceId::new("tv2")));

        // 一覧にないデバイスは無視
        let state = reduce(state, PanelAction::SelectDevice(DeviceId::new("tv9")));
        assert_eq!(state.selected, Some(DeviceId::new("tv2")));
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut state = PanelState::default();
        assert_eq!(state.menu, MenuState::Hidden);
        assert_eq!(state.menu.display(), "none");

        for clicks in 1..=5 {
            state = reduce(state, PanelAction::ToggleMenu);
            assert_eq!(state.menu.is_visible(), clicks % 2 == 1);
        }
        assert_eq!(state.menu.display(), "flex");
    }

    #[test]
    fn test_status_clear_only_matches_current() {
        let state = reduce(
            loaded("tv1"),
            PanelAction::CommandSent {
                request: request("tv1", "Home"),
                at: "12:00:00".to_string(),
            },
        );
        let first_id = state.status.as_ref().unwrap().id;
        assert_eq!(state.status.as_ref().unwrap().text, "Home → tv1 (12:00:00)");

        let state = reduce(
            state,
            PanelAction::CommandFailed {
                request: request("tv1", "Up"),
                error: PanelError::HttpStatus {
                    endpoint: "/keypress".to_string(),
                    status: 500,
                },
            },
        );
        let second_id = state.status.as_ref().unwrap().id;
        assert_ne!(first_id, second_id);

        // 古いタイマーは新しいメッセージを消さない
        let state = reduce(state, PanelAction::ClearStatus(first_id));
        assert!(state.status.is_some());

        let state = reduce(state, PanelAction::ClearStatus(second_id));
        assert!(state.status.is_none());
    }
}
