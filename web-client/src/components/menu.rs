//! 折りたたみメニューコンポーネント

use yew::prelude::*;

use crate::state::MenuState;

/// メニューのプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct MenuPanelProps {
    /// 表示状態
    pub menu: MenuState,
    /// 表示切り替えハンドラー
    pub on_toggle: Callback<()>,
    /// メニュー内の要素
    #[prop_or_default]
    pub children: Children,
}

/// 折りたたみメニューコンポーネント
#[function_component(MenuPanel)]
pub fn menu_panel(props: &MenuPanelProps) -> Html {
    let on_click = props.on_toggle.reform(|_: MouseEvent| ());

    let label = if props.menu.is_visible() {
        "機能 ▲"
    } else {
        "機能 ▼"
    };

    html! {
        <div class="menu-container">
            <button id="Features" onclick={on_click} aria-expanded={props.menu.is_visible().to_string()}>
                {label}
            </button>
            <div id="menu" style={format!("display: {}", props.menu.display())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
