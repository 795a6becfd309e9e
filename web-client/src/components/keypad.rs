//! キーパッドコンポーネント
//!
//! コマンドレジストリのグループからリモコンのボタンを生成します。

use tv_remote_rs_common::{Command, CommandGroup};
use yew::prelude::*;

/// キーパッドのプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct KeypadProps {
    /// 表示するグループ
    pub groups: Vec<CommandGroup>,
    /// ボタンを無効化
    #[prop_or_default]
    pub disabled: bool,
    /// コマンド送信ハンドラー
    pub on_command: Callback<Command>,
}

/// キーパッドコンポーネント
#[function_component(Keypad)]
pub fn keypad(props: &KeypadProps) -> Html {
    let render_group = |group: &CommandGroup| {
        html! {
            <div class={classes!("command-group", group.id.clone())}>
                <h3>{group.title.clone()}</h3>
                <div class="buttons">
                    { for group.buttons.iter().map(|button| {
                        let command = button.command.clone();
                        let on_click = props.on_command.reform(move |_: MouseEvent| command.clone());
                        html! {
                            <button
                                id={button.command.to_string()}
                                class="keypress"
                                title={button.command.to_string()}
                                onclick={on_click}
                                disabled={props.disabled}
                            >
                                {button.label.clone()}
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    };

    html! {
        <div class="keypad">
            { for props.groups.iter().map(render_group) }
        </div>
    }
}
