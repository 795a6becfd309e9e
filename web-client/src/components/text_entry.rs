//! 文字入力コンポーネント
//!
//! 入力欄のキー操作を `Lit_<文字>` などのコマンドとして送信します。
//! 設定で有効化されていない場合は、どのキー操作でも何も送信しません。

use tv_remote_rs_common::{command_for_key, Command};
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// 文字入力のプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct TextEntryProps {
    /// 文字入力からの送信を有効化
    pub enabled: bool,
    /// コマンド送信ハンドラー
    pub on_command: Callback<Command>,
}

/// キー操作から送信するコマンドを決定
fn typed_command(enabled: bool, key: &str, with_modifier: bool) -> Option<Command> {
    if !enabled || with_modifier {
        return None;
    }
    command_for_key(key)
}

/// 文字入力コンポーネント
#[function_component(TextEntry)]
pub fn text_entry(props: &TextEntryProps) -> Html {
    let on_keydown = {
        let enabled = props.enabled;
        let on_command = props.on_command.clone();
        Callback::from(move |e: KeyboardEvent| {
            let with_modifier = e.ctrl_key() || e.alt_key() || e.meta_key();
            match typed_command(enabled, &e.key(), with_modifier) {
                Some(command) => on_command.emit(command),
                None => log::trace!("キー {} は送信しません", e.key()),
            }
        })
    };

    html! {
        <div class="text-entry">
            <input
                id="text"
                type="text"
                placeholder={if props.enabled { "文字を入力" } else { "文字入力は無効です" }}
                onkeydown={on_keydown}
                autocomplete="off"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_sends() {
        for key in ["a", "Z", "1", " ", "Enter", "Backspace", "ArrowUp", "Shift"] {
            assert_eq!(typed_command(false, key, false), None);
        }
    }

    #[test]
    fn test_enabled_maps_keys() {
        assert_eq!(typed_command(true, "a", false).unwrap().as_str(), "Lit_a");
        assert_eq!(typed_command(true, "Enter", false).unwrap().as_str(), "Enter");
        assert_eq!(typed_command(true, "Backspace", false).unwrap().as_str(), "Backspace");
        assert_eq!(typed_command(true, "ArrowUp", false), None);

        // 修飾キー付きの操作は送信しない
        assert_eq!(typed_command(true, "c", true), None);
    }
}
