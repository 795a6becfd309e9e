//! リモコンコマンド
//!
//! ボタンからサーバーへ送るコマンド名と、UIコントロールとコマンドの
//! 対応表（コマンドレジストリ）を定義します。

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{PanelError, Result};

/// 文字入力コマンドの接頭辞
pub const LITERAL_PREFIX: &str = "Lit_";

/// パネルの固定コントロールが使用するDOM id（コマンド名には使えない）
pub const RESERVED_IDS: &[&str] = &["app", "deviceList", "Features", "menu", "text"];

/// サーバーに送るコマンド名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Command(String);

impl Command {
    /// コマンドを作成（空文字列や空白を含む名前は拒否）
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PanelError::InvalidCommand("空のコマンド名".to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(PanelError::InvalidCommand(name));
        }
        Ok(Self(name))
    }

    /// 文字入力コマンド（`Lit_<文字>`）を作成
    pub fn literal(c: char) -> Self {
        Self(format!("{}{}", LITERAL_PREFIX, c))
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Command {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self> {
        Command::new(value)
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.0
    }
}

/// キーボードのキー名から送信するコマンドを決定
///
/// 1文字のキーは `Lit_<文字>`、`Backspace` と `Enter` はそのままの名前、
/// それ以外のキーには対応するコマンドがありません。
pub fn command_for_key(key: &str) -> Option<Command> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Command::literal(c)),
        _ => match key {
            "Backspace" | "Enter" => Some(Command(key.to_string())),
            _ => None,
        },
    }
}

/// ボタンの配置先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// 常に表示されるメインパネル
    Main,
    /// 折りたたみメニュー内
    Menu,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Main
    }
}

/// コマンドボタン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandButton {
    /// 送信するコマンド（ボタンのidにもなる）
    pub command: Command,
    /// 表示ラベル
    pub label: String,
}

impl CommandButton {
    fn builtin(command: &str, label: &str) -> Self {
        Self {
            command: Command(command.to_string()),
            label: label.to_string(),
        }
    }
}

/// コマンドボタンのグループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// グループID（CSSクラスに使用）
    pub id: String,
    /// 見出し
    pub title: String,
    /// 配置先
    #[serde(default)]
    pub placement: Placement,
    /// ボタン
    pub buttons: Vec<CommandButton>,
}

impl CommandGroup {
    fn builtin(id: &str, title: &str, placement: Placement, buttons: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            placement,
            buttons: buttons
                .iter()
                .map(|(command, label)| CommandButton::builtin(command, label))
                .collect(),
        }
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: CommandRegistry = CommandRegistry {
        groups: vec![
            CommandGroup::builtin("power", "電源", Placement::Main, &[("Power", "⏻")]),
            CommandGroup::builtin(
                "navigation",
                "ナビゲーション",
                Placement::Main,
                &[("Back", "戻る"), ("Home", "ホーム")],
            ),
            CommandGroup::builtin(
                "dpad",
                "方向キー",
                Placement::Main,
                &[
                    ("Up", "▲"),
                    ("Left", "◀"),
                    ("Select", "OK"),
                    ("Right", "▶"),
                    ("Down", "▼"),
                ],
            ),
            CommandGroup::builtin(
                "playback",
                "再生",
                Placement::Main,
                &[
                    ("InstantReplay", "↺"),
                    ("Info", "✱"),
                    ("Rev", "⏪"),
                    ("Play", "⏯"),
                    ("Fwd", "⏩"),
                ],
            ),
            CommandGroup::builtin(
                "volume",
                "音量",
                Placement::Menu,
                &[("VolumeDown", "音量 -"), ("VolumeMute", "消音"), ("VolumeUp", "音量 +")],
            ),
            CommandGroup::builtin(
                "channel",
                "チャンネル",
                Placement::Menu,
                &[("ChannelUp", "CH +"), ("ChannelDown", "CH -")],
            ),
            CommandGroup::builtin(
                "input",
                "入力切替",
                Placement::Menu,
                &[
                    ("InputTuner", "チューナー"),
                    ("InputHDMI1", "HDMI 1"),
                    ("InputHDMI2", "HDMI 2"),
                    ("InputHDMI3", "HDMI 3"),
                    ("InputAV1", "AV"),
                ],
            ),
            CommandGroup::builtin(
                "search",
                "検索",
                Placement::Menu,
                &[("Search", "検索"), ("Backspace", "⌫"), ("Enter", "決定")],
            ),
        ],
    };
}

/// UIコントロールとコマンドの対応表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRegistry {
    groups: Vec<CommandGroup>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        DEFAULT_REGISTRY.clone()
    }
}

impl CommandRegistry {
    /// 空のグループ、コマンドの重複、予約済みidの使用がないか検証
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.buttons.is_empty() {
                return Err(PanelError::config(format!(
                    "コマンドグループ '{}' にボタンがありません",
                    group.id
                )));
            }
            for button in &group.buttons {
                if RESERVED_IDS.contains(&button.command.as_str()) {
                    return Err(PanelError::config(format!(
                        "コマンド '{}' はパネルのコントロールと同じidです",
                        button.command
                    )));
                }
                if !seen.insert(button.command.as_str()) {
                    return Err(PanelError::config(format!(
                        "コマンド '{}' が重複しています",
                        button.command
                    )));
                }
            }
        }
        Ok(())
    }

    /// 指定した配置先のグループ
    pub fn groups_in(&self, placement: Placement) -> impl Iterator<Item = &CommandGroup> {
        self.groups
            .iter()
            .filter(move |group| group.placement == placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_validation() {
        assert!(Command::new("Power").is_ok());
        assert!(matches!(Command::new(""), Err(PanelError::InvalidCommand(_))));
        assert!(matches!(Command::new("Volume Up"), Err(PanelError::InvalidCommand(_))));
    }

    #[test]
    fn test_command_for_key() {
        assert_eq!(command_for_key("a"), Some(Command::literal('a')));
        assert_eq!(command_for_key("a").unwrap().as_str(), "Lit_a");
        assert_eq!(command_for_key("é").unwrap().as_str(), "Lit_é");
        assert_eq!(command_for_key("1").unwrap().as_str(), "Lit_1");
        assert_eq!(command_for_key("Enter").unwrap().as_str(), "Enter");
        assert_eq!(command_for_key("Backspace").unwrap().as_str(), "Backspace");
        assert_eq!(command_for_key("Shift"), None);
        assert_eq!(command_for_key(""), None);
    }

    /// JSONのボタン定義を読み込んで検証
    fn parse_registry(json: &str) -> Result<CommandRegistry> {
        let registry: CommandRegistry = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    #[test]
    fn test_default_registry() {
        let registry = CommandRegistry::default();
        assert!(registry.validate().is_ok());

        let main: Vec<&str> = registry
            .groups_in(Placement::Main)
            .flat_map(|group| group.buttons.iter().map(|button| button.command.as_str()))
            .collect();
        assert!(main.contains(&"Power"));
        assert!(main.contains(&"Select"));

        // メニュー内のグループ
        let menu: Vec<&str> = registry
            .groups_in(Placement::Menu)
            .map(|group| group.id.as_str())
            .collect();
        assert_eq!(menu, vec!["volume", "channel", "input", "search"]);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let json = r#"{"groups": [
            {"id": "a", "title": "A", "buttons": [{"command": "Home", "label": "H"}]},
            {"id": "b", "title": "B", "placement": "menu", "buttons": [{"command": "Home", "label": "H2"}]}
        ]}"#;
        assert!(matches!(parse_registry(json), Err(PanelError::Config(_))));
    }

    #[test]
    fn test_registry_rejects_reserved_ids() {
        for reserved in RESERVED_IDS {
            let json = format!(
                r#"{{"groups": [{{"id": "a", "title": "A", "buttons": [{{"command": "{}", "label": "X"}}]}}]}}"#,
                reserved
            );
            assert!(
                matches!(parse_registry(&json), Err(PanelError::Config(_))),
                "{} が受け入れられました",
                reserved
            );
        }

        // 既定のボタンは予約済みidと衝突しない
        let defaults = CommandRegistry::default();
        assert!(defaults
            .groups_in(Placement::Main)
            .chain(defaults.groups_in(Placement::Menu))
            .flat_map(|group| group.buttons.iter())
            .all(|button| !RESERVED_IDS.contains(&button.command.as_str())));
    }

    #[test]
    fn test_registry_from_json() {
        let json = r#"{"groups": [
            {"id": "main", "title": "Main", "buttons": [{"command": "Home", "label": "H"}]},
            {"id": "extra", "title": "Extra", "placement": "menu", "buttons": [{"command": "Play", "label": "P"}]}
        ]}"#;
        let registry = parse_registry(json).unwrap();
        assert_eq!(registry.groups_in(Placement::Main).count(), 1);
        assert_eq!(registry.groups_in(Placement::Menu).count(), 1);

        // 空のコマンド名はデシリアライズ時に拒否
        let json = r#"{"groups": [{"id": "x", "title": "X", "buttons": [{"command": "", "label": "?"}]}]}"#;
        assert!(parse_registry(json).is_err());

        // ボタンのないグループ
        let json = r#"{"groups": [{"id": "x", "title": "X", "buttons": []}]}"#;
        assert!(matches!(parse_registry(json), Err(PanelError::Config(_))));
    }
}
