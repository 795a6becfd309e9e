//! Webクライアントのコンポーネントモジュール
//!
//! このモジュールには、リモコンパネルを構成するYewコンポーネントが含まれています。

pub mod device_select;
pub mod keypad;
pub mod menu;
pub mod status;
pub mod text_entry;

// 主要コンポーネントをre-export
pub use device_select::DeviceSelect;
pub use keypad::Keypad;
pub use menu::MenuPanel;
pub use status::StatusBar;
pub use text_entry::TextEntry;
