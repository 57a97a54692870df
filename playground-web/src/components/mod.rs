mod button;
mod code_editor;
mod lang_select;
mod mode_tabs;
mod text_input;

pub use button::{Button, ButtonVariant};
pub use code_editor::CodeEditor;
pub use lang_select::LangSelect;
pub use mode_tabs::ModeTabs;
pub use text_input::TextInput;
