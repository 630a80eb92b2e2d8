use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    type AceEditor;
    type AceSession;

    #[wasm_bindgen(catch, js_namespace = ace, js_name = edit)]
    fn ace_edit(element_id: &str) -> Result<AceEditor, JsValue>;

    #[wasm_bindgen(method, js_name = setTheme)]
    fn set_theme(this: &AceEditor, theme: &str);

    #[wasm_bindgen(method, getter)]
    fn session(this: &AceEditor) -> AceSession;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &AceEditor) -> String;

    #[wasm_bindgen(method, js_name = setMode)]
    fn set_mode(this: &AceSession, mode: &str);

    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &AceSession, options: &Object);
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorSettings {
    pub theme: String,
    pub mode: String,
    pub tab_size: u32,
    pub soft_tabs: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: "ace/theme/github".to_string(),
            mode: "ace/mode/python".to_string(),
            tab_size: 4,
            soft_tabs: true,
        }
    }
}

/// Handle to the page's Ace editor.
#[derive(Clone)]
pub struct Editor {
    inner: JsValue,
}

impl Editor {
    pub fn attach(element_id: &str, settings: &EditorSettings) -> Result<Self, JsValue> {
        let editor = ace_edit(element_id)?;
        editor.set_theme(&settings.theme);
        let session = editor.session();
        session.set_mode(&settings.mode);

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("tabSize"),
            &JsValue::from(settings.tab_size),
        )?;
        Reflect::set(
            &options,
            &JsValue::from_str("useSoftTabs"),
            &JsValue::from_bool(settings.soft_tabs),
        )?;
        session.set_options(&options);

        Ok(Self {
            inner: editor.into(),
        })
    }

    fn ace(&self) -> &AceEditor {
        self.inner.unchecked_ref()
    }

    pub fn value(&self) -> String {
        self.ace().get_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_indent_with_four_spaces() {
        let settings = EditorSettings::default();
        assert_eq!(settings.tab_size, 4);
        assert!(settings.soft_tabs);
        assert_eq!(settings.mode, "ace/mode/python");
    }
}
