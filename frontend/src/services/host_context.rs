use anyhow::{anyhow, Context, Result};
use js_sys::{Function, Reflect, JSON};
use shared::identity::HostContext;
use shared::PlatformUser;
use wasm_bindgen::{JsCast, JsValue};

use crate::services::logging::Logger;

/// Handle to the mini-app object injected by the chat client
pub struct TelegramWebApp {
    handle: JsValue,
}

impl TelegramWebApp {
    /// `window.Telegram.WebApp`
    pub fn primary() -> Option<Self> {
        lookup(&["Telegram", "WebApp"]).map(|handle| Self { handle })
    }

    /// `window.TelegramWebApp`, exposed by some wrappers instead of the standard object
    pub fn alternate() -> Option<Self> {
        lookup(&["TelegramWebApp"]).map(|handle| Self { handle })
    }

    pub fn boxed(self) -> Box<dyn HostContext> {
        Box::new(self)
    }

    fn call(&self, method: &str) -> Result<()> {
        let function = Reflect::get(&self.handle, &JsValue::from_str(method))
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<Function>()
            .map_err(|_| anyhow!("{} is not a function", method))?;
        function
            .call0(&self.handle)
            .map_err(|e| anyhow!("{} threw {:?}", method, e))?;
        Ok(())
    }

    fn read_user(&self) -> Result<Option<PlatformUser>> {
        let init_data = get(&self.handle, "initDataUnsafe")?;
        let Some(user) = init_data.map(|data| get(&data, "user")).transpose()?.flatten() else {
            return Ok(None);
        };
        let json: String = JSON::stringify(&user)
            .map_err(|e| anyhow!("{:?}", e))?
            .into();
        let payload = serde_json::from_str(&json).context("unexpected user payload")?;
        Ok(Some(payload))
    }
}

impl HostContext for TelegramWebApp {
    fn ready(&self) {
        if let Err(e) = self.call("ready") {
            Logger::warn_with_component("identity", &format!("WebApp.ready failed: {:#}", e));
        }
    }

    fn expand(&self) {
        if let Err(e) = self.call("expand") {
            Logger::warn_with_component("identity", &format!("WebApp.expand failed: {:#}", e));
        }
    }

    fn enable_closing_confirmation(&self) -> bool {
        self.call("enableClosingConfirmation").is_ok()
    }

    fn user(&self) -> Option<PlatformUser> {
        match self.read_user() {
            Ok(user) => user,
            Err(e) => {
                Logger::warn_with_component("identity", &format!("Could not read WebApp user: {:#}", e));
                None
            }
        }
    }
}

/// Query string of the current page, including the leading `?`
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

fn get(target: &JsValue, key: &str) -> Result<Option<JsValue>> {
    let value = Reflect::get(target, &JsValue::from_str(key))
        .map_err(|e| anyhow!("reading {}: {:?}", key, e))?;
    Ok((!value.is_undefined() && !value.is_null()).then_some(value))
}

fn lookup(path: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = web_sys::window()?.into();
    for key in path {
        current = get(&current, key).ok()??;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_absent_host_in_plain_browser() {
        assert!(TelegramWebApp::primary().is_none());
        assert!(TelegramWebApp::alternate().is_none());
    }

    #[wasm_bindgen_test]
    fn test_reads_user_from_injected_object() {
        let host = js_sys::eval(
            r#"({
                calls: [],
                ready() { this.calls.push("ready"); },
                expand() { this.calls.push("expand"); },
                initDataUnsafe: { user: { id: 501, first_name: "Anna", language_code: "en" } }
            })"#,
        )
        .unwrap();
        let app = TelegramWebApp { handle: host };

        app.ready();
        app.expand();
        assert!(!app.enable_closing_confirmation());

        let user = app.user().unwrap();
        assert_eq!(user.id, 501);
        assert_eq!(user.first_name.as_deref(), Some("Anna"));
    }

    #[wasm_bindgen_test]
    fn test_missing_user_payload() {
        let host = js_sys::eval(r#"({ initDataUnsafe: {} })"#).unwrap();
        let app = TelegramWebApp { handle: host };
        assert!(app.user().is_none());
    }
}
