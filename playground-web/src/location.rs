//! Browser location and clipboard access

use playground_common::FragmentSource;
use wasm_bindgen_x::JsValue;

/// The fragment of the current page's URL
pub struct LocationFragment;

impl FragmentSource for LocationFragment {
    fn fragment(&self) -> Option<String> {
        let window = web_sys_x::window()?;
        let hash = window.location().hash().ok()?;
        let hash = hash.strip_prefix('#')?;
        if hash.is_empty() {
            None
        } else {
            Some(hash.to_string())
        }
    }
}

/// Current page URL, including any fragment
pub fn current_href() -> Option<String> {
    web_sys_x::window()?.location().href().ok()
}

/// Replace the location fragment. Doesn't reload the page.
pub fn set_fragment(fragment: &str) -> Result<(), String> {
    let window = web_sys_x::window().ok_or("no window")?;
    window
        .location()
        .set_hash(fragment)
        .map_err(|e| format!("Failed to set location hash: {e:?}"))
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys_x::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures_x::JsFuture::from(promise).await?;
    Ok(())
}
