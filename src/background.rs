/// Extension lifecycle hooks, called from the background service worker

use wasm_bindgen::prelude::*;

pub const MENU_ID: &str = "analyzeWithHaloscope";
pub const MENU_TITLE: &str = "Analyze with Haloscope";

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = createContextMenu)]
    async fn create_context_menu(id: &str, title: &str, contexts: JsValue)
        -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = openExtensionPopup)]
    async fn open_extension_popup() -> Result<(), JsValue>;
}

/// Install hook: register the right-click "Analyze with Haloscope" entry
/// for pages and links.
#[wasm_bindgen]
pub async fn on_installed() {
    log::info!("Haloscope extension installed");

    let contexts = serde_wasm_bindgen::to_value(&["page", "link"])
        .unwrap_or(JsValue::NULL);
    if let Err(e) = create_context_menu(MENU_ID, MENU_TITLE, contexts).await {
        log::warn!("Failed to create context menu: {:?}", e);
    }
}

/// Context-menu click hook: open the popup so the user can trigger the
/// analysis themselves. Clicks never start an analysis directly.
#[wasm_bindgen]
pub async fn on_context_menu_clicked(menu_item_id: String) {
    if menu_item_id != MENU_ID {
        return;
    }
    if let Err(e) = open_extension_popup().await {
        log::warn!("Failed to open popup: {:?}", e);
    }
}
