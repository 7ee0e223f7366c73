use artifact_core::{Artifact, LoadError, LoadSlot};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} {}", resp.status(), resp.status_text());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_artifact(path: &str) -> Result<Artifact, LoadError> {
    let bytes = fetch_bytes(path).await.map_err(|e| LoadError::Fetch {
        path: path.to_string(),
        reason: format!("{:#}", e),
    })?;
    log::info!("[model] fetched {} ({} bytes)", path, bytes.len());
    Artifact::from_glb(&bytes)
}

/// Start loading in the background; the frame driver picks the result up
/// from `slot` on its next frame.
pub fn spawn_artifact_load(path: &'static str, slot: LoadSlot) {
    spawn_local(async move {
        let result = load_artifact(path).await;
        *slot.borrow_mut() = Some(result);
    });
}
