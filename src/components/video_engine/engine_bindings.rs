// wasm-bindgen surface of the embedded player object. The type is duck-typed:
// methods resolve on the instance at call time, so nothing references the
// engine's global namespace before its API script has loaded.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    pub type EnginePlayer;

    #[wasm_bindgen(method, js_name = playVideo)]
    fn play_video(this: &EnginePlayer);

    #[wasm_bindgen(method, js_name = pauseVideo)]
    fn pause_video(this: &EnginePlayer);

    #[wasm_bindgen(method, js_name = seekTo)]
    fn seek_to(this: &EnginePlayer, seconds: f64, allow_seek_ahead: bool);

    #[wasm_bindgen(method, js_name = getCurrentTime)]
    fn get_current_time(this: &EnginePlayer) -> f64;

    #[wasm_bindgen(method, js_name = getDuration)]
    fn get_duration(this: &EnginePlayer) -> f64;

    #[wasm_bindgen(method, js_name = getVolume)]
    fn get_volume(this: &EnginePlayer) -> f64;

    #[wasm_bindgen(method, js_name = setVolume)]
    fn set_volume(this: &EnginePlayer, volume: f64);

    #[wasm_bindgen(method)]
    fn mute(this: &EnginePlayer);

    #[wasm_bindgen(method, js_name = unMute)]
    fn un_mute(this: &EnginePlayer);

    #[wasm_bindgen(method, js_name = isMuted)]
    fn is_muted(this: &EnginePlayer) -> bool;

    #[wasm_bindgen(method, js_name = getPlayerState)]
    fn get_player_state(this: &EnginePlayer) -> i32;

    #[wasm_bindgen(method, js_name = setPlaybackQuality)]
    fn set_playback_quality(this: &EnginePlayer, quality: &str);
}

/// Inject the engine's API script once. The engine calls the page-global
/// `onYouTubeIframeAPIReady` when it has finished loading.
#[cfg(target_arch = "wasm32")]
fn ensure_iframe_api_script() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(IFRAME_API_SCRIPT_ID).is_some() {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    script.set_id(IFRAME_API_SCRIPT_ID);
    let _ = script.set_attribute("src", IFRAME_API_SRC);
    if let Some(body) = document.body() {
        let _ = body.append_child(&script);
    }
}

/// Whether the engine's constructor global is available yet.
#[cfg(target_arch = "wasm32")]
fn engine_api_loaded() -> bool {
    engine_constructor().is_some()
}

#[cfg(target_arch = "wasm32")]
fn engine_constructor() -> Option<Function> {
    let window = window()?;
    let namespace = Reflect::get(&window, &JsValue::from_str("YT")).ok()?;
    if namespace.is_undefined() || namespace.is_null() {
        return None;
    }
    let ctor = Reflect::get(&namespace, &JsValue::from_str("Player")).ok()?;
    ctor.dyn_into::<Function>().ok()
}

/// Construct the engine bound to the placeholder element, wiring the ready
/// and state-change notification callbacks into its option object.
#[cfg(target_arch = "wasm32")]
fn construct_engine_player(
    config: &VideoConfig,
    on_ready: &JsValue,
    on_state_change: &JsValue,
) -> Option<EnginePlayer> {
    let ctor = engine_constructor()?;

    let json = serde_json::to_string(config).ok()?;
    let options = js_sys::JSON::parse(&json).ok()?;

    // Callbacks cannot ride through JSON; attach them afterwards.
    let events = js_sys::Object::new();
    Reflect::set(&events, &JsValue::from_str("onReady"), on_ready).ok()?;
    Reflect::set(&events, &JsValue::from_str("onStateChange"), on_state_change).ok()?;
    Reflect::set(&options, &JsValue::from_str("events"), &events).ok()?;

    let args = js_sys::Array::of2(&JsValue::from_str(PLAYER_ELEMENT_ID), &options);
    match Reflect::construct(&ctor, &args) {
        Ok(instance) => Some(instance.unchecked_into::<EnginePlayer>()),
        Err(err) => {
            log_engine_warning("engine construction", &err);
            None
        }
    }
}
