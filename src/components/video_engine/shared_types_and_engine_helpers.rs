// Shared imports, state primitives, and browser-specific helper utilities.
use dioxus::prelude::*;
use serde::Serialize;

#[cfg(target_arch = "wasm32")]
use crate::utils::{progress_percent, relative_seek_target, stepped_volume};

#[cfg(target_arch = "wasm32")]
use crate::components::{
    CurrentTimeSignal, DurationSignal, EngineReadySignal, FullscreenSignal, MutedSignal,
    PlaybackStateSignal, ProgressSignal, VolumeSignal,
};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

/// DOM id of the placeholder element the engine replaces with its iframe.
pub const PLAYER_ELEMENT_ID: &str = "player";

/// DOM id of the element sent fullscreen by the fullscreen toggle.
pub const VIDEO_CONTAINER_ID: &str = "video-container";

#[cfg(target_arch = "wasm32")]
const IFRAME_API_SCRIPT_ID: &str = "rustyreel-iframe-api";

#[cfg(target_arch = "wasm32")]
const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";

/// Playback states reported by the engine's state-change notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlaybackState {
    /// Decode the numeric state code carried by the notification payload.
    /// Unknown codes collapse to `Unstarted` rather than erroring; the engine
    /// owns its state space and may grow it.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PlaybackState::Ended,
            1 => PlaybackState::Playing,
            2 => PlaybackState::Paused,
            3 => PlaybackState::Buffering,
            5 => PlaybackState::Cued,
            _ => PlaybackState::Unstarted,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}

/// Quality labels offered by the selector, paired with their display names.
/// The engine silently ignores labels it cannot serve for the current video.
pub const QUALITY_LEVELS: [(&str, &str); 6] = [
    ("default", "Auto"),
    ("hd1080", "1080p"),
    ("hd720", "720p"),
    ("large", "480p"),
    ("medium", "360p"),
    ("small", "240p"),
];

/// Control operations reachable from the keyboard.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    TogglePlayPause,
    SeekBy(f64),
    VolumeBy(f64),
    ToggleFullscreen,
}

/// Map a keydown `code` to its control operation.
#[allow(dead_code)]
pub fn control_action_for_code(code: &str) -> Option<ControlAction> {
    match code {
        "Space" => Some(ControlAction::TogglePlayPause),
        "ArrowLeft" => Some(ControlAction::SeekBy(-5.0)),
        "ArrowRight" => Some(ControlAction::SeekBy(5.0)),
        "ArrowUp" => Some(ControlAction::VolumeBy(5.0)),
        "ArrowDown" => Some(ControlAction::VolumeBy(-5.0)),
        "KeyF" => Some(ControlAction::ToggleFullscreen),
        _ => None,
    }
}

/// Construction options handed to the engine, serialized straight into the
/// option object the engine constructor expects.
#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    pub video_id: String,
    pub width: u32,
    pub height: u32,
    pub player_vars: PlayerVars,
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct PlayerVars {
    pub playsinline: u8,
    pub controls: u8,
    pub rel: u8,
    pub modestbranding: u8,
    pub enablejsapi: u8,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            video_id: "iu7EPDvxvYc".to_string(),
            width: 640,
            height: 360,
            player_vars: PlayerVars {
                playsinline: 1,
                controls: 0,
                rel: 0,
                modestbranding: 1,
                enablejsapi: 1,
            },
        }
    }
}

// Fullscreen availability is a runtime property of the host browser, so the
// vendor-prefixed forms are probed in order at call time.
#[cfg(target_arch = "wasm32")]
const FULLSCREEN_ELEMENT_PROPS: [&str; 4] = [
    "fullscreenElement",
    "mozFullScreenElement",
    "webkitFullscreenElement",
    "msFullscreenElement",
];

#[cfg(target_arch = "wasm32")]
const REQUEST_FULLSCREEN_METHODS: [&str; 4] = [
    "requestFullscreen",
    "mozRequestFullScreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];

#[cfg(target_arch = "wasm32")]
const EXIT_FULLSCREEN_METHODS: [&str; 4] = [
    "exitFullscreen",
    "mozCancelFullScreen",
    "webkitExitFullscreen",
    "msExitFullscreen",
];

#[cfg(target_arch = "wasm32")]
pub(crate) const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Whether any element currently holds fullscreen, across vendor prefixes.
#[cfg(target_arch = "wasm32")]
pub fn fullscreen_active() -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let document = JsValue::from(document);
    FULLSCREEN_ELEMENT_PROPS.iter().any(|prop| {
        Reflect::get(&document, &JsValue::from_str(prop))
            .map(|value| !value.is_null() && !value.is_undefined())
            .unwrap_or(false)
    })
}

/// Invoke the first method of `methods` present on `target`.
#[cfg(target_arch = "wasm32")]
fn call_first_supported(target: &JsValue, methods: &[&str]) {
    for name in methods {
        let Ok(value) = Reflect::get(target, &JsValue::from_str(name)) else {
            continue;
        };
        let Ok(function) = value.dyn_into::<Function>() else {
            continue;
        };
        if let Err(err) = function.call0(target) {
            log_engine_warning(name, &err);
        }
        return;
    }
}

/// Enter fullscreen on the video container, or leave it if any element is
/// currently fullscreen. The toggle button's icon is deliberately not touched
/// here; the fullscreenchange handler owns it so exits via browser UI
/// (Escape) stay in sync.
#[cfg(target_arch = "wasm32")]
pub fn toggle_fullscreen() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if fullscreen_active() {
        call_first_supported(&JsValue::from(document), &EXIT_FULLSCREEN_METHODS);
    } else if let Some(container) = document.get_element_by_id(VIDEO_CONTAINER_ID) {
        call_first_supported(&JsValue::from(container), &REQUEST_FULLSCREEN_METHODS);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_fullscreen() {}

/// Keyboard shortcuts stay out of the way while the user is typing.
#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(element) = target.dyn_into::<web_sys::Element>() else {
        return false;
    };
    match element.tag_name().to_ascii_uppercase().as_str() {
        "TEXTAREA" => true,
        "INPUT" => {
            let kind = element
                .get_attribute("type")
                .unwrap_or_else(|| "text".to_string());
            matches!(
                kind.as_str(),
                "text" | "search" | "email" | "password" | "number" | "url" | "tel"
            )
        }
        _ => element
            .dyn_into::<HtmlElement>()
            .map(|el| el.is_content_editable())
            .unwrap_or(false),
    }
}

/// Dispatch a keyboard shortcut through the on-screen button so both paths
/// share one code path and the button's own handler stays authoritative.
#[cfg(target_arch = "wasm32")]
fn click_player_control_button(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}

/// Unexpected JS-side failures land on the browser console; the control
/// surface itself never surfaces errors.
#[cfg(target_arch = "wasm32")]
fn log_engine_warning(scope: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(&format!("[rustyreel] {scope}")), err);
}

#[cfg(test)]
mod shared_type_tests {
    use super::*;

    #[test]
    fn state_codes_decode_per_the_engine_contract() {
        assert_eq!(PlaybackState::from_code(-1), PlaybackState::Unstarted);
        assert_eq!(PlaybackState::from_code(0), PlaybackState::Ended);
        assert_eq!(PlaybackState::from_code(1), PlaybackState::Playing);
        assert_eq!(PlaybackState::from_code(2), PlaybackState::Paused);
        assert_eq!(PlaybackState::from_code(3), PlaybackState::Buffering);
        assert_eq!(PlaybackState::from_code(5), PlaybackState::Cued);
        // Unknown codes fold into Unstarted.
        assert_eq!(PlaybackState::from_code(42), PlaybackState::Unstarted);
        assert!(PlaybackState::from_code(1).is_playing());
        assert!(!PlaybackState::from_code(3).is_playing());
    }

    #[test]
    fn every_shortcut_key_maps_to_its_operation() {
        assert_eq!(
            control_action_for_code("Space"),
            Some(ControlAction::TogglePlayPause)
        );
        assert_eq!(
            control_action_for_code("ArrowLeft"),
            Some(ControlAction::SeekBy(-5.0))
        );
        assert_eq!(
            control_action_for_code("ArrowRight"),
            Some(ControlAction::SeekBy(5.0))
        );
        assert_eq!(
            control_action_for_code("ArrowUp"),
            Some(ControlAction::VolumeBy(5.0))
        );
        assert_eq!(
            control_action_for_code("ArrowDown"),
            Some(ControlAction::VolumeBy(-5.0))
        );
        assert_eq!(
            control_action_for_code("KeyF"),
            Some(ControlAction::ToggleFullscreen)
        );
        assert_eq!(control_action_for_code("KeyQ"), None);
        assert_eq!(control_action_for_code("Enter"), None);
    }

    #[test]
    fn engine_options_serialize_with_engine_key_names() {
        let json = serde_json::to_value(VideoConfig::default()).unwrap();
        assert_eq!(json["videoId"], "iu7EPDvxvYc");
        assert_eq!(json["playerVars"]["playsinline"], 1);
        assert_eq!(json["playerVars"]["controls"], 0);
        assert_eq!(json["playerVars"]["rel"], 0);
        assert_eq!(json["playerVars"]["modestbranding"], 1);
        assert_eq!(json["playerVars"]["enablejsapi"], 1);
        assert_eq!(json["width"], 640);
        assert_eq!(json["height"], 360);
    }
}
