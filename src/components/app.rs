use crate::components::{
    EngineHandle, PlaybackState, Player, VideoController, PLAYER_ELEMENT_ID, VIDEO_CONTAINER_ID,
};
use dioxus::prelude::*;

// Shared control-surface state, provided via context as one-field newtypes so
// components can pick exactly the signals they need.

#[derive(Clone, Copy)]
pub struct EngineReadySignal(pub Signal<bool>);

#[derive(Clone, Copy)]
pub struct PlaybackStateSignal(pub Signal<PlaybackState>);

/// Progress slider position, 0-100.
#[derive(Clone, Copy)]
pub struct ProgressSignal(pub Signal<f64>);

#[derive(Clone, Copy)]
pub struct CurrentTimeSignal(pub Signal<f64>);

#[derive(Clone, Copy)]
pub struct DurationSignal(pub Signal<f64>);

/// Volume slider position, 0-100 (the engine's own volume scale).
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<f64>);

#[derive(Clone, Copy)]
pub struct MutedSignal(pub Signal<bool>);

/// Whether some element currently holds fullscreen. Written only by the
/// document-level fullscreen-change handler so exits via browser UI (Escape)
/// keep the toggle icon correct.
#[derive(Clone, Copy)]
pub struct FullscreenSignal(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let engine_ready = use_signal(|| false);
    let playback_state = use_signal(|| PlaybackState::Unstarted);
    let progress = use_signal(|| 0.0f64);
    let current_time = use_signal(|| 0.0f64);
    let duration = use_signal(|| 0.0f64);
    let volume = use_signal(|| 100.0f64);
    let muted = use_signal(|| false);
    let fullscreen = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| EngineReadySignal(engine_ready));
    use_context_provider(|| PlaybackStateSignal(playback_state));
    use_context_provider(|| ProgressSignal(progress));
    use_context_provider(|| CurrentTimeSignal(current_time));
    use_context_provider(|| DurationSignal(duration));
    use_context_provider(|| VolumeSignal(volume));
    use_context_provider(|| MutedSignal(muted));
    use_context_provider(|| FullscreenSignal(fullscreen));
    use_context_provider(EngineHandle::default);

    rsx! {
        div { class: "app-shell",
            div { class: "video-container", id: VIDEO_CONTAINER_ID,
                // Replaced by the engine's iframe once the API script loads.
                div { id: PLAYER_ELEMENT_ID }
            }
            Player {}
            VideoController {}
        }
    }
}
