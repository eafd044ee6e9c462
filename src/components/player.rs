use crate::components::{
    toggle_fullscreen, CurrentTimeSignal, DurationSignal, EngineHandle, FullscreenSignal, Icon,
    MutedSignal, PlaybackStateSignal, ProgressSignal, VolumeSignal, QUALITY_LEVELS,
};
use crate::utils::{format_time, fullscreen_icon, VolumeIcon};
use dioxus::prelude::*;

#[component]
pub fn Player() -> Element {
    let engine = use_context::<EngineHandle>();
    let mut progress = use_context::<ProgressSignal>().0;
    let mut volume = use_context::<VolumeSignal>().0;
    let current_time = use_context::<CurrentTimeSignal>().0;
    let duration = use_context::<DurationSignal>().0;

    let on_seek_input = {
        let engine = engine.clone();
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                progress.set(percent);
                engine.seek_to_percent(percent);
            }
        }
    };

    let on_volume_input = {
        let engine = engine.clone();
        move |e: Event<FormData>| {
            if let Ok(level) = e.value().parse::<f64>() {
                let level = level.clamp(0.0, 100.0);
                volume.set(level);
                engine.set_volume(level);
            }
        }
    };

    let on_quality_change = {
        let engine = engine.clone();
        move |e: Event<FormData>| {
            engine.set_quality(&e.value());
        }
    };

    rsx! {
        div { class: "player-shell",
            div { class: "progress-row",
                span { id: "time-display", class: "time-display",
                    "{format_time(current_time())} / {format_time(duration())}"
                }
                input {
                    id: "progress-bar",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: progress().round() as i32,
                    class: "progress-bar",
                    oninput: on_seek_input,
                }
            }
            div { class: "player-controls",
                PlayPauseButton {}
                MuteButton {}
                input {
                    id: "volume-bar",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: volume().round() as i32,
                    class: "volume-bar",
                    oninput: on_volume_input,
                }
                select {
                    id: "quality-select",
                    class: "quality-select",
                    onchange: on_quality_change,
                    for (value , label) in QUALITY_LEVELS {
                        option { value: "{value}", "{label}" }
                    }
                }
                FullscreenButton {}
            }
        }
    }
}

/// Play/pause toggle - the icon tracks the engine's state-change
/// notifications, not the click, so external transitions stay in sync.
#[component]
fn PlayPauseButton() -> Element {
    let engine = use_context::<EngineHandle>();
    let playback_state = use_context::<PlaybackStateSignal>().0;
    let playing = playback_state().is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "control-btn play-pause-btn",
            onclick: move |_| engine.toggle_play_pause(),
            if playing {
                Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

/// Mute toggle. Doubles as the volume icon: muted-or-zero, low (<50) and
/// normal (>=50) levels map to three distinct icons, muted winning.
#[component]
fn MuteButton() -> Element {
    let engine = use_context::<EngineHandle>();
    let volume = use_context::<VolumeSignal>().0;
    let mut muted = use_context::<MutedSignal>().0;
    let icon = VolumeIcon::for_state(muted(), volume());

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: "control-btn",
            onclick: move |_| {
                engine.toggle_mute();
                muted.set(engine.muted());
            },
            span { id: "volume-icon",
                Icon { name: icon.name().to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

/// Fullscreen toggle. The icon is owned by the document's fullscreen-change
/// handler rather than this click, so leaving fullscreen via Escape or any
/// other browser path keeps it correct.
#[component]
fn FullscreenButton() -> Element {
    let fullscreen = use_context::<FullscreenSignal>().0;

    rsx! {
        button {
            id: "fullscreen-btn",
            r#type: "button",
            class: "control-btn",
            onclick: move |_| toggle_fullscreen(),
            Icon {
                name: fullscreen_icon(fullscreen()).to_string(),
                class: "w-5 h-5".to_string(),
            }
        }
    }
}
