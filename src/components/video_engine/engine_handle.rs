// Ready-guarded engine handle. Provided once via context so every handler
// reaches the same engine instance without free-standing globals; every
// operation is a silent no-op until the engine reports ready.

#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct EngineInner {
    player: Option<EnginePlayer>,
    ready: bool,
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct EngineHandle {
    inner: Rc<RefCell<EngineInner>>,
}

#[cfg(target_arch = "wasm32")]
impl EngineHandle {
    fn attach(&self, player: EnginePlayer) {
        self.inner.borrow_mut().player = Some(player);
    }

    fn mark_ready(&self) {
        self.inner.borrow_mut().ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().ready
    }

    fn with_player<R>(&self, f: impl FnOnce(&EnginePlayer) -> R) -> Option<R> {
        let inner = self.inner.borrow();
        if !inner.ready {
            return None;
        }
        inner.player.as_ref().map(f)
    }

    /// Pause when playing, play otherwise (every non-playing state plays).
    pub fn toggle_play_pause(&self) {
        let _ = self.with_player(|p| {
            if PlaybackState::from_code(p.get_player_state()).is_playing() {
                p.pause_video();
            } else {
                p.play_video();
            }
        });
    }

    pub fn current_time(&self) -> f64 {
        self.with_player(|p| p.get_current_time()).unwrap_or(0.0)
    }

    pub fn duration(&self) -> f64 {
        self.with_player(|p| {
            let d = p.get_duration();
            if d.is_nan() {
                0.0
            } else {
                d
            }
        })
        .unwrap_or(0.0)
    }

    /// Seek to a slider percentage of the duration. An unknown duration makes
    /// the target 0.
    pub fn seek_to_percent(&self, percent: f64) {
        let _ = self.with_player(|p| {
            let duration = p.get_duration();
            let duration = if duration.is_nan() { 0.0 } else { duration };
            p.seek_to(duration * (percent / 100.0), true);
        });
    }

    /// Seek relative to the current position. The target is passed through
    /// unclamped; the engine clamps out-of-range targets itself.
    pub fn seek_by(&self, offset: f64) {
        let _ = self.with_player(|p| {
            p.seek_to(relative_seek_target(p.get_current_time(), offset), true);
        });
    }

    pub fn volume(&self) -> f64 {
        self.with_player(|p| p.get_volume()).unwrap_or(0.0)
    }

    pub fn set_volume(&self, volume: f64) {
        let _ = self.with_player(|p| p.set_volume(volume));
    }

    pub fn muted(&self) -> bool {
        self.with_player(|p| p.is_muted()).unwrap_or(false)
    }

    pub fn toggle_mute(&self) {
        let _ = self.with_player(|p| {
            if p.is_muted() {
                p.un_mute();
            } else {
                p.mute();
            }
        });
    }

    /// Request a playback quality. The engine may silently ignore labels it
    /// cannot serve; no error is surfaced.
    pub fn set_quality(&self, label: &str) {
        let _ = self.with_player(|p| p.set_playback_quality(label));
    }
}

// Inert twin for native targets so the crate and its tests build on a host.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct EngineHandle;

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
impl EngineHandle {
    pub fn is_ready(&self) -> bool {
        false
    }

    pub fn toggle_play_pause(&self) {}

    pub fn current_time(&self) -> f64 {
        0.0
    }

    pub fn duration(&self) -> f64 {
        0.0
    }

    pub fn seek_to_percent(&self, _percent: f64) {}

    pub fn seek_by(&self, _offset: f64) {}

    pub fn volume(&self) -> f64 {
        0.0
    }

    pub fn set_volume(&self, _volume: f64) {}

    pub fn muted(&self) -> bool {
        false
    }

    pub fn toggle_mute(&self) {}

    pub fn set_quality(&self, _label: &str) {}
}
