//! Utility helpers for RustyReel: pure playback math shared by the control
//! surface and the video engine controller.

/// Render a position in seconds as `minutes:seconds` with the seconds
/// zero-padded to two digits. There is no hour component: an hour-long
/// position renders as "60:00".
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

/// Progress through the video as a percentage of its duration.
///
/// Returns `None` when the duration is unknown or zero so a poll tick can be
/// skipped instead of writing NaN into the progress slider.
#[allow(dead_code)]
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some(current_time / duration * 100.0)
}

/// Step the volume slider by `delta`, clamped to the slider's 0-100 range.
#[allow(dead_code)]
pub fn stepped_volume(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(0.0, 100.0)
}

/// Target for a relative seek. Deliberately unclamped: the engine clamps
/// out-of-range targets itself, so a seek from 2s by -5s requests -3s.
#[allow(dead_code)]
pub fn relative_seek_target(current_time: f64, offset: f64) -> f64 {
    current_time + offset
}

/// The three volume icon states. Muted wins over the numeric level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    Normal,
}

impl VolumeIcon {
    pub fn for_state(muted: bool, volume: f64) -> Self {
        if muted || volume <= 0.0 {
            VolumeIcon::Muted
        } else if volume < 50.0 {
            VolumeIcon::Low
        } else {
            VolumeIcon::Normal
        }
    }

    /// Icon identifier consumed by the `Icon` component.
    pub fn name(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "volume-mute",
            VolumeIcon::Low => "volume-low",
            VolumeIcon::Normal => "volume-high",
        }
    }
}

/// Icon identifier for the fullscreen toggle button.
pub fn fullscreen_icon(active: bool) -> &'static str {
    if active {
        "compress"
    } else {
        "expand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_zero_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(59.9), "0:59");
    }

    #[test]
    fn format_time_never_rolls_into_hours() {
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(7325.0), "122:05");
    }

    #[test]
    fn format_time_treats_garbage_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-4.0), "0:00");
    }

    #[test]
    fn progress_stays_within_slider_range() {
        let duration = 240.0;
        for t in 0..=240 {
            let pct = progress_percent(t as f64, duration).unwrap();
            assert!((0.0..=100.0).contains(&pct), "t={t} pct={pct}");
        }
        assert_eq!(progress_percent(120.0, 240.0), Some(50.0));
    }

    #[test]
    fn progress_is_skipped_without_a_duration() {
        assert_eq!(progress_percent(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, f64::NAN), None);
    }

    #[test]
    fn volume_steps_clamp_at_both_ends() {
        assert_eq!(stepped_volume(98.0, 5.0), 100.0);
        assert_eq!(stepped_volume(2.0, -5.0), 0.0);
        assert_eq!(stepped_volume(50.0, 5.0), 55.0);
        assert_eq!(stepped_volume(50.0, -5.0), 45.0);
    }

    #[test]
    fn relative_seek_is_passed_through_unclamped() {
        // The adapter forwards out-of-range targets as-is; clamping is the
        // engine's job. Seeking back 5s from 2s really does request -3s.
        assert_eq!(relative_seek_target(2.0, -5.0), -3.0);
        assert_eq!(relative_seek_target(10.0, 5.0), 15.0);
    }

    #[test]
    fn volume_icon_covers_every_slider_value() {
        for volume in 0..=100 {
            let icon = VolumeIcon::for_state(false, volume as f64);
            let expected = if volume == 0 {
                VolumeIcon::Muted
            } else if volume < 50 {
                VolumeIcon::Low
            } else {
                VolumeIcon::Normal
            };
            assert_eq!(icon, expected, "volume={volume}");
            // Muted always wins regardless of level.
            assert_eq!(VolumeIcon::for_state(true, volume as f64), VolumeIcon::Muted);
        }
    }

    #[test]
    fn double_mute_toggle_restores_the_icon() {
        let volume = 72.0;
        let before = VolumeIcon::for_state(false, volume);
        let muted = VolumeIcon::for_state(true, volume);
        let after = VolumeIcon::for_state(false, volume);
        assert_eq!(muted, VolumeIcon::Muted);
        assert_eq!(before, after);
        assert_eq!(after, VolumeIcon::Normal);
    }

    #[test]
    fn fullscreen_icon_tracks_document_state() {
        assert_eq!(fullscreen_icon(true), "compress");
        assert_eq!(fullscreen_icon(false), "expand");
    }
}
