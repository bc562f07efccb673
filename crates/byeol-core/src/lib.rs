//! Core types shared across the byeol downloader crates.

use ratatui::style::Color;
use serde::Deserialize;

/// Output format requested from the download backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloadFormat {
    #[default]
    Mp4,
    Mp3,
}

impl DownloadFormat {
    /// Toggle between video and audio output.
    pub fn toggle(self) -> Self {
        match self {
            DownloadFormat::Mp4 => DownloadFormat::Mp3,
            DownloadFormat::Mp3 => DownloadFormat::Mp4,
        }
    }

    /// File extension, which doubles as the wire value sent to the backend.
    pub fn extension(self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "mp4",
            DownloadFormat::Mp3 => "mp3",
        }
    }

    /// Label shown next to the selector in the form.
    pub fn label(self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "MP4 (Video)",
            DownloadFormat::Mp3 => "MP3 (Audio)",
        }
    }
}

/// Lifecycle of a single download attempt.
///
/// `Idle → Submitting → {Succeeded, Failed}`; a terminal phase is
/// overwritten by the next submission. The variant carries the user-facing
/// message, so display code never inspects the text to classify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl DownloadPhase {
    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, DownloadPhase::Submitting)
    }

    /// The status message to display, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            DownloadPhase::Idle => None,
            DownloadPhase::Submitting => Some("Downloading... Please wait."),
            DownloadPhase::Succeeded(msg) | DownloadPhase::Failed(msg) => Some(msg),
        }
    }

    /// Status box color for this phase.
    pub fn color(&self) -> Color {
        match self {
            DownloadPhase::Idle => Color::DarkGray,
            DownloadPhase::Submitting => Color::Yellow,
            DownloadPhase::Succeeded(_) => Color::Green,
            DownloadPhase::Failed(_) => Color::Red,
        }
    }
}

/// Tuning knobs for the starfield scene.
///
/// Loaded from the `[scene]` table of the config file; every field falls
/// back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneOptions {
    /// Number of static field stars created at startup.
    #[serde(default = "SceneOptions::default_star_count")]
    pub star_count: usize,
    /// Half-extent of the cube stars live in, centered on the origin.
    #[serde(default = "SceneOptions::default_field_extent")]
    pub field_extent: f32,
    /// Field rotation about the y axis, radians per 60 Hz frame.
    #[serde(default = "SceneOptions::default_rotation_per_frame")]
    pub rotation_per_frame: f32,
    /// Wall-clock interval between shooting star spawns.
    #[serde(default = "SceneOptions::default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    /// Lower bound of the shooting star speed range, units per frame.
    #[serde(default = "SceneOptions::default_min_speed")]
    pub min_speed: f32,
    /// Upper bound of the shooting star speed range, units per frame.
    #[serde(default = "SceneOptions::default_max_speed")]
    pub max_speed: f32,
    /// A star is retired once its x or y position drops below this.
    #[serde(default = "SceneOptions::default_retire_below")]
    pub retire_below: f32,
    /// Hard cap on simultaneously active shooting stars.
    #[serde(default = "SceneOptions::default_max_active")]
    pub max_active: usize,
}

impl SceneOptions {
    fn default_star_count() -> usize {
        1000
    }
    fn default_field_extent() -> f32 {
        10.0
    }
    fn default_rotation_per_frame() -> f32 {
        0.0005
    }
    fn default_spawn_interval_ms() -> u64 {
        2000
    }
    fn default_min_speed() -> f32 {
        0.05
    }
    fn default_max_speed() -> f32 {
        0.15
    }
    fn default_retire_below() -> f32 {
        -10.0
    }
    fn default_max_active() -> usize {
        64
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            star_count: Self::default_star_count(),
            field_extent: Self::default_field_extent(),
            rotation_per_frame: Self::default_rotation_per_frame(),
            spawn_interval_ms: Self::default_spawn_interval_ms(),
            min_speed: Self::default_min_speed(),
            max_speed: Self::default_max_speed(),
            retire_below: Self::default_retire_below(),
            max_active: Self::default_max_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_toggle_and_extension() {
        assert_eq!(DownloadFormat::Mp4.toggle(), DownloadFormat::Mp3);
        assert_eq!(DownloadFormat::Mp3.toggle(), DownloadFormat::Mp4);
        assert_eq!(DownloadFormat::Mp4.extension(), "mp4");
        assert_eq!(DownloadFormat::Mp3.extension(), "mp3");
        assert_eq!(DownloadFormat::default(), DownloadFormat::Mp4);
    }

    #[test]
    fn test_phase_busy_and_message() {
        assert!(DownloadPhase::Submitting.is_busy());
        assert!(!DownloadPhase::Idle.is_busy());
        assert!(!DownloadPhase::Failed("Error: x".into()).is_busy());
        assert_eq!(DownloadPhase::Idle.message(), None);
        assert_eq!(
            DownloadPhase::Succeeded("done".into()).message(),
            Some("done")
        );
    }

    #[test]
    fn test_scene_options_defaults() {
        let opts = SceneOptions::default();
        assert_eq!(opts.star_count, 1000);
        assert_eq!(opts.spawn_interval_ms, 2000);
        assert_eq!(opts.retire_below, -10.0);
        assert!(opts.min_speed < opts.max_speed);
    }
}
