//! Music Application
//!
//! Mock music player over a static playlist. Playback is simulated by
//! advancing a progress value on every tick.

use serde::Serialize;

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, MUSIC_MANIFEST};

/// Progress added per tick while playing, in percent
const PROGRESS_STEP: f32 = 0.5;

/// A playlist entry
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TrackInfo {
    pub title: &'static str,
    pub artist: &'static str,
}

const TRACKS: [TrackInfo; 4] = [
    TrackInfo { title: "Midnight Drive", artist: "Vector Haze" },
    TrackInfo { title: "Neon Rain", artist: "Arcade Heart" },
    TrackInfo { title: "Chrome Sunset", artist: "Polygon Wave" },
    TrackInfo { title: "Static Dreams", artist: "Grid Runner" },
];

/// Music state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct MusicState {
    pub track: TrackInfo,
    pub track_index: usize,
    pub track_count: usize,
    pub playing: bool,
    /// Playback position, 0.0 to 100.0
    pub progress: f32,
}

/// Music application state
#[derive(Default)]
pub struct MusicApp {
    playing: bool,
    track_index: usize,
    progress: f32,
}

impl MusicApp {
    fn select(&mut self, index: usize) {
        self.track_index = index;
        self.progress = 0.0;
    }
}

impl NeonApp for MusicApp {
    fn manifest() -> &'static AppManifest {
        &MUSIC_MANIFEST
    }

    fn tick(&mut self, _ctx: &mut AppContext) {
        if !self.playing {
            return;
        }

        self.progress += PROGRESS_STEP;
        if self.progress >= 100.0 {
            self.progress = 0.0;
        }
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        match name {
            "play_pause" => self.playing = !self.playing,
            "next" => self.select((self.track_index + 1) % TRACKS.len()),
            "prev" => self.select((self.track_index + TRACKS.len() - 1) % TRACKS.len()),
            _ => {}
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = MusicState {
            track: TRACKS[self.track_index],
            track_index: self.track_index,
            track_count: TRACKS.len(),
            playing: self.playing,
            progress: self.progress,
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
