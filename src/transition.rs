//! # Popup Menu Theme Transitions
//!
//! Smoothly animates a popup menu from one theme to another, for example when
//! the application switches between light and dark while a menu is open.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::popup_menu_theme::PopupMenuThemeData;

/// Whether popup menus animate theme changes, and for how long.
///
/// Read from the `[transition]` table of the popup menu theme config file.
/// Transitions are off unless the file turns them on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Animate theme changes.
    pub enabled: bool,
    /// Length of the animation in milliseconds.
    pub duration_ms: u64,
}

impl TransitionConfig {
    const DEFAULT_DURATION_MS: u64 = 300;

    /// Enabled transitions lasting `duration`.
    pub fn enabled_for(duration: Duration) -> Self {
        Self {
            enabled: true,
            duration_ms: duration.as_millis().try_into().unwrap_or(u64::MAX),
        }
    }

    /// The animation length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Start animating from `start` to `target`, or `None` when disabled.
    pub fn begin(
        &self,
        start: PopupMenuThemeData,
        target: PopupMenuThemeData,
    ) -> Option<PopupMenuThemeTransition> {
        if !self.enabled {
            log::debug!("Popup menu theme transitions disabled, switching immediately");
            return None;
        }
        Some(PopupMenuThemeTransition::new(start, target, self.duration()))
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }
}

/// State of an active popup menu theme transition.
#[derive(Debug, Clone)]
pub struct PopupMenuThemeTransition {
    start: PopupMenuThemeData,
    target: PopupMenuThemeData,
    start_time: Instant,
    duration: Duration,
}

impl PopupMenuThemeTransition {
    /// Start a transition from `start` to `target` now.
    pub fn new(start: PopupMenuThemeData, target: PopupMenuThemeData, duration: Duration) -> Self {
        Self {
            start,
            target,
            start_time: Instant::now(),
            duration,
        }
    }

    /// Check if the transition is complete.
    pub fn is_complete(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Get the elapsed time since the transition started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get the progress of the transition (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        let elapsed = self.elapsed();
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// The theme at progress `t`.
    pub fn at(&self, t: f32) -> PopupMenuThemeData {
        PopupMenuThemeData::lerp(Some(&self.start), Some(&self.target), t).unwrap_or_default()
    }

    /// The theme at the current progress.
    pub fn current(&self) -> PopupMenuThemeData {
        if self.is_complete() {
            return self.target.clone();
        }
        self.at(self.progress())
    }

    /// Get the starting theme.
    pub fn start(&self) -> &PopupMenuThemeData {
        &self.start
    }

    /// Get the target theme.
    pub fn target(&self) -> &PopupMenuThemeData {
        &self.target
    }
}
