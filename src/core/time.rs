//! Frame timing utilities

use std::time::{Duration, Instant};

/// Tracks frame timing and calculates FPS
pub struct FrameTimer {
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameTimer {
    /// Create a new frame timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Call once per frame to update timing
    ///
    /// Returns true when the FPS estimate was refreshed this frame.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        // Update FPS every second
        let fps_elapsed = now.saturating_duration_since(self.fps_timer);
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
            return true;
        }
        false
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get delta time as Duration
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_and_count() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame;

        timer.tick_at(start + Duration::from_millis(16));
        assert_eq!(timer.frame_count(), 1);
        assert_eq!(timer.delta(), Duration::from_millis(16));

        timer.tick_at(start + Duration::from_millis(48));
        assert_eq!(timer.frame_count(), 2);
        assert!((timer.delta_secs() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_fps_refresh() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame;

        for i in 1..60 {
            assert!(!timer.tick_at(start + Duration::from_millis(i * 10)));
        }
        assert!(timer.tick_at(start + Duration::from_secs(1)));
        assert!((timer.fps() - 60.0).abs() < 0.01);
    }
}
