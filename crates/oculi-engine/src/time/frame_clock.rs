use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Time elapsed since the clock was created.
    ///
    /// Periodic animations (blink phase) key off this rather than `now`, so
    /// the phase origin is the clock start and independent of process uptime.
    pub elapsed: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous frame rate, `1 / dt`.
    ///
    /// Diagnostic-only quantity; the dt floor in `FrameClock` keeps it finite.
    #[inline]
    pub fn fps(&self) -> f64 {
        1.0 / self.dt as f64
    }

    /// Elapsed time in whole milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `FrameClock` is designed to be used per loop so applications do not share
/// delta-time state.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior (and infinite fps) from tight loops
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),  // 0.0001s
            dt_max: Duration::from_millis(250),  // 0.25s
        }
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock as if the tick happened at `now`.
    ///
    /// Split out from [`tick`](Self::tick) so timing behavior is testable with
    /// constructed timestamps.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            elapsed: now.saturating_duration_since(self.start),
            frame_index: self.frame_index,
        };

        self.frame_index = self
            .frame_index
            .wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> FrameClock {
        // Wide clamps so tests observe raw deltas.
        FrameClock::with_clamps(Duration::from_micros(100), Duration::from_secs(10))
    }

    // ── delta / fps ───────────────────────────────────────────────────────

    #[test]
    fn one_second_apart_reports_one_fps() {
        let mut c = clock();
        let t0 = Instant::now();
        c.tick_at(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(1000));

        assert!((ft.dt - 1.0).abs() < 1e-6);
        assert!((ft.fps() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sixteen_ms_is_about_sixty_fps() {
        let mut c = clock();
        let t0 = Instant::now();
        c.tick_at(t0);
        let ft = c.tick_at(t0 + Duration::from_micros(16_667));

        assert!((ft.fps() - 60.0).abs() < 0.1);
    }

    #[test]
    fn zero_delta_is_floored() {
        let mut c = clock();
        let t0 = Instant::now();
        c.tick_at(t0);
        let ft = c.tick_at(t0);

        // Same timestamp twice: the dt floor keeps fps finite.
        assert!(ft.dt > 0.0);
        assert!(ft.fps().is_finite());
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut c = FrameClock::with_clamps(Duration::from_micros(100), Duration::from_millis(250));
        let t0 = Instant::now();
        c.tick_at(t0);
        let ft = c.tick_at(t0 + Duration::from_secs(30));

        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    // ── counters ──────────────────────────────────────────────────────────

    #[test]
    fn frame_index_increments_per_tick() {
        let mut c = clock();
        let t0 = Instant::now();
        assert_eq!(c.tick_at(t0).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(10)).frame_index, 1);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(20)).frame_index, 2);
    }

    #[test]
    fn elapsed_measures_from_clock_start() {
        let mut c = clock();
        let t0 = Instant::now();
        c.tick_at(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(1500));

        assert!(ft.elapsed_ms() >= 1500);
    }
}
