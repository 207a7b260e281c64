//! Auto-rotating image carousel state
//!
//! A carousel holds no timer of its own. Its frame is derived from the time
//! elapsed since the page was shown, so redraws are cheap and tests do not
//! need a clock.

use std::time::{Duration, Instant};

/// Length of the slide-over animation after each advance
pub const TRANSITION: Duration = Duration::from_secs(1);

/// What to draw for a carousel at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    pub index: usize,
    /// Image sliding out during a transition
    pub previous: &'static str,
    pub current: &'static str,
    /// 0.0 when `current` starts sliding in, 1.0 once it fully covers `previous`
    pub progress: f32,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    images: &'static [&'static str],
    start_delay: Duration,
    interval: Duration,
    shown_at: Instant,
}

impl Carousel {
    pub fn new(
        images: &'static [&'static str],
        start_delay: Duration,
        interval: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            images,
            start_delay,
            interval,
            shown_at,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Restart rotation from the first image
    pub fn restart(&mut self, now: Instant) {
        self.shown_at = now;
    }

    /// Index of the image on show after `elapsed`.
    ///
    /// The first advance happens one interval after the start delay.
    pub fn index_at(&self, elapsed: Duration) -> usize {
        let interval_ms = self.interval.as_millis();
        if self.images.is_empty() || interval_ms == 0 || elapsed < self.start_delay {
            return 0;
        }
        let running = elapsed - self.start_delay;
        let steps = running.as_millis() / interval_ms;
        (steps % self.images.len() as u128) as usize
    }

    pub fn frame_at(&self, elapsed: Duration) -> Option<CarouselFrame> {
        if self.images.is_empty() {
            return None;
        }

        let index = self.index_at(elapsed);
        let len = self.images.len();
        let interval_ms = self.interval.as_millis();
        let first_advance = self.start_delay + self.interval;
        let progress = if interval_ms == 0 || elapsed < first_advance {
            1.0
        } else {
            let since_advance = (elapsed - self.start_delay).as_millis() % interval_ms;
            let linear = (since_advance as f32 / TRANSITION.as_millis() as f32).min(1.0);
            simple_easing::sine_in_out(linear)
        };

        Some(CarouselFrame {
            index,
            previous: self.images[(index + len - 1) % len],
            current: self.images[index],
            progress,
        })
    }

    pub fn frame(&self, now: Instant) -> Option<CarouselFrame> {
        self.frame_at(now.saturating_duration_since(self.shown_at))
    }
}
