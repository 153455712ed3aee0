//! Opening banner animation

use std::time::{Duration, Instant};

/// Stage of the opening banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Tagline typed out one character at a time
    Typing,
    /// Full banner held on screen
    Hold,
    /// Banner sliding off the top
    SlideOut,
    Complete,
}

pub const TAGLINE: &str = "Become the PM you were meant to be";

#[derive(Debug)]
pub struct SplashState {
    pub start_time: Instant,
    pub phase: SplashPhase,
    /// Characters of the tagline revealed so far
    pub revealed: usize,
    /// Rows the banner has moved up
    pub scroll_offset: f32,
}

impl SplashState {
    const TYPING_DURATION: Duration = Duration::from_millis(900);
    const HOLD_DURATION: Duration = Duration::from_millis(700);
    const SLIDE_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Typing,
            revealed: 0,
            scroll_offset: 0.0,
        }
    }

    pub fn update(&mut self, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        self.update_at(self.start_time.elapsed(), terminal_height);
    }

    /// Advance the animation to `elapsed` since start
    pub fn update_at(&mut self, elapsed: Duration, terminal_height: u16) {
        let tagline_len = TAGLINE.chars().count();
        let hold_at = Self::TYPING_DURATION;
        let slide_at = hold_at + Self::HOLD_DURATION;
        let done_at = slide_at + Self::SLIDE_DURATION;

        if elapsed < hold_at {
            self.phase = SplashPhase::Typing;
            let progress = elapsed.as_secs_f32() / hold_at.as_secs_f32();
            self.revealed = (progress * tagline_len as f32) as usize;
        } else if elapsed < slide_at {
            self.phase = SplashPhase::Hold;
            self.revealed = tagline_len;
        } else if elapsed < done_at {
            self.phase = SplashPhase::SlideOut;
            self.revealed = tagline_len;
            let progress = (elapsed - slide_at).as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
            self.scroll_offset = simple_easing::cubic_in(progress) * terminal_height as f32;
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Any key ends the banner
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }

    pub fn visible_tagline(&self) -> &'static str {
        TAGLINE
            .char_indices()
            .nth(self.revealed)
            .map_or(TAGLINE, |(idx, _)| &TAGLINE[..idx])
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
