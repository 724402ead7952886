//! Boot screen state machine: `Loading -> Welcome -> Fading -> Ready`.
//!
//! The host owns the timers and feeds their firings in; this type only decides transitions and
//! guarantees the ready signal is produced at most once.

use crate::config::BootConfig;

const FULL_PROGRESS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Loading,
    Welcome,
    Fading,
    Ready,
}

impl BootPhase {
    pub fn token(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Welcome => "welcome",
            Self::Fading => "fading",
            Self::Ready => "ready",
        }
    }
}

/// Transition the host must react to (cancel the progress interval, start the fade, unmount).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSignal {
    EnteredWelcome,
    StartedFade,
    DesktopReady,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootSequence {
    increment: f64,
    progress: f64,
    phase: BootPhase,
}

impl BootSequence {
    pub fn new(config: &BootConfig) -> Self {
        Self {
            increment: config.progress_increment(),
            progress: 0.0,
            phase: BootPhase::Loading,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Progress in `0.0..=100.0`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress rounded down for display.
    pub fn progress_percent(&self) -> u32 {
        self.progress.floor() as u32
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    /// Advances the bar by one step, clamping at exactly 100.
    pub fn on_progress_tick(&mut self) -> Option<BootSignal> {
        if self.phase != BootPhase::Loading {
            return None;
        }
        self.progress = (self.progress + self.increment).min(FULL_PROGRESS);
        if self.progress >= FULL_PROGRESS {
            self.phase = BootPhase::Welcome;
            return Some(BootSignal::EnteredWelcome);
        }
        None
    }

    pub fn on_fade_timer(&mut self) -> Option<BootSignal> {
        if self.phase != BootPhase::Welcome {
            return None;
        }
        self.phase = BootPhase::Fading;
        Some(BootSignal::StartedFade)
    }

    /// Finishes the sequence. Fires once, and only after progress reached 100.
    pub fn on_ready_timer(&mut self) -> Option<BootSignal> {
        match self.phase {
            BootPhase::Welcome | BootPhase::Fading => {
                self.phase = BootPhase::Ready;
                Some(BootSignal::DesktopReady)
            }
            BootPhase::Loading | BootPhase::Ready => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_to_welcome(boot: &mut BootSequence) -> usize {
        let mut ticks = 0;
        while boot.phase() == BootPhase::Loading {
            boot.on_progress_tick();
            ticks += 1;
            assert!(ticks <= 1000, "progress never completed");
        }
        ticks
    }

    #[test]
    fn progress_is_monotonic_and_lands_on_exactly_100() {
        let mut boot = BootSequence::new(&BootConfig::default());
        let mut last = boot.progress();
        loop {
            let signal = boot.on_progress_tick();
            assert!(boot.progress() >= last);
            assert!(boot.progress() <= 100.0);
            last = boot.progress();
            if signal == Some(BootSignal::EnteredWelcome) {
                break;
            }
        }
        assert_eq!(boot.progress(), 100.0);
        assert_eq!(boot.progress_percent(), 100);
        assert_eq!(boot.phase(), BootPhase::Welcome);
    }

    #[test]
    fn fills_in_about_the_configured_number_of_ticks() {
        let mut boot = BootSequence::new(&BootConfig::default());
        let ticks = run_to_welcome(&mut boot);
        assert!((90..=91).contains(&ticks), "took {ticks} ticks");
    }

    #[test]
    fn ticks_after_welcome_are_ignored() {
        let mut boot = BootSequence::new(&BootConfig::default());
        run_to_welcome(&mut boot);
        assert_eq!(boot.on_progress_tick(), None);
        assert_eq!(boot.progress(), 100.0);
    }

    #[test]
    fn ready_fires_exactly_once() {
        let mut boot = BootSequence::new(&BootConfig::default());
        assert_eq!(boot.on_ready_timer(), None, "not before progress completes");

        run_to_welcome(&mut boot);
        assert_eq!(boot.on_fade_timer(), Some(BootSignal::StartedFade));
        assert_eq!(boot.on_fade_timer(), None);
        assert_eq!(boot.on_ready_timer(), Some(BootSignal::DesktopReady));
        assert_eq!(boot.on_ready_timer(), None);
        assert!(boot.is_ready());
    }

    #[test]
    fn ready_can_follow_welcome_without_fade() {
        let mut boot = BootSequence::new(&BootConfig::default());
        run_to_welcome(&mut boot);
        assert_eq!(boot.on_ready_timer(), Some(BootSignal::DesktopReady));
        assert_eq!(boot.on_fade_timer(), None);
    }
}
