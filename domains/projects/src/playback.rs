//! Interval playback for a project card
//!
//! Each card runs at most two interval tasks: one for the base carousel
//! and one for the zoom view. A task is owned by the controller, started
//! only when its view's governing conditions hold, and aborted the moment
//! they stop holding, so two timers for the same view never coexist.
//! State transitions happen under the card mutex; the tasks communicate
//! with the rest of the card only through that state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::domain::entities::MediaSet;
use crate::domain::state::{CardState, Direction};

/// Fixed autoplay period for both views
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy)]
enum View {
    Base,
    Zoom,
}

/// Playback controller owning the card state and its interval tasks
pub struct CardPlayback {
    state: Arc<Mutex<CardState>>,
    interval: Duration,
    base_timer: Option<JoinHandle<()>>,
    zoom_timer: Option<JoinHandle<()>>,
}

impl CardPlayback {
    /// Create a controller at the standard slideshow interval
    pub fn new(media: &MediaSet) -> Self {
        Self::with_interval(media, SLIDESHOW_INTERVAL)
    }

    /// Create a controller with a custom interval
    pub fn with_interval(media: &MediaSet, interval: Duration) -> Self {
        let mut playback = Self {
            state: Arc::new(Mutex::new(CardState::from_media(media))),
            interval,
            base_timer: None,
            zoom_timer: None,
        };
        playback.sync_timers();
        playback
    }

    /// Manual navigation; an open zoom view follows in lockstep
    pub fn advance(&mut self, direction: Direction) {
        self.state.lock().unwrap().advance(direction);
    }

    /// Manual navigation on the zoom view only
    pub fn zoom_advance(&mut self, direction: Direction) {
        self.state.lock().unwrap().zoom_advance(direction);
    }

    pub fn toggle_autoplay(&mut self) {
        self.state.lock().unwrap().toggle_autoplay();
        self.sync_timers();
    }

    pub fn toggle_zoom_autoplay(&mut self) {
        self.state.lock().unwrap().toggle_zoom_autoplay();
        self.sync_timers();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.state.lock().unwrap().set_hovered(hovered);
        self.sync_timers();
    }

    pub fn open_zoom(&mut self) {
        self.state.lock().unwrap().open_zoom();
        self.sync_timers();
    }

    pub fn close_zoom(&mut self) {
        self.state.lock().unwrap().close_zoom();
        self.sync_timers();
    }

    pub fn current_index(&self) -> usize {
        self.state.lock().unwrap().current_index()
    }

    pub fn zoom_index(&self) -> Option<usize> {
        self.state.lock().unwrap().zoom_index()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.state.lock().unwrap().is_autoplaying()
    }

    /// Copy of the full card state
    pub fn snapshot(&self) -> CardState {
        self.state.lock().unwrap().clone()
    }

    /// Start or stop each view's task to match the current state.
    ///
    /// Called after every transition that can change a governing
    /// condition. Index-only transitions never reset a running interval.
    fn sync_timers(&mut self) {
        let (base, zoom) = {
            let state = self.state.lock().unwrap();
            (state.base_should_tick(), state.zoom_should_tick())
        };

        if base && self.base_timer.is_none() {
            self.base_timer = Some(spawn_ticker(self.state.clone(), self.interval, View::Base));
        } else if !base {
            if let Some(timer) = self.base_timer.take() {
                timer.abort();
            }
        }

        if zoom && self.zoom_timer.is_none() {
            self.zoom_timer = Some(spawn_ticker(self.state.clone(), self.interval, View::Zoom));
        } else if !zoom {
            if let Some(timer) = self.zoom_timer.take() {
                timer.abort();
            }
        }
    }
}

impl Drop for CardPlayback {
    fn drop(&mut self) {
        // Card teardown discards any pending ticks
        if let Some(timer) = self.base_timer.take() {
            timer.abort();
        }
        if let Some(timer) = self.zoom_timer.take() {
            timer.abort();
        }
    }
}

fn spawn_ticker(state: Arc<Mutex<CardState>>, period: Duration, view: View) -> JoinHandle<()> {
    tokio::spawn(async move {
        // First tick one full period after the task starts
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            let mut state = state.lock().unwrap();
            match view {
                View::Base => {
                    if !state.base_should_tick() {
                        break;
                    }
                    state.tick_base();
                }
                View::Zoom => {
                    if !state.zoom_should_tick() {
                        break;
                    }
                    state.tick_zoom();
                }
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const TICK: Duration = Duration::from_millis(3000);
    // Comfortably past one period
    const TICK_PLUS: Duration = Duration::from_millis(3100);

    fn media(len: usize) -> MediaSet {
        MediaSet::new((0..len).map(|i| format!("/images/{}.png", i)).collect()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances_and_cycles() {
        let playback = CardPlayback::with_interval(&media(3), TICK);

        sleep(TICK_PLUS).await;
        assert_eq!(playback.current_index(), 1);

        sleep(TICK).await;
        assert_eq!(playback.current_index(), 2);

        sleep(TICK).await;
        assert_eq!(playback.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_image_never_advances() {
        let playback = CardPlayback::with_interval(&media(1), TICK);

        sleep(Duration::from_secs(30)).await;
        assert_eq!(playback.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_pauses_and_unhover_resumes() {
        let mut playback = CardPlayback::with_interval(&media(3), TICK);

        playback.set_hovered(true);
        sleep(Duration::from_secs(10)).await;
        assert_eq!(playback.current_index(), 0);

        playback.set_hovered(false);
        sleep(TICK_PLUS).await;
        assert_eq!(playback.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_autoplay_stops_the_timer() {
        let mut playback = CardPlayback::with_interval(&media(3), TICK);

        playback.toggle_autoplay();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(playback.current_index(), 0);
        assert!(!playback.is_autoplaying());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zoom_timer_runs_independently() {
        let mut playback = CardPlayback::with_interval(&media(4), TICK);

        playback.set_hovered(true); // base timer gated off
        playback.open_zoom();

        sleep(TICK_PLUS).await;
        assert_eq!(playback.current_index(), 0);
        assert_eq!(playback.zoom_index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_zoom_carries_playback_flag_back() {
        let mut playback = CardPlayback::with_interval(&media(3), TICK);

        playback.open_zoom();
        playback.toggle_zoom_autoplay();
        playback.close_zoom();

        assert!(!playback.is_autoplaying());
        sleep(Duration::from_secs(10)).await;
        // base timer stayed down after inheriting the paused flag
        assert_eq!(playback.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_advance_does_not_reset_conditions() {
        let mut playback = CardPlayback::with_interval(&media(5), TICK);

        playback.advance(Direction::Forward);
        playback.advance(Direction::Forward);
        assert_eq!(playback.current_index(), 2);

        sleep(TICK_PLUS).await;
        assert_eq!(playback.current_index(), 3);
    }
}
