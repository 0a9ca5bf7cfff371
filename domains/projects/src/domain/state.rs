//! Carousel and zoom state machine for a project card
//!
//! One card owns a base carousel and, while the modal is open, a zoom
//! view. Each view has its own playback flag and index; they interact
//! only at well-defined transition points:
//! - `open_zoom` seeds the zoom view from the carousel
//! - manual `advance` keeps an open zoom view in lockstep
//! - `close_zoom` writes the zoom playback flag back to the carousel
//!
//! Independent autoplay never crosses views, and the base index is not
//! resynchronized on close (the zoom index may have drifted; that drift
//! is intentional and kept).

use thiserror::Error;

use super::entities::MediaSet;

/// Errors that can occur constructing card state
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("A carousel requires at least one image")]
    EmptyMediaSet,
}

/// Manual navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Base carousel view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub hovered: bool,
    pub autoplay: bool,
}

/// Modal zoom view state, present only while the modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    pub index: usize,
    pub autoplay: bool,
}

/// Complete per-card state: media length plus both views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    len: usize,
    carousel: CarouselState,
    zoom: Option<ZoomState>,
}

impl CardState {
    /// Create card state over a media set of `media_len` images.
    ///
    /// An empty media set is a configuration error, caught here so a bad
    /// catalog fails loudly instead of producing an unusable card.
    pub fn new(media_len: usize) -> Result<Self, StateError> {
        if media_len == 0 {
            return Err(StateError::EmptyMediaSet);
        }
        Ok(Self {
            len: media_len,
            carousel: CarouselState {
                current_index: 0,
                hovered: false,
                autoplay: true,
            },
            zoom: None,
        })
    }

    /// Create card state directly from a media set (non-empty by construction)
    pub fn from_media(media: &MediaSet) -> Self {
        Self {
            len: media.len(),
            carousel: CarouselState {
                current_index: 0,
                hovered: false,
                autoplay: true,
            },
            zoom: None,
        }
    }

    fn step(&self, index: usize, direction: Direction) -> usize {
        match direction {
            Direction::Forward => (index + 1) % self.len,
            Direction::Back => (index + self.len - 1) % self.len,
        }
    }

    /// Manual navigation on the base view.
    ///
    /// An open zoom view follows in lockstep; this is the only point where
    /// navigation propagates between the views.
    pub fn advance(&mut self, direction: Direction) {
        let next = self.step(self.carousel.current_index, direction);
        self.carousel.current_index = next;
        if let Some(zoom) = &mut self.zoom {
            zoom.index = next;
        }
    }

    /// Manual navigation on the zoom view only
    pub fn zoom_advance(&mut self, direction: Direction) {
        let len = self.len;
        if let Some(zoom) = &mut self.zoom {
            zoom.index = match direction {
                Direction::Forward => (zoom.index + 1) % len,
                Direction::Back => (zoom.index + len - 1) % len,
            };
        }
    }

    /// Flip base playback; never touches the index
    pub fn toggle_autoplay(&mut self) {
        self.carousel.autoplay = !self.carousel.autoplay;
    }

    /// Flip zoom playback; no-op while the modal is closed
    pub fn toggle_zoom_autoplay(&mut self) {
        if let Some(zoom) = &mut self.zoom {
            zoom.autoplay = !zoom.autoplay;
        }
    }

    /// Hover only gates the base timer, not the zoom timer
    pub fn set_hovered(&mut self, hovered: bool) {
        self.carousel.hovered = hovered;
    }

    /// Open the modal, seeding it from the carousel's index and playback flag
    pub fn open_zoom(&mut self) {
        self.zoom = Some(ZoomState {
            index: self.carousel.current_index,
            autoplay: self.carousel.autoplay,
        });
    }

    /// Close the modal. The carousel inherits the zoom playback flag; its
    /// index is deliberately left where it was.
    pub fn close_zoom(&mut self) {
        if let Some(zoom) = self.zoom.take() {
            self.carousel.autoplay = zoom.autoplay;
        }
    }

    /// Whether the base interval should be running
    pub fn base_should_tick(&self) -> bool {
        self.len > 1 && self.carousel.autoplay && !self.carousel.hovered
    }

    /// Whether the zoom interval should be running
    pub fn zoom_should_tick(&self) -> bool {
        self.len > 1 && matches!(self.zoom, Some(zoom) if zoom.autoplay)
    }

    /// Timer-driven advancement of the base view. Does not touch an open
    /// zoom view; autoplay is independent per view.
    pub fn tick_base(&mut self) {
        if self.base_should_tick() {
            self.carousel.current_index = self.step(self.carousel.current_index, Direction::Forward);
        }
    }

    /// Timer-driven advancement of the zoom view
    pub fn tick_zoom(&mut self) {
        if self.zoom_should_tick() {
            if let Some(zoom) = &mut self.zoom {
                zoom.index = (zoom.index + 1) % self.len;
            }
        }
    }

    pub fn media_len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index
    }

    pub fn is_autoplaying(&self) -> bool {
        self.carousel.autoplay
    }

    pub fn is_hovered(&self) -> bool {
        self.carousel.hovered
    }

    pub fn is_zoom_open(&self) -> bool {
        self.zoom.is_some()
    }

    pub fn zoom_index(&self) -> Option<usize> {
        self.zoom.map(|zoom| zoom.index)
    }

    pub fn is_zoom_autoplaying(&self) -> Option<bool> {
        self.zoom.map(|zoom| zoom.autoplay)
    }
}

// ============================================================================
// Tests
// ============================================================================
