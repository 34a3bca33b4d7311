//! Slideshow sequencing model and public feed payload.
//!
//! The rotation rules live here so both slideshow variants (full-bleed home
//! background and compact page header) share one behavior: a repeating timer
//! advances the index modulo the slide count; manual navigation sets the
//! index directly and does not reset the tick; a single slide renders no
//! navigation and the timer has nothing to advance to.

use crate::entities::background_image::Model as BackgroundImageModel;
use serde::Serialize;

/// One active background image as served to the public site.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlideInfo {
    pub id: i32,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Click-through target; a slide without one is inert.
    pub link_url: Option<String>,
}

impl From<BackgroundImageModel> for SlideInfo {
    fn from(model: BackgroundImageModel) -> Self {
        SlideInfo {
            id: model.id,
            image_url: model.image_url,
            title: model.title,
            description: model.description,
            link_url: model.link_url,
        }
    }
}

/// Payload of the public slideshow feed. An empty slide list means the
/// client should fall back to the static background; a fetch failure on the
/// server degrades to the same shape rather than an error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowFeed {
    pub slides: Vec<SlideInfo>,
    /// Full-bleed rotation interval, milliseconds.
    pub interval_ms: u64,
    /// Compact variant rotation interval, milliseconds.
    pub compact_interval_ms: u64,
    pub fallback_image_url: String,
}

/// In-memory rotation state for a mounted slideshow.
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<SlideInfo>,
    current: usize,
}

impl Slideshow {
    pub fn new(slides: Vec<SlideInfo>) -> Self {
        Slideshow { slides, current: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&SlideInfo> {
        self.slides.get(self.current)
    }

    /// Arrows and indicator dots only make sense with something to move to.
    #[inline]
    pub fn has_navigation(&self) -> bool {
        self.slides.len() > 1
    }

    /// Timer tick: advance to the next slide, wrapping at the end.
    /// With fewer than two slides the tick is inert.
    pub fn advance(&mut self) -> usize {
        if self.slides.len() > 1 {
            self.current = (self.current + 1) % self.slides.len();
        }
        self.current
    }

    /// Manual navigation: jump straight to `index`. Out-of-range input is
    /// ignored. The automatic tick is neither reset nor debounced.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.slides.len() {
            self.current = index;
        }
        self.current
    }

    /// Click-through target of the visible slide, if any.
    pub fn current_link(&self) -> Option<&str> {
        self.current().and_then(|slide| slide.link_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: i32, link: Option<&str>) -> SlideInfo {
        SlideInfo {
            id,
            image_url: format!("/uploads/bg/{id}.jpg"),
            title: None,
            description: None,
            link_url: link.map(str::to_string),
        }
    }

    #[test]
    fn advance_wraps_modulo_count() {
        let mut show = Slideshow::new(vec![slide(1, None), slide(2, None), slide(3, None)]);
        assert_eq!(show.advance(), 1);
        assert_eq!(show.advance(), 2);
        assert_eq!(show.advance(), 0);
    }

    #[test]
    fn single_slide_has_no_navigation_and_an_inert_timer() {
        let mut show = Slideshow::new(vec![slide(1, None)]);
        assert!(!show.has_navigation());
        assert_eq!(show.advance(), 0);
        assert_eq!(show.advance(), 0);
        assert_eq!(show.current().unwrap().id, 1);
    }

    #[test]
    fn empty_slideshow_shows_nothing() {
        let mut show = Slideshow::new(vec![]);
        assert!(show.is_empty());
        assert!(show.current().is_none());
        assert_eq!(show.advance(), 0);
    }

    #[test]
    fn select_jumps_without_disturbing_subsequent_ticks() {
        let mut show = Slideshow::new(vec![slide(1, None), slide(2, None), slide(3, None)]);
        assert_eq!(show.select(2), 2);
        // The next tick continues from the selected slide.
        assert_eq!(show.advance(), 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut show = Slideshow::new(vec![slide(1, None), slide(2, None)]);
        assert_eq!(show.select(5), 0);
    }

    #[test]
    fn only_linked_slides_are_click_through() {
        let mut show = Slideshow::new(vec![slide(1, None), slide(2, Some("https://example.com"))]);
        assert_eq!(show.current_link(), None);
        show.advance();
        assert_eq!(show.current_link(), Some("https://example.com"));
    }
}
