#![forbid(unsafe_code)]

//! Hero slider.
//!
//! Component-local index over a fixed slide list; navigation wraps. Each
//! slide may have a matching dot; when the dot list is shorter, trailing
//! slides simply have no dot. Rendering marks exactly the current slide
//! (and its dot, when present) active.

use karibu_core::dom::ElementId;
use karibu_core::view::ViewUpdate;

/// Slider state.
#[derive(Debug, Clone)]
pub struct HeroSlider {
    slides: Vec<ElementId>,
    dots: Vec<ElementId>,
    current: usize,
}

impl HeroSlider {
    /// Build from slide and dot ids. Returns `None` when there are no
    /// slides.
    #[must_use]
    pub fn new(slides: Vec<ElementId>, dots: Vec<ElementId>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            dots,
            current: 0,
        })
    }

    /// Index of the current slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty slide lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advance to the next slide, wrapping.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Step to the previous slide, wrapping.
    pub fn prev(&mut self) {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// The dot id for a slide index, when one exists.
    #[must_use]
    pub fn dot_index(&self, id: &ElementId) -> Option<usize> {
        self.dots.iter().position(|d| d == id)
    }

    /// Render active flags: exactly the current slide and its dot.
    pub fn render(&self, view: &mut dyn ViewUpdate) {
        for (index, slide) in self.slides.iter().enumerate() {
            view.set_active(slide, index == self.current);
        }
        for (index, dot) in self.dots.iter().enumerate() {
            view.set_active(dot, index == self.current);
        }
    }
}
