#![forbid(unsafe_code)]

//! Homepage controller.
//!
//! Two independent features, each bound only when its hooks exist: the
//! newsletter signup (validate on submit, banner with timed dismissal)
//! and the hero slider (wrapping navigation via buttons, dots, and arrow
//! keys, plus a re-armed auto-advance task). Arrow keys navigate only
//! when no control has focus, so typing in an input never moves slides.

use std::time::Duration;

use tracing::{debug, info};

use karibu_core::dom::{Document, ElementId};
use karibu_core::event::{Event, KeyCode};
use karibu_core::view::ViewUpdate;
use karibu_runtime::{Cmd, Component};
use karibu_widgets::newsletter::{Newsletter, SignupOutcome};
use karibu_widgets::slider::HeroSlider;

const ADVANCE_TASK: &str = "home.slider";
const BANNER_TASK: &str = "home.banner";

/// Timing for the homepage features.
#[derive(Debug, Clone)]
pub struct HomeConfig {
    /// Auto-advance interval for the slider.
    pub slider_interval: Duration,
    /// Whether the slider advances on its own.
    pub auto_advance: bool,
    /// How long newsletter banners stay up.
    pub banner_dismiss: Duration,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            slider_interval: Duration::from_millis(5000),
            auto_advance: true,
            banner_dismiss: Duration::from_millis(5000),
        }
    }
}

/// Messages driving the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeMsg {
    /// A raw interaction event.
    Dom(Event),
    /// The auto-advance interval elapsed.
    Advance,
    /// The newsletter banner timed out.
    DismissBanner,
}

impl From<Event> for HomeMsg {
    fn from(event: Event) -> Self {
        Self::Dom(event)
    }
}

#[derive(Debug)]
struct NewsletterBinding {
    form: ElementId,
    input: ElementId,
    message: ElementId,
    state: Newsletter,
}

#[derive(Debug)]
struct SliderBinding {
    slider: HeroSlider,
    prev: Option<ElementId>,
    next: Option<ElementId>,
}

/// The homepage controller.
#[derive(Debug)]
pub struct HomePage {
    newsletter: Option<NewsletterBinding>,
    slider: Option<SliderBinding>,
    config: HomeConfig,
}

impl HomePage {
    /// Bind against a document. Returns `None` when neither feature's
    /// hooks exist.
    #[must_use]
    pub fn bind(doc: &Document, config: HomeConfig) -> Option<Self> {
        let newsletter = match (
            doc.element("newsletter-form"),
            doc.element("newsletter-email"),
            doc.element("newsletter-message"),
        ) {
            (Some(form), Some(input), Some(message)) => Some(NewsletterBinding {
                form,
                input,
                message,
                state: Newsletter::new(),
            }),
            _ => {
                debug!("home: newsletter hooks incomplete, signup disabled");
                None
            }
        };

        let slider = HeroSlider::new(doc.slides().to_vec(), doc.dots().to_vec()).map(|slider| {
            SliderBinding {
                slider,
                prev: doc.element("prevBtn"),
                next: doc.element("nextBtn"),
            }
        });
        if slider.is_none() {
            debug!("home: no slides, slider disabled");
        }

        if newsletter.is_none() && slider.is_none() {
            return None;
        }
        info!(
            newsletter = newsletter.is_some(),
            slider = slider.is_some(),
            "home: bound"
        );
        Some(Self {
            newsletter,
            slider,
            config,
        })
    }

    /// Index of the current slide, when the slider is bound.
    #[must_use]
    pub fn slide_index(&self) -> Option<usize> {
        self.slider.as_ref().map(|s| s.slider.current())
    }

    fn arm_advance(&self) -> Cmd<HomeMsg> {
        if self.slider.is_some() && self.config.auto_advance {
            Cmd::schedule(ADVANCE_TASK, self.config.slider_interval, HomeMsg::Advance)
        } else {
            Cmd::none()
        }
    }

    fn on_newsletter_submit(&mut self, view: &mut dyn ViewUpdate) -> Cmd<HomeMsg> {
        let Some(binding) = &mut self.newsletter else {
            return Cmd::none();
        };
        let outcome = binding.state.submit();
        view.set_text(&binding.message, outcome.banner());
        if outcome == SignupOutcome::Accepted {
            view.set_value(&binding.input, "");
        }
        Cmd::schedule(BANNER_TASK, self.config.banner_dismiss, HomeMsg::DismissBanner)
    }

    fn on_slider_click(&mut self, target: &ElementId, view: &mut dyn ViewUpdate) {
        let Some(binding) = &mut self.slider else {
            return;
        };
        if binding.prev.as_ref() == Some(target) {
            binding.slider.prev();
        } else if binding.next.as_ref() == Some(target) {
            binding.slider.next();
        } else if let Some(index) = binding.slider.dot_index(target) {
            binding.slider.go_to(index);
        } else {
            return;
        }
        binding.slider.render(view);
    }

    fn on_key(&mut self, code: KeyCode, view: &mut dyn ViewUpdate) {
        let Some(binding) = &mut self.slider else {
            return;
        };
        match code {
            KeyCode::Left => binding.slider.prev(),
            KeyCode::Right => binding.slider.next(),
            _ => return,
        }
        binding.slider.render(view);
    }
}

impl Component for HomePage {
    type Message = HomeMsg;

    fn init(&mut self, view: &mut dyn ViewUpdate) -> Cmd<HomeMsg> {
        if let Some(binding) = &self.slider {
            binding.slider.render(view);
        }
        self.arm_advance()
    }

    fn update(&mut self, msg: HomeMsg, view: &mut dyn ViewUpdate) -> Cmd<HomeMsg> {
        match msg {
            HomeMsg::Dom(Event::Input { target, value }) => {
                if let Some(binding) = &mut self.newsletter
                    && binding.input == target
                {
                    binding.state.set_value(value);
                }
                Cmd::none()
            }
            HomeMsg::Dom(Event::Submit { target }) => {
                if self.newsletter.as_ref().is_some_and(|b| b.form == target) {
                    self.on_newsletter_submit(view)
                } else {
                    Cmd::none()
                }
            }
            HomeMsg::Dom(Event::Click { target }) => {
                self.on_slider_click(&target, view);
                Cmd::none()
            }
            HomeMsg::Dom(Event::Key(key)) if key.target.is_none() => {
                self.on_key(key.code, view);
                Cmd::none()
            }
            HomeMsg::Advance => {
                if let Some(binding) = &mut self.slider {
                    binding.slider.next();
                    binding.slider.render(view);
                }
                self.arm_advance()
            }
            HomeMsg::DismissBanner => {
                if let Some(binding) = &self.newsletter {
                    view.set_text(&binding.message, "");
                }
                Cmd::none()
            }
            HomeMsg::Dom(_) => Cmd::none(),
        }
    }
}
