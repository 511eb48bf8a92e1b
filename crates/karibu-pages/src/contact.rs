#![forbid(unsafe_code)]

//! Contact page controller.
//!
//! Wires the contact form to blur validation, live progress and character
//! count, Tab focus cycling, and the simulated submission machine:
//!
//! ```text
//! Idle -> Validating -> Submitting -> Idle (success)
//!                   \-> Idle (failure banner shown)
//! ```
//!
//! Validation failure returns to `Idle` with an aggregate banner and
//! per-field errors; nothing is partially submitted. A valid submit
//! disables and re-labels the submit control, completes after a fixed
//! delay, then clears the form and shows a success banner that dismisses
//! itself after a further delay. A submit while `Submitting` is ignored.

use std::time::Duration;

use tracing::{debug, info};

use karibu_core::dom::{Document, ElementId};
use karibu_core::event::{Event, KeyCode};
use karibu_core::view::{ErrorSignal, ViewUpdate};
use karibu_runtime::{Cmd, Component};
use karibu_widgets::char_count::{CountLevel, count, count_level, count_text};
use karibu_widgets::form::FormState;

/// Banner text after a successful simulated submission.
pub const SUBMIT_SUCCESS: &str =
    "Thank you for your message! Our travel experts will get back to you within 24 hours.";

/// Banner text when validation fails on submit.
pub const SUBMIT_FAILURE: &str = "Please correct the errors below and try again.";

const SUBMIT_TASK: &str = "contact.submit";
const BANNER_TASK: &str = "contact.banner";

/// Timing and labels for the submission machine.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Simulated round-trip before completion.
    pub submit_delay: Duration,
    /// How long the success banner stays up.
    pub banner_dismiss: Duration,
    /// Submit control label while idle.
    pub idle_label: String,
    /// Submit control label while submitting.
    pub busy_label: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(2000),
            banner_dismiss: Duration::from_millis(5000),
            idle_label: "Send Message".to_string(),
            busy_label: "Sending...".to_string(),
        }
    }
}

/// Messages driving the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMsg {
    /// A raw interaction event.
    Dom(Event),
    /// The simulated submission completed.
    SubmitDone,
    /// The success banner timed out.
    DismissBanner,
}

impl From<Event> for ContactMsg {
    fn from(event: Event) -> Self {
        Self::Dom(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
}

/// The contact page controller.
#[derive(Debug)]
pub struct ContactPage {
    form_id: ElementId,
    banner: Option<ElementId>,
    submit: Option<ElementId>,
    progress: Option<ElementId>,
    char_count: Option<ElementId>,
    message_field: Option<ElementId>,
    form: FormState,
    phase: Phase,
    config: SubmitConfig,
}

impl ContactPage {
    /// Bind against a document. Returns `None` when the contact form is
    /// absent; optional hooks (banner, submit control, progress, character
    /// count) degrade individually.
    #[must_use]
    pub fn bind(doc: &Document, config: SubmitConfig) -> Option<Self> {
        let form_id = doc.element("contactForm")?;
        let nodes = doc.form_fields(&form_id)?;
        let form = FormState::from_nodes(nodes);

        let banner = doc.element("formMessage");
        let submit = doc.element("submitBtn");
        let progress = doc.element("formProgress");
        let char_count = doc.element("charCount");
        for (hook, present) in [
            ("formMessage", banner.is_some()),
            ("submitBtn", submit.is_some()),
            ("formProgress", progress.is_some()),
            ("charCount", char_count.is_some()),
        ] {
            if !present {
                debug!(hook, "contact: optional hook missing, feature disabled");
            }
        }

        let message_field = form.field("message").map(|f| f.id.clone());
        info!(fields = form.fields().len(), "contact: form bound");
        Some(Self {
            form_id,
            banner,
            submit,
            progress,
            char_count,
            message_field,
            form,
            phase: Phase::Idle,
            config,
        })
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The form state.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    fn render_progress(&self, view: &mut dyn ViewUpdate) {
        if let Some(progress) = &self.progress {
            let percent = (self.form.progress() * 100.0).round();
            view.set_text(progress, &format!("{percent:.0}%"));
        }
    }

    fn render_char_count(&self, value: &str, view: &mut dyn ViewUpdate) {
        if let Some(counter) = &self.char_count {
            view.set_text(counter, &count_text(value));
            let signal = match count_level(count(value)) {
                CountLevel::Alert => ErrorSignal::Invalid,
                CountLevel::Warn | CountLevel::Normal => ErrorSignal::Clear,
            };
            view.set_error_signal(counter, signal);
        }
    }

    fn on_input(&mut self, target: &ElementId, value: String, view: &mut dyn ViewUpdate) {
        if self.form.field_by_id(target).is_none() {
            return;
        }
        let non_blank = !value.trim().is_empty();
        if self.message_field.as_ref() == Some(target) {
            self.render_char_count(&value, view);
        }
        self.form.set_value(target, value);
        if non_blank {
            // Editing clears the invalid signal; re-validation waits for
            // the next blur or submit.
            if let Some(field) = self.form.field_by_id_mut(target) {
                field.clear_error();
            }
            view.set_error_signal(target, ErrorSignal::Clear);
        }
        self.render_progress(view);
    }

    fn on_blur(&mut self, target: &ElementId, view: &mut dyn ViewUpdate) {
        if let Some(field) = self.form.field_by_id_mut(target) {
            field.validate();
            self.form.render_field(target, view);
        }
    }

    fn on_submit(&mut self, view: &mut dyn ViewUpdate) -> Cmd<ContactMsg> {
        if self.phase == Phase::Submitting {
            return Cmd::none();
        }
        let valid = self.form.validate_all();
        self.form.render_all(view);
        if !valid {
            if let Some(banner) = &self.banner {
                view.set_text(banner, SUBMIT_FAILURE);
            }
            return Cmd::none();
        }
        self.phase = Phase::Submitting;
        if let Some(submit) = &self.submit {
            view.set_enabled(submit, false);
            view.set_text(submit, &self.config.busy_label);
        }
        Cmd::schedule(SUBMIT_TASK, self.config.submit_delay, ContactMsg::SubmitDone)
    }

    fn on_submit_done(&mut self, view: &mut dyn ViewUpdate) -> Cmd<ContactMsg> {
        self.phase = Phase::Idle;
        self.form.reset(view);
        if let Some(submit) = &self.submit {
            view.set_enabled(submit, true);
            view.set_text(submit, &self.config.idle_label);
        }
        self.render_progress(view);
        if let Some(counter) = &self.char_count {
            view.set_text(counter, &count_text(""));
            view.set_error_signal(counter, ErrorSignal::Clear);
        }
        match &self.banner {
            Some(banner) => {
                view.set_text(banner, SUBMIT_SUCCESS);
                Cmd::schedule(
                    BANNER_TASK,
                    self.config.banner_dismiss,
                    ContactMsg::DismissBanner,
                )
            }
            None => Cmd::none(),
        }
    }

    fn on_tab(&mut self, from: &ElementId, backwards: bool, view: &mut dyn ViewUpdate) {
        let Some(index) = self.form.position(from) else {
            return;
        };
        let fields = self.form.fields();
        let next = if backwards {
            index.saturating_sub(1)
        } else {
            (index + 1).min(fields.len().saturating_sub(1))
        };
        if next != index {
            view.focus(&fields[next].id);
        }
    }
}

impl Component for ContactPage {
    type Message = ContactMsg;

    fn update(&mut self, msg: ContactMsg, view: &mut dyn ViewUpdate) -> Cmd<ContactMsg> {
        match msg {
            ContactMsg::Dom(Event::Input { target, value }) => {
                self.on_input(&target, value, view);
                Cmd::none()
            }
            ContactMsg::Dom(Event::Blur { target }) => {
                self.on_blur(&target, view);
                Cmd::none()
            }
            ContactMsg::Dom(Event::Submit { target }) if target == self.form_id => {
                self.on_submit(view)
            }
            ContactMsg::Dom(Event::Key(key)) if key.code == KeyCode::Tab => {
                if let Some(target) = key.target.clone() {
                    self.on_tab(&target, key.shift(), view);
                }
                Cmd::none()
            }
            ContactMsg::SubmitDone => self.on_submit_done(view),
            ContactMsg::DismissBanner => {
                if let Some(banner) = &self.banner {
                    view.set_text(banner, "");
                }
                Cmd::none()
            }
            ContactMsg::Dom(_) => Cmd::none(),
        }
    }
}
