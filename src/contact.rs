//! Contact form state and the single-flight submission lifecycle.
//!
//! A [`ContactForm`] owns the three input values and the current
//! [`SubmissionPhase`]. [`submit`] drives one attempt through a [`Relay`]:
//!
//! ```text
//! Idle --submit--> Sending --success--> Succeeded --submit--> Sending
//! Idle --submit--> Sending --failure--> Failed    --submit--> Sending
//! ```

use std::{cell::RefCell, future::Future};

use thiserror::Error;

use crate::relay::RelayError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Message => &self.fields.message,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The submit button is disabled exactly while this is true.
    pub fn is_sending(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    /// Editing after a successful send dismisses the acknowledgment. A failure
    /// notice stays until the next attempt.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        if self.phase == SubmissionPhase::Succeeded {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Snapshots the inputs and enters `Sending`.
    pub fn begin(&mut self) -> Result<ContactFields, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        self.phase = SubmissionPhase::Sending;
        Ok(self.fields.clone())
    }

    /// Settles an in-flight attempt. Outside of `Sending` this is a no-op.
    pub fn finish(&mut self, result: Result<(), RelayError>) -> SubmissionPhase {
        if !self.is_sending() {
            log::debug!("ignoring relay result while {:?}", self.phase);
            return self.phase;
        }
        self.phase = match result {
            Ok(()) => {
                log::info!("contact message delivered");
                self.fields.clear();
                SubmissionPhase::Succeeded
            }
            Err(e) => {
                log::warn!("contact message not delivered: {e}");
                SubmissionPhase::Failed
            }
        };
        self.phase
    }
}

/// Something that can deliver a contact submission.
pub trait Relay {
    fn send(&self, fields: &ContactFields) -> impl Future<Output = Result<(), RelayError>>;
}

/// Shared, interior-mutable home of a [`ContactForm`].
///
/// Returns `None` when the store can no longer be reached (e.g. a disposed
/// reactive signal).
pub trait FormStore {
    fn modify<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T>;
}

impl FormStore for RefCell<ContactForm> {
    fn modify<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs one submission attempt end to end.
///
/// The store is not borrowed across the relay call, so the UI keeps reading
/// `Sending` while the request is in flight. Returns the settled phase, or
/// `None` if the attempt was refused.
pub async fn submit<S: FormStore, R: Relay>(store: &S, relay: &R) -> Option<SubmissionPhase> {
    let fields = match store.modify(ContactForm::begin)? {
        Ok(fields) => fields,
        Err(e) => {
            log::debug!("submit refused: {e}");
            return None;
        }
    };
    let result = relay.send(&fields).await;
    store.modify(|form| form.finish(result))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use http::StatusCode;

    use super::*;

    fn filled_form() -> RefCell<ContactForm> {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada Lovelace".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Loved the FraudGuardian demo".to_string());
        RefCell::new(form)
    }

    fn transport_error() -> RelayError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative url should not build");
        RelayError::Transport(err)
    }

    #[derive(Clone, Copy)]
    enum Reply {
        Delivered,
        Rejected,
        Unreachable,
    }

    // Records what the form looked like while the request was in flight.
    struct ProbeRelay<'a> {
        form: &'a RefCell<ContactForm>,
        reply: Reply,
        calls: Cell<usize>,
        phase_during_send: Cell<Option<SubmissionPhase>>,
        reentry: RefCell<Option<Result<ContactFields, SubmitError>>>,
    }

    impl<'a> ProbeRelay<'a> {
        fn new(form: &'a RefCell<ContactForm>, reply: Reply) -> Self {
            Self {
                form,
                reply,
                calls: Cell::new(0),
                phase_during_send: Cell::new(None),
                reentry: RefCell::new(None),
            }
        }
    }

    impl Relay for ProbeRelay<'_> {
        async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.phase_during_send.set(Some(self.form.borrow().phase()));
            *self.reentry.borrow_mut() = Some(self.form.borrow_mut().begin());
            assert!(!fields.name.is_empty());
            match self.reply {
                Reply::Delivered => Ok(()),
                Reply::Rejected => Err(RelayError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    message: "Invalid access key".to_string(),
                }),
                Reply::Unreachable => Err(transport_error()),
            }
        }
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(!form.is_sending());
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn test_success_clears_fields() {
        let form = filled_form();
        let relay = ProbeRelay::new(&form, Reply::Delivered);

        let phase = block_on(submit(&form, &relay));

        assert_eq!(phase, Some(SubmissionPhase::Succeeded));
        assert_eq!(form.borrow().phase(), SubmissionPhase::Succeeded);
        assert_eq!(form.borrow().fields(), &ContactFields::default());
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn test_rejection_keeps_fields() {
        let form = filled_form();
        let before = form.borrow().fields().clone();
        let relay = ProbeRelay::new(&form, Reply::Rejected);

        let phase = block_on(submit(&form, &relay));

        assert_eq!(phase, Some(SubmissionPhase::Failed));
        assert_eq!(form.borrow().fields(), &before);
        assert!(!form.borrow().is_sending());
    }

    #[test]
    fn test_transport_failure_matches_rejection() {
        let rejected = filled_form();
        let unreachable = filled_form();

        block_on(submit(&rejected, &ProbeRelay::new(&rejected, Reply::Rejected)));
        block_on(submit(
            &unreachable,
            &ProbeRelay::new(&unreachable, Reply::Unreachable),
        ));

        assert_eq!(unreachable.borrow().phase(), SubmissionPhase::Failed);
        assert_eq!(*rejected.borrow(), *unreachable.borrow());
    }

    #[test]
    fn test_sending_for_duration_of_call() {
        for reply in [Reply::Delivered, Reply::Rejected, Reply::Unreachable] {
            let form = filled_form();
            let relay = ProbeRelay::new(&form, reply);

            block_on(submit(&form, &relay));

            assert_eq!(relay.phase_during_send.get(), Some(SubmissionPhase::Sending));
            assert_eq!(
                *relay.reentry.borrow(),
                Some(Err(SubmitError::AlreadySending))
            );
            assert_ne!(form.borrow().phase(), SubmissionPhase::Sending);
            assert_eq!(relay.calls.get(), 1);
        }
    }

    #[test]
    fn test_submit_refused_while_sending() {
        let form = filled_form();
        form.borrow_mut().begin().expect("first begin should succeed");
        let relay = ProbeRelay::new(&form, Reply::Delivered);

        assert_eq!(block_on(submit(&form, &relay)), None);
        assert_eq!(relay.calls.get(), 0);
        assert!(form.borrow().is_sending());
    }

    #[test]
    fn test_resubmit_from_terminal_states() {
        let form = filled_form();
        block_on(submit(&form, &ProbeRelay::new(&form, Reply::Rejected)));
        assert_eq!(form.borrow().phase(), SubmissionPhase::Failed);

        // retry straight from Failed with the retained fields
        block_on(submit(&form, &ProbeRelay::new(&form, Reply::Delivered)));
        assert_eq!(form.borrow().phase(), SubmissionPhase::Succeeded);

        let relay = ProbeRelay::new(&form, Reply::Delivered);
        form.borrow_mut().set_field(Field::Name, "Grace".to_string());
        block_on(submit(&form, &relay));
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn test_disabled_iff_sending() {
        let mut form = ContactForm::new();
        assert!(!form.is_sending());
        form.begin().expect("idle form should begin");
        assert!(form.is_sending());
        form.finish(Ok(()));
        assert!(!form.is_sending());
        form.begin().expect("succeeded form should begin");
        assert!(form.is_sending());
        form.finish(Err(transport_error()));
        assert!(!form.is_sending());
    }

    #[test]
    fn test_finish_outside_sending_is_ignored() {
        let mut form = ContactForm::new();
        form.set_field(Field::Message, "hi".to_string());
        assert_eq!(form.finish(Ok(())), SubmissionPhase::Idle);
        assert_eq!(form.field(Field::Message), "hi");
    }

    #[test]
    fn test_editing_after_success_returns_to_idle() {
        let mut form = ContactForm::new();
        form.begin().expect("idle form should begin");
        form.finish(Ok(()));
        form.set_field(Field::Email, "a@b.co".to_string());
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        form.begin().expect("idle form should begin");
        form.finish(Err(transport_error()));
        form.set_field(Field::Email, "c@d.co".to_string());
        assert_eq!(form.phase(), SubmissionPhase::Failed);
    }
}
