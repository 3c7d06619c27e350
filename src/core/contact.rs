//! Contact form submission.
//!
//! A `ContactForm` is shared by every visitor of the site. It owns the relay
//! and the in-flight flag: at most one submission runs at a time, and a
//! submit that arrives while another is in flight is refused without
//! touching the relay. Field values travel with each request and come back
//! in the returned [`ContactFormView`].

use crate::domain::model::{ContactMessage, Notification, RelayPayload, SiteInfo};
use crate::domain::ports::ContactRelay;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_required_input;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormView {
    pub values: ContactMessage,
    pub is_submitting: bool,
    pub notification: Option<Notification>,
}

impl ContactFormView {
    /// Fields kept, no notification.
    pub fn with_values(values: ContactMessage) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn notified(values: ContactMessage, notification: Notification) -> Self {
        Self {
            values,
            is_submitting: false,
            notification: Some(notification),
        }
    }
}

/// Path the notification's close control posts to. It re-renders the
/// form with the posted values and no notification.
pub fn dismiss_action(contact_path: &str) -> String {
    format!("{}/dismiss", contact_path.trim_end_matches('/'))
}

pub struct ContactForm {
    in_flight: AtomicBool,
    relay: Arc<dyn ContactRelay>,
    site: SiteInfo,
}

/// Holds the in-flight flag and clears it however the submission ends,
/// including when the submitting future is dropped.
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self { flag })
            .map_err(|_| SiteError::SubmissionInFlight)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl ContactForm {
    pub fn new(relay: Arc<dyn ContactRelay>, site: SiteInfo) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            relay,
            site,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Empty form; the submit control is disabled while a submission is
    /// in flight.
    pub fn view(&self) -> ContactFormView {
        ContactFormView {
            is_submitting: self.is_submitting(),
            ..ContactFormView::default()
        }
    }

    /// Sends `values` through the relay exactly once.
    ///
    /// Relay failures are not errors here: they come back as a view with
    /// the failure notification and the fields kept. Errors are reserved
    /// for submissions that never reached the relay (blank field, another
    /// submission in flight).
    pub async fn submit(&self, values: ContactMessage) -> Result<ContactFormView> {
        validate_required_input("name", &values.name)?;
        validate_required_input("email", &values.email)?;
        validate_required_input("message", &values.message)?;

        let in_flight = InFlight::acquire(&self.in_flight).inspect_err(|_| {
            tracing::debug!("Rejecting contact submission while another is in flight");
        })?;

        let payload = RelayPayload::new(&values, &self.site);
        let view = match self.relay.send(&payload).await {
            Ok(()) => {
                tracing::info!("Contact message relayed");
                ContactFormView::notified(ContactMessage::default(), Notification::sent())
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                ContactFormView::notified(values, Notification::failed())
            }
        };
        drop(in_flight);

        Ok(view)
    }
}
