//! The fixed notification shown in response to worker messages.

use web_sys::{NotificationOptions, ServiceWorkerRegistration};

/// Title of the ping notification.
pub const PING_TITLE: &str = "Hello World";
/// Body of the ping notification.
pub const PING_BODY: &str = "This is your minute notification!";

/// A title/body pair for one display request.
///
/// Built fresh for every message event and dropped once the request is
/// handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
}

impl NotificationPayload {
    /// The minute ping. Message content never feeds into this; every message
    /// produces the same payload.
    pub fn minute_ping() -> Self {
        Self {
            title: PING_TITLE.to_string(),
            body: PING_BODY.to_string(),
        }
    }

    /// Host-side options structure for the display call.
    pub fn options(&self) -> NotificationOptions {
        let options = NotificationOptions::new();
        options.set_body(&self.body);
        options
    }

    /// Ask the registration to display this payload.
    ///
    /// The returned promise is dropped: display failures (permission denied,
    /// notifications unsupported) are not observed.
    pub fn show(&self, registration: &ServiceWorkerRegistration) {
        let _ = registration.show_notification_with_options(&self.title, &self.options());
    }
}
