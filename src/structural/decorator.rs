//! Decorator: notifiers wrapped with extra delivery channels.

use tracing::trace;

/// Something that can deliver a message. Returns one line per delivery, in order.
pub trait Notifier {
    fn send(&self, message: &str) -> Vec<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Vec<String> {
        vec![format!("Sending email: {message}")]
    }
}

/// Base decorator: forwards to the wrapped notifier unchanged.
pub struct NotificationDecorator {
    wrappee: Box<dyn Notifier>,
}

impl NotificationDecorator {
    pub fn new(wrappee: Box<dyn Notifier>) -> Self {
        Self { wrappee }
    }
}

impl Notifier for NotificationDecorator {
    fn send(&self, message: &str) -> Vec<String> {
        self.wrappee.send(message)
    }
}

pub struct SlackDecorator {
    inner: NotificationDecorator,
}

impl SlackDecorator {
    pub fn new(wrappee: Box<dyn Notifier>) -> Self {
        Self {
            inner: NotificationDecorator::new(wrappee),
        }
    }
}

impl Notifier for SlackDecorator {
    fn send(&self, message: &str) -> Vec<String> {
        let mut sent = self.inner.send(message);
        trace!("adding slack delivery");
        sent.push(format!("Sending slack: {message}"));
        sent
    }
}

pub struct SmsDecorator {
    inner: NotificationDecorator,
}

impl SmsDecorator {
    pub fn new(wrappee: Box<dyn Notifier>) -> Self {
        Self {
            inner: NotificationDecorator::new(wrappee),
        }
    }
}

impl Notifier for SmsDecorator {
    fn send(&self, message: &str) -> Vec<String> {
        let mut sent = self.inner.send(message);
        trace!("adding SMS delivery");
        sent.push(format!("Sending SMS: {message}"));
        sent
    }
}

/// Extra channels that can be layered on top of email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Slack,
    Sms,
}

/// Wraps an email notifier with `layers`, innermost first.
pub fn stack(layers: &[Layer]) -> Box<dyn Notifier> {
    layers.iter().fold(
        Box::new(NotificationDecorator::new(Box::new(EmailNotifier))) as Box<dyn Notifier>,
        |notifier, layer| -> Box<dyn Notifier> {
            match layer {
                Layer::Slack => Box::new(SlackDecorator::new(notifier)),
                Layer::Sms => Box::new(SmsDecorator::new(notifier)),
            }
        },
    )
}
