//! Factory method: the channel decides which notification gets created.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::DomainError;

pub trait Notification {
    /// Delivers the notification, returning a description of what was sent.
    fn send(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotification {
    recipient: String,
    message: String,
}

impl EmailNotification {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

impl Notification for EmailNotification {
    fn send(&self) -> String {
        format!("Sending an email to {}: {}", self.recipient, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsNotification {
    phone_number: String,
    message: String,
}

impl SmsNotification {
    pub fn new(phone_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            message: message.into(),
        }
    }
}

impl Notification for SmsNotification {
    fn send(&self) -> String {
        format!("Sending an SMS to {}: {}", self.phone_number, self.message)
    }
}

pub trait NotificationFactory {
    fn create_notification(&self, recipient: &str, message: &str) -> Box<dyn Notification>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotificationFactory;

impl NotificationFactory for EmailNotificationFactory {
    fn create_notification(&self, recipient: &str, message: &str) -> Box<dyn Notification> {
        Box::new(EmailNotification::new(recipient, message))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotificationFactory;

impl NotificationFactory for SmsNotificationFactory {
    fn create_notification(&self, phone_number: &str, message: &str) -> Box<dyn Notification> {
        Box::new(SmsNotification::new(phone_number, message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    pub fn factory(self) -> Box<dyn NotificationFactory> {
        match self {
            Channel::Email => Box::new(EmailNotificationFactory),
            Channel::Sms => Box::new(SmsNotificationFactory),
        }
    }
}

impl FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            other => Err(DomainError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

/// Resolve the factory for a channel name (`email` or `sms`).
pub fn factory_for(channel: &str) -> Result<Box<dyn NotificationFactory>, DomainError> {
    let channel: Channel = channel.parse()?;
    debug!("factory for channel {}", channel);
    Ok(channel.factory())
}
