//! Structural patterns: composite and decorator

pub mod decorator;

pub use crate::domain::{CompositeTree, Node, NodeId};
pub use decorator::{stack, EmailNotifier, Layer, NotificationDecorator, Notifier, SlackDecorator, SmsDecorator};
