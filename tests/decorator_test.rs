//! Tests for the decorated notifier chain

use patterns::structural::{
    stack, EmailNotifier, Layer, NotificationDecorator, Notifier, SlackDecorator, SmsDecorator,
};

#[test]
fn given_plain_email_when_sending_then_single_delivery() {
    assert_eq!(EmailNotifier.send("hi"), vec!["Sending email: hi"]);
}

#[test]
fn given_base_decorator_when_sending_then_delegates_unchanged() {
    let notifier = NotificationDecorator::new(Box::new(EmailNotifier));
    assert_eq!(notifier.send("hi"), EmailNotifier.send("hi"));
}

#[test]
fn given_email_slack_sms_chain_when_sending_then_inner_first() {
    let notifier = SmsDecorator::new(Box::new(SlackDecorator::new(Box::new(
        NotificationDecorator::new(Box::new(EmailNotifier)),
    ))));

    assert_eq!(
        notifier.send("Hello World"),
        vec![
            "Sending email: Hello World",
            "Sending slack: Hello World",
            "Sending SMS: Hello World",
        ]
    );
}

#[test]
fn given_layers_when_stacking_then_order_follows_layers() {
    let sent = stack(&[Layer::Sms, Layer::Slack]).send("x");
    assert_eq!(
        sent,
        vec!["Sending email: x", "Sending SMS: x", "Sending slack: x"]
    );
    assert_eq!(stack(&[]).send("x"), vec!["Sending email: x"]);
}
