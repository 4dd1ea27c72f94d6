use std::io::{self, Write};
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{PatternError, Result};

/// Something a [`NewsChannel`] can notify.
///
/// Membership is decided by `id()`: two subscribers with the same id are the
/// same subscriber as far as a channel is concerned.
pub trait Subscriber {
    fn id(&self) -> &str;
    fn update(&self, message: &str, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscriber for Employee {
    fn id(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "NEWS FOR {}: {}", self.name, message)
    }
}

/// Pushes each message to whoever is subscribed right now. Nothing is kept.
///
/// Subscribers are notified in the order they subscribed.
#[derive(Default)]
pub struct NewsChannel {
    subscribers: IndexMap<String, Rc<dyn Subscriber>>,
}

impl NewsChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a subscriber with the same id was already registered.
    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) -> bool {
        let id = subscriber.id().to_string();
        if self.subscribers.contains_key(&id) {
            debug!(%id, "already subscribed");
            return false;
        }
        debug!(%id, "subscribed");
        self.subscribers.insert(id, subscriber);
        true
    }

    /// Fails with [`PatternError::NotSubscribed`] if `subscriber` never subscribed.
    pub fn unsubscribe(&mut self, subscriber: &dyn Subscriber) -> Result<()> {
        let id = subscriber.id();
        self.subscribers
            .shift_remove(id)
            .ok_or_else(|| PatternError::NotSubscribed(id.to_string()))?;
        debug!(id, "unsubscribed");
        Ok(())
    }

    pub fn is_subscribed(&self, subscriber: &dyn Subscriber) -> bool {
        self.subscribers.contains_key(subscriber.id())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish_message(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        for (id, subscriber) in &self.subscribers {
            trace!(%id, "delivering");
            subscriber.update(message, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Records what it receives instead of printing.
    struct Inbox {
        name: String,
        received: RefCell<Vec<String>>,
    }

    impl Inbox {
        fn new(name: &str) -> Rc<Self> {
            Rc::new(Self {
                name: name.to_string(),
                received: RefCell::new(Vec::new()),
            })
        }

        fn received(&self) -> Vec<String> {
            self.received.borrow().clone()
        }
    }

    impl Subscriber for Inbox {
        fn id(&self) -> &str {
            &self.name
        }

        fn update(&self, message: &str, _out: &mut dyn Write) -> io::Result<()> {
            self.received.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    fn publish(channel: &NewsChannel, message: &str) -> String {
        let mut out = Vec::new();
        channel.publish_message(message, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_subscribe_twice_delivers_once() {
        let mut channel = NewsChannel::new();
        let billy = Inbox::new("BILLY");

        assert!(channel.subscribe(billy.clone()));
        assert!(!channel.subscribe(billy.clone()));
        assert_eq!(channel.subscriber_count(), 1);

        publish(&channel, "hello");
        assert_eq!(billy.received(), vec!["hello"]);
    }

    #[test]
    fn test_membership_is_by_id() {
        let mut channel = NewsChannel::new();
        channel.subscribe(Rc::new(Employee::new("BILLY")));
        channel.subscribe(Rc::new(Employee::new("BILLY")));
        assert_eq!(channel.subscriber_count(), 1);

        // a different instance with the same name can unsubscribe
        channel.unsubscribe(&Employee::new("BILLY")).unwrap();
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_publish_reaches_current_subscribers_only() {
        let mut channel = NewsChannel::new();
        let billy = Inbox::new("BILLY");
        let mandy = Inbox::new("MANDY");
        let grim = Inbox::new("GRIM");

        channel.subscribe(billy.clone());
        channel.subscribe(mandy.clone());
        channel.subscribe(grim.clone());
        channel.unsubscribe(&*mandy).unwrap();

        publish(&channel, "Run out of toilet paper!");

        assert_eq!(billy.received(), vec!["Run out of toilet paper!"]);
        assert_eq!(grim.received(), vec!["Run out of toilet paper!"]);
        assert!(mandy.received().is_empty());
    }

    #[test]
    fn test_unsubscribe_non_member_fails() {
        let mut channel = NewsChannel::new();
        let grim = Employee::new("GRIM");

        let err = channel.unsubscribe(&grim).unwrap_err();
        assert!(matches!(err, PatternError::NotSubscribed(ref id) if id == "GRIM"));

        channel.subscribe(Rc::new(grim.clone()));
        channel.unsubscribe(&grim).unwrap();
        assert!(channel.unsubscribe(&grim).is_err());
    }

    #[test]
    fn test_channels_have_disjoint_subscribers() {
        let mut office_news = NewsChannel::new();
        let mut funny_news = NewsChannel::new();
        let billy: Rc<dyn Subscriber> = Rc::new(Employee::new("BILLY"));
        let mandy: Rc<dyn Subscriber> = Rc::new(Employee::new("MANDY"));

        office_news.subscribe(billy.clone());
        office_news.subscribe(mandy.clone());
        funny_news.subscribe(billy.clone());

        let text = publish(&funny_news, "Why do ghosts ride the elevator? To lift their spirits.");
        assert_eq!(
            text,
            "NEWS FOR BILLY: Why do ghosts ride the elevator? To lift their spirits.\n"
        );
        assert!(!funny_news.is_subscribed(&*mandy));
        assert!(office_news.is_subscribed(&*mandy));
    }

    #[test]
    fn test_delivery_follows_subscription_order() {
        let mut channel = NewsChannel::new();
        for name in ["BILLY", "MANDY", "GRIM"] {
            channel.subscribe(Rc::new(Employee::new(name)));
        }

        assert_eq!(
            publish(&channel, "hi"),
            "NEWS FOR BILLY: hi\nNEWS FOR MANDY: hi\nNEWS FOR GRIM: hi\n"
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Subscribe(usize),
        Unsubscribe(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize).prop_map(Op::Subscribe),
            (0..4usize).prop_map(Op::Unsubscribe),
        ]
    }

    proptest! {
        #[test]
        fn test_registry_behaves_like_a_set(ops in prop::collection::vec(op(), 0..40)) {
            let inboxes: Vec<Rc<Inbox>> = ["A", "B", "C", "D"].iter().map(|n| Inbox::new(n)).collect();
            let mut channel = NewsChannel::new();
            let mut model = HashSet::new();

            for op in ops {
                match op {
                    Op::Subscribe(i) => {
                        let added = channel.subscribe(inboxes[i].clone());
                        prop_assert_eq!(added, model.insert(i));
                    }
                    Op::Unsubscribe(i) => {
                        let removed = channel.unsubscribe(&*inboxes[i]).is_ok();
                        prop_assert_eq!(removed, model.remove(&i));
                    }
                }
            }
            prop_assert_eq!(channel.subscriber_count(), model.len());

            publish(&channel, "ping");
            for (i, inbox) in inboxes.iter().enumerate() {
                let expected = usize::from(model.contains(&i));
                prop_assert_eq!(inbox.received().len(), expected);
            }
        }
    }
}
