// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;

use crate::client::ClientInner;
use crate::client_event::ListenerId;
use crate::{ClientDelegate, ClientEvent};

type Listener = Arc<dyn Fn(&ClientEvent) + Send + Sync>;

/// Fans client events out to the optional delegate and to the registered
/// listeners, in registration order.
pub struct ClientEventDispatcher {
    client: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener_id: AtomicU64,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client: Default::default(),
            delegate,
            listeners: Default::default(),
            next_listener_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn set_client_inner(&self, client: Weak<ClientInner>) {
        self.client
            .set(client)
            .unwrap_or_else(|_| panic!("Tried to set ClientInner twice on ClientEventDispatcher"))
    }

    pub fn add_listener(
        &self,
        listener: impl Fn(&ClientEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: &ListenerId) {
        self.listeners.lock().retain(|(lid, _)| lid != id);
    }

    pub fn remove_all_listeners(&self) {
        self.listeners.lock().clear();
    }

    pub fn dispatch_event(&self, event: ClientEvent) {
        if let Some(ref delegate) = self.delegate {
            if let Some(client_inner) = self
                .client
                .get()
                .expect("ClientInner was not set on ClientEventDispatcher")
                .upgrade()
            {
                delegate.handle_event(client_inner.into(), event.clone());
            }
        }

        // Dispatch over a snapshot so that a listener which registers or
        // removes listeners (or emits) during dispatch cannot invalidate
        // the iteration. Changes take effect from the next dispatch.
        let listeners = self.listeners.lock().clone();
        for (_, listener) in &listeners {
            listener(&event)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dispatcher() -> ClientEventDispatcher {
        ClientEventDispatcher::new(None)
    }

    #[test]
    fn test_invokes_listeners_in_registration_order() {
        let dispatcher = dispatcher();
        let order = Arc::new(Mutex::new(Vec::<&str>::new()));

        let first = order.clone();
        dispatcher.add_listener(move |_| first.lock().push("first"));
        let second = order.clone();
        dispatcher.add_listener(move |_| second.lock().push("second"));

        dispatcher.dispatch_event(ClientEvent::ConversationsChanged);

        assert_eq!(*order.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_removes_only_the_identified_listener() {
        let dispatcher = dispatcher();
        let counter = Arc::new(AtomicUsize::new(0));

        let kept = counter.clone();
        dispatcher.add_listener(move |_| {
            kept.fetch_add(1, Ordering::SeqCst);
        });
        let removed = counter.clone();
        let id = dispatcher.add_listener(move |_| {
            removed.fetch_add(10, Ordering::SeqCst);
        });

        dispatcher.remove_listener(&id);
        dispatcher.dispatch_event(ClientEvent::ConversationsChanged);

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_register_listeners_during_dispatch() {
        let dispatcher = Arc::new(dispatcher());
        let counter = Arc::new(AtomicUsize::new(0));

        let re_entrant_dispatcher = dispatcher.clone();
        let re_entrant_counter = counter.clone();
        dispatcher.add_listener(move |_| {
            let counter = re_entrant_counter.clone();
            re_entrant_dispatcher.add_listener(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        // The listener registered mid-dispatch only sees later events.
        dispatcher.dispatch_event(ClientEvent::ConversationsChanged);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        dispatcher.dispatch_event(ClientEvent::ConversationsChanged);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_all_listeners() {
        let dispatcher = dispatcher();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        dispatcher.add_listener(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        dispatcher.remove_all_listeners();
        dispatcher.dispatch_event(ClientEvent::ConversationsChanged);

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
