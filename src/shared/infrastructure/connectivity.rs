// Online/offline state of the kiosk.
//
// The current flag lives in a watch channel so any component can read or
// follow it. Every change is also queued, in order, on an unbounded channel
// consumed by the connectivity observer, so each transition is seen once.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

#[derive(Debug)]
pub struct ConnectivityMonitor {
    state: watch::Sender<bool>,
    transitions: mpsc::UnboundedSender<bool>,
}

/// Receiving end of the transition queue. One per monitor.
#[derive(Debug)]
pub struct ConnectivityTransitions {
    receiver: mpsc::UnboundedReceiver<bool>,
}

impl ConnectivityTransitions {
    /// Next transition; `true` means the kiosk just came online.
    pub async fn next(&mut self) -> Option<bool> {
        self.receiver.recv().await
    }
}

impl ConnectivityMonitor {
    pub fn new(initially_online: bool) -> (Self, ConnectivityTransitions) {
        let (state, _) = watch::channel(initially_online);
        let (transitions, receiver) = mpsc::unbounded_channel();
        (
            Self { state, transitions },
            ConnectivityTransitions { receiver },
        )
    }

    pub fn is_online(&self) -> bool {
        *self.state.borrow()
    }

    /// Returns `true` when this call changed the state.
    pub fn set_online(&self, online: bool) -> bool {
        let changed = self.state.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
        if changed {
            info!(online, "connectivity changed");
            if self.transitions.send(online).is_err() {
                debug!("no connectivity observer attached");
            }
        }
        changed
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod connectivity_monitor_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_initial_state() {
        let (online, _) = ConnectivityMonitor::new(true);
        let (offline, _) = ConnectivityMonitor::new(false);
        assert!(online.is_online());
        assert!(!offline.is_online());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_queue_one_transition_per_change() {
        let (monitor, mut transitions) = ConnectivityMonitor::new(false);

        assert!(monitor.set_online(true));
        assert!(!monitor.set_online(true));
        assert!(monitor.set_online(false));
        assert!(monitor.set_online(true));

        assert_eq!(transitions.next().await, Some(true));
        assert_eq!(transitions.next().await, Some(false));
        assert_eq!(transitions.next().await, Some(true));
        assert!(transitions.receiver.try_recv().is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn subscribers_should_see_the_latest_state() {
        let (monitor, _transitions) = ConnectivityMonitor::new(true);
        let mut watcher = monitor.subscribe();

        monitor.set_online(false);
        watcher.changed().await.expect("monitor dropped");
        assert!(!*watcher.borrow());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_working_without_an_observer() {
        let (monitor, transitions) = ConnectivityMonitor::new(true);
        drop(transitions);
        assert!(monitor.set_online(false));
        assert!(!monitor.is_online());
    }
}
