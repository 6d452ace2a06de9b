use tokio::sync::watch;

/// One-shot wake-up for every long-poll waiting on a game.
///
/// A game holds exactly one live `Signal`. Appending an event fires it and
/// installs a fresh one, so any number of waiters see each event once.
/// A waiter subscribed before the fire can never miss it, even if it only
/// starts awaiting afterwards.
#[derive(Debug)]
pub struct Signal {
    tx: watch::Sender<bool>,
}

impl Signal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> SignalWaiter {
        SignalWaiter {
            rx: self.tx.subscribe(),
        }
    }

    pub fn fire(&self) {
        self.tx.send_replace(true);
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SignalWaiter {
    rx: watch::Receiver<bool>,
}

impl SignalWaiter {
    /// Resolves once the signal fires, or once its game is dropped.
    pub async fn fired(mut self) {
        // Err means the sender is gone; the game was torn down.
        let _ = self.rx.wait_for(|fired| *fired).await;
    }
}
