use tokio::sync::watch;

/// Process-wide current language. Views read it through a [`LocaleSubscription`].
#[derive(Debug)]
pub struct LocaleStore {
    tx: watch::Sender<String>,
}

impl LocaleStore {
    pub fn new(language: &str) -> Self {
        let (tx, _) = watch::channel(language.to_string());
        Self { tx }
    }

    pub fn set_language(&self, language: &str) {
        self.tx.send_if_modified(|current| {
            if current == language {
                return false;
            }
            *current = language.to_string();
            true
        });
    }

    pub fn current_language(&self) -> String {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> LocaleSubscription {
        LocaleSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Live view of the current language. Dropping it unsubscribes.
#[derive(Debug)]
pub struct LocaleSubscription {
    rx: watch::Receiver<String>,
}

impl LocaleSubscription {
    pub fn current_language(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Waits for the next language change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<String> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
