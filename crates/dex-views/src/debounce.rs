//! Input debouncing.
//!
//! A burst of values arriving less than `window` apart collapses into the
//! last one. Each new value restarts the window.
//!
//! [`Debouncer::next`] is cancel safe: a value received by a dropped call is
//! kept and returned by the following one.

use std::time::Duration;

use tokio::sync::mpsc;

pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    window: Duration,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(rx: mpsc::Receiver<T>, window: Duration) -> Self {
        Self {
            rx,
            window,
            pending: None,
        }
    }

    /// Wait for the next settled value.
    ///
    /// Returns the latest value once `window` passes without a newer one, or
    /// once the sender closes with a value pending. Returns `None` when the
    /// sender is closed and nothing is pending.
    pub async fn next(&mut self) -> Option<T> {
        if self.pending.is_none() {
            self.pending = Some(self.rx.recv().await?);
        }
        loop {
            match tokio::time::timeout(self.window, self.rx.recv()).await {
                Ok(Some(value)) => self.pending = Some(value),
                Ok(None) | Err(_) => return self.pending.take(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_into_last_value() {
        let (tx, rx) = mpsc::channel(16);
        let mut debouncer = Debouncer::new(rx, WINDOW);

        tokio::spawn(async move {
            for query in ["p", "pi", "pik", "pika", "pikachu"] {
                tx.send(query.to_string()).await.unwrap();
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        });

        let mut evaluations = Vec::new();
        while let Some(query) = debouncer.next().await {
            evaluations.push(query);
        }
        assert_eq!(evaluations, vec!["pikachu".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn separated_bursts_settle_separately() {
        let (tx, rx) = mpsc::channel(16);
        let mut debouncer = Debouncer::new(rx, WINDOW);

        tokio::spawn(async move {
            tx.send("eev").await.unwrap();
            tx.send("eevee").await.unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
            tx.send("mew").await.unwrap();
        });

        assert_eq!(debouncer.next().await, Some("eevee"));
        assert_eq!(debouncer.next().await, Some("mew"));
        assert_eq!(debouncer.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_call_keeps_the_pending_value() {
        let (tx, rx) = mpsc::channel(4);
        let mut debouncer = Debouncer::new(rx, WINDOW);
        tx.send("ditto").await.unwrap();

        let cut_short =
            tokio::time::timeout(Duration::from_millis(100), debouncer.next()).await;
        assert!(cut_short.is_err());

        drop(tx);
        assert_eq!(debouncer.next().await, Some("ditto"));
        assert_eq!(debouncer.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn window_restarts_on_each_value() {
        let (tx, rx) = mpsc::channel(16);
        let mut debouncer = Debouncer::new(rx, WINDOW);
        let started = tokio::time::Instant::now();

        tokio::spawn(async move {
            for query in ["a", "ab", "abc"] {
                tx.send(query).await.unwrap();
                tokio::time::sleep(Duration::from_millis(250)).await;
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        });

        assert_eq!(debouncer.next().await, Some("abc"));
        // Last value sent at 500ms, settled one window later.
        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
