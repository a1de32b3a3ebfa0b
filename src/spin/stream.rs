//! Angle sample stream
//!
//! Subscribers get the live angle once per tick of the next (or current)
//! spin. The stream is bounded: a subscriber that falls behind loses
//! samples, which is fine since only the settled result is authoritative.
//! It ends when the spin settles or is cancelled and cannot be restarted.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use futures::channel::mpsc;

/// Buffered samples per subscriber
pub const DEFAULT_STREAM_CAPACITY: usize = 64;

/// Receiving end handed to subscribers
#[derive(Debug)]
pub struct AngleStream {
    receiver: mpsc::Receiver<f64>,
}

impl AngleStream {
    /// Stop receiving samples. Dropping the stream has the same effect.
    pub fn unsubscribe(mut self) {
        self.receiver.close();
    }
}

impl Stream for AngleStream {
    type Item = f64;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<f64>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

/// Sending side, owned by the controller
#[derive(Debug, Default)]
pub struct AngleBroadcast {
    subscribers: Vec<mpsc::Sender<f64>>,
}

impl AngleBroadcast {
    pub fn subscribe(&mut self, capacity: usize) -> AngleStream {
        let (sender, receiver) = mpsc::channel(capacity);
        self.subscribers.push(sender);
        AngleStream { receiver }
    }

    /// Push a sample to every live subscriber, pruning closed ones
    pub fn publish(&mut self, angle: f64) {
        self.subscribers.retain_mut(|sender| match sender.try_send(angle) {
            Ok(()) => true,
            Err(e) if e.is_full() => {
                log::trace!("Angle subscriber lagging, dropped sample {:.2}", angle);
                true
            }
            Err(_) => false,
        });
    }

    /// End every stream
    pub fn close(&mut self) {
        self.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
