//! Counting semaphore limiting the batches in flight.

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::error::{FzError, Result};

/// A fixed pool of permits backed by a bounded channel.
///
/// Acquiring sends a token into the channel and blocks while the channel is
/// full; dropping a [`Permit`] takes one token back out.
#[derive(Debug)]
pub struct PermitPool {
    capacity: usize,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl PermitPool {
    /// Create a pool with `capacity` permits.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { capacity, tx, rx }
    }

    /// Take a permit, blocking until one is free.
    pub fn acquire(&self) -> Result<Permit> {
        self.tx
            .send(())
            .map_err(|_| FzError::other("permit pool closed"))?;
        Ok(Permit {
            rx: self.rx.clone(),
        })
    }

    /// Total number of permits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of permits not currently held.
    pub fn available(&self) -> usize {
        self.capacity - self.tx.len()
    }
}

/// A held permit; released when dropped.
#[derive(Debug)]
pub struct Permit {
    rx: Receiver<()>,
}

impl Drop for Permit {
    fn drop(&mut self) {
        let _ = self.rx.try_recv();
    }
}
