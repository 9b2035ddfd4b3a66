//! Tracking of the displayed image's frame across load and resize events.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::geometry::{ImageFrame, Size};
use crate::record::PhotoKey;

/// Holds the frame of the image currently shown for one photo.
///
/// The frame is tied to the photo it was captured for: switching photos
/// drops it, and load events reported for any other photo are ignored.
/// Load and resize events overwrite each other, last write wins.
#[derive(Clone, Debug, Default)]
pub struct FrameTracker {
    photo: Option<PhotoKey>,
    frame: Option<ImageFrame>,
}

impl FrameTracker {
    pub fn photo(&self) -> Option<PhotoKey> {
        self.photo
    }

    pub fn frame(&self) -> Option<ImageFrame> {
        self.frame
    }

    /// Start tracking `photo`. Any previous frame is discarded.
    pub fn reset(&mut self, photo: PhotoKey) {
        debug!(%photo, "Frame reset for new photo");
        self.photo = Some(photo);
        self.frame = None;
    }

    /// Drop the frame but keep the photo, e.g. when another side is shown.
    pub fn invalidate(&mut self) {
        self.frame = None;
    }

    /// The image for `photo` finished loading. Returns false for a stale event.
    pub fn image_loaded(&mut self, photo: PhotoKey, display: Size, native: Size) -> bool {
        if self.photo != Some(photo) {
            debug!(%photo, "Ignoring load event for a photo no longer shown");
            return false;
        }
        self.frame = Some(ImageFrame::new(display, native));
        true
    }

    /// The rendered size changed. Returns true if the frame was replaced.
    pub fn resized(&mut self, display: Size) -> bool {
        let Some(current) = self.frame else {
            return false;
        };
        if current.display_size() == display {
            return false;
        }
        self.frame = Some(ImageFrame::new(display, current.native_size()));
        true
    }
}

type Listener = Box<dyn FnMut(Size)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// Ids released while their listener was out for a notification.
    released: Vec<u64>,
}

/// Change-detecting source of display size updates.
///
/// Hosts feed every observed size through [`ResizeObserver::observe`];
/// subscribers only hear about actual changes. A subscription lives as
/// long as its [`Subscription`] guard.
#[derive(Default)]
pub struct ResizeObserver {
    last: Option<Size>,
    listeners: Rc<RefCell<Listeners>>,
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(Size) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    pub fn last_size(&self) -> Option<Size> {
        self.last
    }

    /// Forget the last size so the next observation always notifies.
    pub fn forget(&mut self) {
        self.last = None;
    }

    /// Record the current display size. Returns true if it changed.
    pub fn observe(&mut self, size: Size) -> bool {
        if self.last == Some(size) {
            return false;
        }
        self.last = Some(size);
        self.notify(size);
        true
    }

    fn notify(&self, size: Size) {
        // Listeners run without the registry borrowed so they may
        // subscribe or drop guards.
        let mut running = std::mem::take(&mut self.listeners.borrow_mut().entries);
        for (_, listener) in running.iter_mut() {
            listener(size);
        }

        // Released listeners drop after the registry borrow ends.
        let stale = {
            let mut listeners = self.listeners.borrow_mut();
            let released = std::mem::take(&mut listeners.released);
            let (stale, mut kept): (Vec<_>, Vec<_>) = running
                .into_iter()
                .partition(|(id, _)| released.contains(id));
            kept.append(&mut listeners.entries);
            listeners.entries = kept;
            stale
        };
        drop(stale);
    }
}

impl fmt::Debug for ResizeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeObserver")
            .field("last", &self.last)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Releases its listener when dropped.
#[must_use = "dropping the subscription releases the listener immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.listeners.upgrade() else {
            return;
        };
        let removed = {
            let mut listeners = shared.borrow_mut();
            match listeners.entries.iter().position(|(id, _)| *id == self.id) {
                Some(index) => Some(listeners.entries.remove(index)),
                None => {
                    listeners.released.push(self.id);
                    None
                }
            }
        };
        // Dropped outside the borrow: the listener may own other guards.
        drop(removed);
    }
}
