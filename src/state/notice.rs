//! User-visible notification queue.
//!
//! DESIGN
//! ======
//! The guard and the HTTP layer push notices; the rendering shell drains
//! the queue and decides how long each toast stays on screen. Keeping the
//! queue as plain state means the authorization core never touches a
//! widget API.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a notice, mapped to toast styling by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Shared handle to the pending-notice queue. Clones observe the same queue.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    inner: Rc<RefCell<Vec<Notice>>>,
}

impl Notices {
    pub fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn push(&self, level: NoticeLevel, message: &str) {
        self.inner.borrow_mut().push(Notice {
            level,
            message: message.to_owned(),
        });
    }

    /// Remove and return all pending notices in arrival order.
    pub fn drain(&self) -> Vec<Notice> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
