//! Queue of modal notifications

use crate::relay::{NoticeKind, Notifier};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// FIFO of notices; the front one is shown until dismissed
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    pub fn has_notice(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        tracing::debug!("Notice queued: {title}");
        self.queue.push_back(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
