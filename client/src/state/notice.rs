//! Transient user notices (toast banner).

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
            Self::Info => "notice notice--info",
        }
    }
}

/// One message shown briefly at the top of the page.
///
/// `seq` distinguishes two identical messages raised back to back, so a
/// dismiss timer from the first one does not clear the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub detail: Option<String>,
    pub seq: u64,
}

/// Current notice plus the sequence counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    /// Replace the current notice, returning its sequence number.
    pub fn show(&mut self, kind: NoticeKind, title: impl Into<String>, detail: Option<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Notice { kind, title: title.into(), detail, seq });
        seq
    }

    /// Clear the notice only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
