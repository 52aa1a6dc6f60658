#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    TaskAdded,
    LinkAdded,
    CategoryAdded,
}

impl NoticeKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::TaskAdded => "Task added successfully!",
            Self::LinkAdded => "Link added successfully!",
            Self::CategoryAdded => "Category added successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
}

/// The transient success banner. Each `show` gets a fresh sequence number so
/// a dismiss timer only clears the notice it was started for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    last_seq: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<Notice> {
        self.current
    }

    pub fn show(&self, kind: NoticeKind) -> Self {
        let seq = self.last_seq + 1;
        tracing::debug!(seq, message = kind.message(), "showing notice");
        Self {
            last_seq: seq,
            current: Some(Notice { seq, kind }),
        }
    }

    pub fn dismiss(&self, seq: u64) -> Self {
        match self.current {
            Some(notice) if notice.seq == seq => Self {
                last_seq: self.last_seq,
                current: None,
            },
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeBoard, NoticeKind};

    #[test]
    fn dismiss_clears_matching_notice() {
        let board = NoticeBoard::default().show(NoticeKind::TaskAdded);
        let seq = board.current().map(|n| n.seq).expect("notice shown");
        assert!(board.dismiss(seq).current().is_none());
    }

    #[test]
    fn stale_timer_keeps_newer_notice() {
        let first = NoticeBoard::default().show(NoticeKind::TaskAdded);
        let stale = first.current().map(|n| n.seq).expect("first notice");
        let second = first.show(NoticeKind::LinkAdded);
        let after = second.dismiss(stale);
        assert_eq!(after.current().map(|n| n.kind), Some(NoticeKind::LinkAdded));
        assert_eq!(NoticeKind::LinkAdded.message(), "Link added successfully!");
    }
}
