#![forbid(unsafe_code)]

//! Recording listener double.

use swipelist_core::SwipeListener;

/// One listener callback, as observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Opened { position: usize, toward_right: bool },
    Closed { position: usize, was_toward_right: bool },
    Moving { position: usize, offset: f32 },
    FrontClicked(usize),
    BackClicked(usize),
    ListContentsChanged,
    Dismissed(Vec<usize>),
    ChoiceChanged { position: usize, checked: bool },
}

/// Records every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    pub events: Vec<Notification>,
}

impl RecordingListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded callbacks other than `moving`.
    #[must_use]
    pub fn outcomes(&self) -> Vec<Notification> {
        self.events
            .iter()
            .filter(|n| !matches!(n, Notification::Moving { .. }))
            .cloned()
            .collect()
    }

    /// Every `dismissed` batch, in order.
    #[must_use]
    pub fn dismissals(&self) -> Vec<Vec<usize>> {
        self.events
            .iter()
            .filter_map(|n| match n {
                Notification::Dismissed(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last offset reported by `moving`.
    #[must_use]
    pub fn last_offset(&self) -> Option<f32> {
        self.events.iter().rev().find_map(|n| match n {
            Notification::Moving { offset, .. } => Some(*offset),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SwipeListener for RecordingListener {
    fn opened(&mut self, position: usize, toward_right: bool) {
        self.events.push(Notification::Opened {
            position,
            toward_right,
        });
    }

    fn closed(&mut self, position: usize, was_toward_right: bool) {
        self.events.push(Notification::Closed {
            position,
            was_toward_right,
        });
    }

    fn moving(&mut self, position: usize, offset: f32) {
        self.events.push(Notification::Moving { position, offset });
    }

    fn front_clicked(&mut self, position: usize) {
        self.events.push(Notification::FrontClicked(position));
    }

    fn back_clicked(&mut self, position: usize) {
        self.events.push(Notification::BackClicked(position));
    }

    fn list_contents_changed(&mut self) {
        self.events.push(Notification::ListContentsChanged);
    }

    fn dismissed(&mut self, positions_descending: &[usize]) {
        self.events
            .push(Notification::Dismissed(positions_descending.to_vec()));
    }

    fn choice_changed(&mut self, position: usize, checked: bool) {
        self.events
            .push(Notification::ChoiceChanged { position, checked });
    }
}
