use serde::{Deserialize, Serialize};

use crate::core::AxisId;
use crate::render::Renderer;

use super::ChartEngine;

/// State area whose change requires a new layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    XAxis,
    YAxis,
    Data,
    Viewport,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::XAxis => 1 << 0,
            Self::YAxis => 1 << 1,
            Self::Data => 1 << 2,
            Self::Viewport => 1 << 3,
            Self::Style => 1 << 4,
        }
    }

    #[must_use]
    pub const fn for_axis(axis: AxisId) -> Self {
        match axis {
            AxisId::X => Self::XAxis,
            AxisId::Y => Self::YAxis,
        }
    }
}

/// Bitmask of pending invalidation topics.
///
/// Input handlers only set bits; the host drains them once per frame, so a
/// burst of drag events costs one tick recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::XAxis.bit()
        | InvalidationTopic::YAxis.bit()
        | InvalidationTopic::Data.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Style.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending_invalidation
    }

    /// Whether any state changed since the last layout pass.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        !self.pending_invalidation.is_none()
    }

    /// Returns and clears pending topics.
    pub fn take_pending_invalidation(&mut self) -> InvalidationTopics {
        std::mem::take(&mut self.pending_invalidation)
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.pending_invalidation = self.pending_invalidation.with_topic(topic);
    }

    pub(super) fn invalidate_axis(&mut self, axis: AxisId) {
        self.invalidate(InvalidationTopic::for_axis(axis));
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTopic, InvalidationTopics};

    #[test]
    fn topics_accumulate_and_report_membership() {
        let topics = InvalidationTopics::none()
            .with_topic(InvalidationTopic::XAxis)
            .with_topic(InvalidationTopic::Data);

        assert!(topics.contains_topic(InvalidationTopic::XAxis));
        assert!(topics.contains_topic(InvalidationTopic::Data));
        assert!(!topics.contains_topic(InvalidationTopic::YAxis));
        assert!(!topics.is_none());
        assert!(InvalidationTopics::none().is_none());
    }

    #[test]
    fn all_contains_every_topic() {
        let all = InvalidationTopics::all();
        for topic in [
            InvalidationTopic::XAxis,
            InvalidationTopic::YAxis,
            InvalidationTopic::Data,
            InvalidationTopic::Viewport,
            InvalidationTopic::Style,
        ] {
            assert!(all.contains_topic(topic));
        }
        assert_eq!(
            InvalidationTopics::from_topic(InvalidationTopic::Style).union(all),
            all
        );
    }
}
