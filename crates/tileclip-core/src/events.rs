//! Clipping effect events.
//!
//! Mutations of the [`ClippingTool`](crate::ClippingTool) push a
//! [`ClippingEvent`] into an [`EffectEventBuffer`]; UI and persistence layers
//! drain it once per tick.

use crate::primitive::PrimitiveKind;

/// Change notification for one clipping effect or for the effect list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClippingEvent {
    /// A primitive was created at `index`.
    EffectAdded { kind: PrimitiveKind, index: usize },
    /// The primitive at `index` was removed. For planes and boxes the slot is
    /// now free and may be reused by the next addition.
    EffectRemoved { kind: PrimitiveKind, index: usize },
    /// Enabled, inverted, influence, or geometry changed.
    EffectModified { kind: PrimitiveKind, index: usize },
    /// Sent after every add or remove.
    EffectListModified,
}

/// Double-buffered event storage.
///
/// Events written since the last [`swap`](EffectEventBuffer::swap) are readable
/// together with those of the previous tick.
#[derive(Debug, Default)]
pub struct EffectEventBuffer {
    prev: Vec<ClippingEvent>,
    current: Vec<ClippingEvent>,
}

impl EffectEventBuffer {
    /// Creates a new empty event buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an event for the current tick.
    pub fn send(&mut self, event: ClippingEvent) {
        self.current.push(event);
    }

    /// All readable events, oldest first.
    pub fn read(&self) -> impl Iterator<Item = &ClippingEvent> {
        self.prev.iter().chain(self.current.iter())
    }

    /// Takes every readable event, leaving both buffers empty.
    pub fn drain(&mut self) -> Vec<ClippingEvent> {
        let mut out = std::mem::take(&mut self.prev);
        out.append(&mut self.current);
        out
    }

    /// Number of readable events.
    pub fn len(&self) -> usize {
        self.prev.len() + self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances one tick: previous events are dropped, current become previous.
    pub fn swap(&mut self) {
        self.prev.clear();
        std::mem::swap(&mut self.prev, &mut self.current);
    }

    /// Drops every event, previous and current.
    pub fn clear(&mut self) {
        self.prev.clear();
        self.current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(index: usize) -> ClippingEvent {
        ClippingEvent::EffectAdded {
            kind: PrimitiveKind::Plane,
            index,
        }
    }

    #[test]
    fn test_events_survive_one_swap() {
        let mut buffer = EffectEventBuffer::new();
        buffer.send(added(0));
        buffer.swap();
        buffer.send(added(1));
        assert_eq!(buffer.len(), 2);

        buffer.swap();
        let events: Vec<_> = buffer.read().copied().collect();
        assert_eq!(events, vec![added(1)]);

        buffer.swap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_drain_keeps_order() {
        let mut buffer = EffectEventBuffer::new();
        buffer.send(added(3));
        buffer.swap();
        buffer.send(ClippingEvent::EffectListModified);
        assert_eq!(
            buffer.drain(),
            vec![added(3), ClippingEvent::EffectListModified]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer = EffectEventBuffer::new();
        buffer.send(added(0));
        buffer.swap();
        buffer.send(added(1));
        buffer.clear();
        assert_eq!(buffer.read().count(), 0);
    }
}
