//! Event bus - central hub for cross-module communication
//!
//! Systems emit timestamped match events to the bus; once per frame the bus
//! is drained into the structured log so a match can be audited after the
//! fact.

use bevy::prelude::*;

use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since app start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be drained
    pending: Vec<BusEvent>,

    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,
}

impl EventBus {
    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Drain pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get the number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Get current elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

/// System to drain the bus into the log once per frame, one JSON line per
/// event so a match can be replayed from the log
pub fn log_events(mut bus: ResMut<EventBus>) {
    for entry in bus.drain() {
        match serde_json::to_string(&entry.event) {
            Ok(json) => debug!("[{} ms] {}", entry.time_ms, json),
            Err(e) => warn!("Failed to serialize event {:?}: {}", entry.event, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Side;

    #[test]
    fn emit_and_drain() {
        let mut bus = EventBus::default();
        bus.update_time(1.5);

        bus.emit(GameEvent::Touch {
            player: Side::Left,
            touches: 1,
        });

        assert_eq!(bus.pending_count(), 1);

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn events_serialize_for_the_log() {
        let json = serde_json::to_string(&GameEvent::ServeChange { side: Side::Left }).unwrap();
        assert!(json.contains("ServeChange"));
        assert!(json.contains("Left"));
    }

    #[test]
    fn point_event_carries_both_scores() {
        let mut bus = EventBus::default();
        bus.emit(GameEvent::PointScored {
            side: Side::Right,
            score_left: 2,
            score_right: 5,
            fault: true,
        });

        let events = bus.drain();
        if let GameEvent::PointScored {
            side,
            score_right,
            fault,
            ..
        } = &events[0].event
        {
            assert_eq!(*side, Side::Right);
            assert_eq!(*score_right, 5);
            assert!(*fault);
        } else {
            panic!("Wrong event type");
        }
    }
}
