//! Clock sources and the mutable state behind time-based UUIDs.

use std::time;

/// Number of 100-nanosecond intervals between the UUID epoch (1582-10-15T00:00:00Z) and the Unix
/// epoch (1970-01-01T00:00:00Z).
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const MAX_CLOCK_SEQUENCE: u16 = (1 << 14) - 1;

/// A trait that supplies the current time to a time-based generator.
pub trait TimeSource {
    /// Returns the number of 100-nanosecond intervals elapsed since the UUID epoch.
    fn ticks(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads the system clock.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn ticks(&mut self) -> u64 {
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        UUID_EPOCH_OFFSET + elapsed.as_secs() * 10_000_000 + u64::from(elapsed.subsec_nanos() / 100)
    }
}

/// The last timestamp, clock sequence, and node identifier of a time-based generator.
///
/// Every call to [`ClockState::advance`] bumps the clock sequence when the timestamp fails to
/// move forward, so that two UUIDs built from the returned pairs never coincide (until the 14-bit
/// sequence wraps around within a single tick).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClockState {
    last_timestamp: u64,
    clock_sequence: u16,
    node_id: [u8; 6],
}

impl ClockState {
    /// Creates a state with the given initial clock sequence and node identifier.
    ///
    /// Only the low 14 bits of `clock_sequence` are kept.
    pub const fn new(clock_sequence: u16, node_id: [u8; 6]) -> Self {
        Self {
            last_timestamp: 0,
            clock_sequence: clock_sequence & MAX_CLOCK_SEQUENCE,
            node_id,
        }
    }

    /// Creates a state with a random initial clock sequence.
    pub fn with_random_sequence(node_id: [u8; 6]) -> Self {
        Self::new(rand::random(), node_id)
    }

    /// Records `timestamp` as the latest one and returns the clock sequence to pair it with.
    pub fn advance(&mut self, timestamp: u64) -> u16 {
        if timestamp <= self.last_timestamp {
            self.clock_sequence = (self.clock_sequence + 1) & MAX_CLOCK_SEQUENCE;
            log::trace!(
                "timestamp {} did not advance past {}; clock sequence bumped to {}",
                timestamp,
                self.last_timestamp,
                self.clock_sequence
            );
        }
        self.last_timestamp = timestamp;
        self.clock_sequence
    }

    /// Returns the timestamp recorded by the latest call to [`ClockState::advance`].
    pub const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Returns the current 14-bit clock sequence.
    pub const fn clock_sequence(&self) -> u16 {
        self.clock_sequence
    }

    /// Returns the 48-bit node identifier.
    pub const fn node_id(&self) -> &[u8; 6] {
        &self.node_id
    }
}
