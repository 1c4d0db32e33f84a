//! UUIDv1 generator and related types.

use crate::clock::{ClockState, StdSystemTime, TimeSource};
use crate::Uuid;

impl Uuid {
    /// Creates a UUIDv1 object from a 60-bit timestamp, a 14-bit clock sequence, and a 48-bit node
    /// identifier.
    ///
    /// Bits of `timestamp` and `clock_seq` that do not fit their fields are overwritten by the
    /// version and variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc4122::{Uuid, NAMESPACE_DNS};
    ///
    /// let node_id = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
    /// let uuid = Uuid::from_fields_v1(0x01d1_9dad_6ba7_b810, 0x00b4, &node_id);
    /// assert_eq!(uuid, NAMESPACE_DNS);
    /// ```
    pub fn from_fields_v1(timestamp: u64, clock_seq: u16, node_id: &[u8; 6]) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&(timestamp as u32).to_be_bytes());
        bytes[4..6].copy_from_slice(&((timestamp >> 32) as u16).to_be_bytes());
        bytes[6..8].copy_from_slice(&((timestamp >> 48) as u16).to_be_bytes());
        bytes[8..10].copy_from_slice(&clock_seq.to_be_bytes());
        bytes[10..].copy_from_slice(node_id);

        let mut uuid = Self::from(bytes);
        uuid.set_version(1);
        uuid.set_variant();
        uuid
    }
}

/// Represents a UUIDv1 generator that owns a [`ClockState`] and a [`TimeSource`].
///
/// The generator never returns the same UUID twice as long as the clock sequence does not wrap
/// around within a single timestamp; when the time source does not advance, the clock sequence
/// is bumped instead. To share a generator across threads, put it behind a lock so that every
/// read-modify-write of the state happens in one critical section:
///
/// ```rust
/// use std::{sync, thread};
/// use uuid_rfc4122::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab])));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// The process-wide generator behind [`new_v1`](crate::new_v1) is set up exactly this way.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<T = StdSystemTime> {
    state: ClockState,

    /// The time source used by the generator.
    time_source: T,
}

impl V1Generator<StdSystemTime> {
    /// Creates a generator that reads the system clock, starting from a random clock sequence.
    pub fn new(node_id: [u8; 6]) -> Self {
        Self::with_time_source(StdSystemTime, node_id)
    }
}

impl<T: TimeSource> V1Generator<T> {
    /// Creates a generator with a specified time source, starting from a random clock sequence.
    pub fn with_time_source(time_source: T, node_id: [u8; 6]) -> Self {
        Self::with_state(time_source, ClockState::with_random_sequence(node_id))
    }

    /// Creates a generator from an explicit state.
    pub const fn with_state(time_source: T, state: ClockState) -> Self {
        Self { state, time_source }
    }

    /// Returns the current state.
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Generates a new UUIDv1 object from the current timestamp.
    pub fn generate(&mut self) -> Uuid {
        let timestamp = self.time_source.ticks();
        self.generate_core(timestamp)
    }

    /// Generates a new UUIDv1 object from the `timestamp` (100-nanosecond intervals since the
    /// UUID epoch) passed.
    pub fn generate_core(&mut self, timestamp: u64) -> Uuid {
        let clock_seq = self.state.advance(timestamp);
        Uuid::from_fields_v1(timestamp, clock_seq, self.state.node_id())
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::V1Generator;
///
/// V1Generator::new([0x01; 6])
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<T: TimeSource> Iterator for V1Generator<T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: TimeSource> std::iter::FusedIterator for V1Generator<T> {}

#[cfg(test)]
pub(crate) mod tests {
    use super::V1Generator;
    use crate::clock::{ClockState, TimeSource};
    use crate::{Uuid, Variant};

    /// A time source pinned to a single value.
    pub(crate) struct PinnedTime(pub u64);

    impl TimeSource for PinnedTime {
        fn ticks(&mut self) -> u64 {
            self.0
        }
    }

    const NODE_ID: [u8; 6] = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];

    /// Places fields at RFC 4122 positions
    #[test]
    fn places_fields_at_rfc_4122_positions() {
        let e = Uuid::from_fields_v1(0x0fed_cba9_8765_4321, 0x3a5c, &NODE_ID);
        assert_eq!(e.to_string(), "87654321-cba9-1fed-ba5c-00c04fd430c8");
        assert_eq!(e.version(), 1);
        assert_eq!(e.variant(), Variant::Rfc4122);
    }

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-00c04fd430c8$";
        let re = regex::Regex::new(pattern).unwrap();
        let mut g = V1Generator::new(NODE_ID);
        for _ in 0..10_000 {
            let e = g.generate();
            assert!(re.is_match(&e.to_string()));
            assert_eq!(e.version(), 1);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }

    /// Generates distinct UUIDs even with pinned timestamp
    #[test]
    fn generates_distinct_uuids_even_with_pinned_timestamp() {
        let mut g = V1Generator::with_time_source(PinnedTime(0), NODE_ID);
        let a = g.generate();
        let b = g.generate();
        assert_ne!(a, b);
        assert_eq!(a.as_bytes()[..8], b.as_bytes()[..8]);
        assert_eq!(a.as_bytes()[10..], b.as_bytes()[10..]);
    }

    /// Generates 10k identifiers without collision under constant or decreasing timestamp
    #[test]
    fn generates_10k_identifiers_without_collision_under_constant_or_decreasing_timestamp() {
        use std::collections::HashSet;
        let ts = 0x01e0_1234_5678_9abcu64;
        let mut g = V1Generator::with_state(PinnedTime(ts), ClockState::new(0, NODE_ID));
        let s: HashSet<Uuid> = (0..10_000u64)
            .map(|i| g.generate_core(ts - i.min(4_000)))
            .collect();
        assert_eq!(s.len(), 10_000);
        assert_eq!(g.state().clock_sequence(), 9_999);
    }

    /// Keeps clock sequence while timestamp advances
    #[test]
    fn keeps_clock_sequence_while_timestamp_advances() {
        let mut g = V1Generator::with_state(PinnedTime(0), ClockState::new(0x0123, NODE_ID));
        for ts in 1..1_000u64 {
            let e = g.generate_core(ts);
            assert_eq!(e.as_bytes()[8..10], [0x81, 0x23]);
            assert_eq!(e.as_bytes()[..4], (ts as u32).to_be_bytes());
        }
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::clock::{StdSystemTime, TimeSource};
        let mut g = V1Generator::new(NODE_ID);
        for _ in 0..1_000 {
            let now = StdSystemTime.ticks();
            let b = g.generate().into_bytes();
            let timestamp = u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
                | u64::from(u16::from_be_bytes([b[4], b[5]])) << 32
                | u64::from(u16::from_be_bytes([b[6] & 0x0f, b[7]])) << 48;
            assert!(timestamp >= now);
            assert!(timestamp - now < 10_000_000);
        }
    }

    /// Round-trips generated UUIDs through the string form
    #[test]
    fn round_trips_generated_uuids_through_the_string_form() {
        for e in V1Generator::new(NODE_ID).take(1_000) {
            assert_eq!(e.to_string().parse(), Ok(e));
        }
    }
}
