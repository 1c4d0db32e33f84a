//! An implementation of RFC 4122 UUIDs, versions 1 through 5
//!
//! ```rust
//! use uuid_rfc4122::{new_v1, new_v4, new_v5, NAMESPACE_DNS};
//!
//! let uuid = new_v4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! println!("{}", new_v1()); // e.g. "c232ab00-9414-11ec-b3c8-9e6bdeced846"
//!
//! let uuid = new_v5(&NAMESPACE_DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Time-based (version 1 and 2) identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|        clock_seq          |            node               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp, split into `time_low`, `time_mid`, and `time_high`, counts
//!   100-nanosecond intervals since 1582-10-15T00:00:00Z.
//! - The 4-bit `ver` field holds the version number.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field is randomly initialized and incremented whenever the timestamp
//!   fails to advance, so that identifiers stay unique even if the clock stalls or goes back.
//! - The 48-bit `node` field is a hardware address or a random value with the multicast bit set.
//!
//! Version 2 replaces `time_low` with a local identifier and the low byte of `clock_seq` with a
//! [`Domain`] code. Name-based versions 3 and 5 and random version 4 keep only `ver` and `var` and
//! fill every other bit with a digest or random data.
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide [`new_v1`] and [`new_v2`], plus `new_v2_local` on Unix.
//!   [`new_v4`], [`new_v3`], and [`new_v5`] need no shared state and are always available.
//! - `mac`: [`HardwareAddress`](node::HardwareAddress) node identifier source.
//! - `serde`: serialization as a string (human-readable formats) or 16 bytes.
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod uuid;
pub use uuid::{ParseError, Uuid, Variant};

pub mod clock;
pub mod node;
mod namespace;
pub use namespace::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

mod v1;
pub use v1::V1Generator;

mod v2;
pub use v2::Domain;

mod name;
pub use name::{new_v3, new_v5, HashAlgorithm};

mod v4;
pub use v4::new_v4;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_v1, new_v2};
#[cfg(all(feature = "global_gen", unix))]
pub use global_gen::new_v2_local;
