//! UUIDv4-related functionality

use crate::Uuid;
use rand::random;

/// Generates a UUIDv4 object.
///
/// The 122 payload bits come from the thread-local cryptographically secure generator of the
/// `rand` crate.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::new_v4;
///
/// let uuid = new_v4();
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn new_v4() -> Uuid {
    let mut uuid = Uuid::from(random::<[u8; 16]>());
    uuid.set_version(4);
    uuid.set_variant();
    uuid
}
