//! Process-wide time-based generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Domain, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// Every update of the generator state completes before the guard is released, so a poisoned
/// lock still holds a consistent state and is taken over as is.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose node identifier is the first hardware address
/// found (or a random one), and guarantees that no two calls within the process return the same
/// UUID even when the system clock stalls or goes backwards. On Unix, this function resets the
/// generator when the process ID changes (i.e., upon process forks).
///
/// # Examples
///
/// ```rust
/// let uuid = uuid_rfc4122::new_v1();
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9e6bdeced846"
/// assert_eq!(uuid.version(), 1);
/// ```
pub fn new_v1() -> Uuid {
    lock_global_gen().get_mut().generate()
}

/// Generates a UUIDv2 (DCE Security) object for the local identifier `id` in `domain`, sharing
/// the clock state of [`new_v1`].
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{new_v2, Domain};
///
/// let uuid = new_v2(Domain::Person, 1000);
/// assert!(uuid.to_string().starts_with("000003e8-"));
/// assert_eq!(uuid.version(), 2);
/// ```
pub fn new_v2(domain: Domain, id: u32) -> Uuid {
    lock_global_gen().get_mut().generate_v2(domain, id)
}

/// Generates a UUIDv2 (DCE Security) object for the calling process, storing its real UID for
/// [`Domain::Person`] or its real GID for [`Domain::Group`].
///
/// Returns `None` for [`Domain::Org`]; use [`new_v2`] with an explicit identifier instead.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{new_v2_local, Domain};
///
/// let uuid = new_v2_local(Domain::Person).unwrap();
/// assert_eq!(uuid.version(), 2);
/// assert!(new_v2_local(Domain::Org).is_none());
/// ```
#[cfg(unix)]
#[cfg_attr(docsrs, doc(cfg(unix)))]
pub fn new_v2_local(domain: Domain) -> Option<Uuid> {
    let id = domain.local_id()?;
    Some(new_v2(domain, id))
}

mod inner {
    use crate::node::{resolve_node_id, HardwareAddress};
    use crate::V1Generator;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V1Generator,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let generator = V1Generator::new(resolve_node_id(HardwareAddress));
            log::debug!(
                "initialized global generator with clock sequence {}",
                generator.state().clock_sequence()
            );
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V1Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V1Generator {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}


#[cfg(test)]
mod tests_v2 {
    use super::{new_v1, new_v2};
    use crate::{Domain, Variant};

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for domain in [Domain::Person, Domain::Group, Domain::Org] {
            let e = new_v2(domain, 501);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 2);
            assert_eq!(e.as_bytes()[..4], 501u32.to_be_bytes());
            assert_eq!(e.as_bytes()[9], domain.code());
            assert_eq!(e.to_string().parse(), Ok(e));
        }
    }

    /// Stores process UID and GID for local identifiers
    #[cfg(unix)]
    #[test]
    fn stores_process_uid_and_gid_for_local_identifiers() {
        use super::new_v2_local;
        use nix::unistd::{getgid, getuid};

        let e = new_v2_local(Domain::Person).unwrap();
        assert_eq!(e.as_bytes()[..4], getuid().as_raw().to_be_bytes());
        assert_eq!(e.as_bytes()[9], Domain::Person.code());
        assert_eq!(e.version(), 2);
        assert_eq!(e.to_string().parse(), Ok(e));

        let e = new_v2_local(Domain::Group).unwrap();
        assert_eq!(e.as_bytes()[..4], getgid().as_raw().to_be_bytes());
        assert_eq!(e.as_bytes()[9], Domain::Group.code());

        assert_eq!(new_v2_local(Domain::Org), None);
    }

    /// Shares node identifier with UUIDv1
    #[test]
    fn shares_node_identifier_with_uuidv1() {
        let a = new_v1();
        let b = new_v2(Domain::Group, 20);
        assert_eq!(a.as_bytes()[10..], b.as_bytes()[10..]);
    }
}
