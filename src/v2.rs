//! DCE Security (UUIDv2) support.
//!
//! A UUIDv2 starts out as a UUIDv1 and then has its first four octets replaced by a local
//! identifier (e.g. a POSIX UID or GID) and octet 9, the low byte of the clock sequence, replaced
//! by the [`Domain`] the identifier belongs to. Only the upper six bits of the clock sequence
//! therefore survive.

use crate::clock::TimeSource;
use crate::{Uuid, V1Generator};

/// The DCE domain a UUIDv2 local identifier belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Domain {
    /// A POSIX UID (code 0).
    Person,
    /// A POSIX GID (code 1).
    Group,
    /// An organization-defined identifier (code 2).
    Org,
}

impl Domain {
    /// Returns the code stored in octet 9.
    pub const fn code(self) -> u8 {
        match self {
            Self::Person => 0,
            Self::Group => 1,
            Self::Org => 2,
        }
    }

    /// Returns the real UID or GID of the calling process for `Person` or `Group`, or `None`
    /// for `Org`, which has no process-local identifier.
    #[cfg(unix)]
    #[cfg_attr(docsrs, doc(cfg(unix)))]
    pub fn local_id(self) -> Option<u32> {
        use nix::unistd::{getgid, getuid};
        match self {
            Self::Person => Some(getuid().as_raw()),
            Self::Group => Some(getgid().as_raw()),
            Self::Org => None,
        }
    }
}

impl<T: TimeSource> V1Generator<T> {
    /// Generates a new UUIDv2 object for the local identifier `id` in `domain`.
    pub fn generate_v2(&mut self, domain: Domain, id: u32) -> Uuid {
        let mut bytes = self.generate().into_bytes();
        bytes[0..4].copy_from_slice(&id.to_be_bytes());
        bytes[9] = domain.code();

        let mut uuid = Uuid::from(bytes);
        uuid.set_version(2);
        uuid
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;
    use crate::clock::ClockState;
    use crate::v1::tests::PinnedTime;
    use crate::{V1Generator, Variant};

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        let mut g = V1Generator::new([0x01; 6]);
        for domain in [Domain::Person, Domain::Group, Domain::Org] {
            let e = g.generate_v2(domain, 1000);
            assert_eq!(e.version(), 2);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.to_string().parse(), Ok(e));
        }
    }

    /// Stores identifier and domain code in place of time low and clock sequence low
    #[test]
    fn stores_identifier_and_domain_code_in_place_of_time_low_and_clock_sequence_low() {
        let ts = 0x01e0_1234_5678_9abcu64;
        let node_id = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
        let mut g = V1Generator::with_state(PinnedTime(ts), ClockState::new(0x2a55, node_id));

        let e = g.generate_v2(Domain::Group, 0xdead_beef);
        assert_eq!(e.to_string(), "deadbeef-1234-21e0-aa01-00c04fd430c8");

        let e = g.generate_v2(Domain::Org, 42);
        assert_eq!(e.to_string(), "0000002a-1234-21e0-aa02-00c04fd430c8");
        assert_eq!(g.state().clock_sequence(), 0x2a56);
    }

    /// Maps domains to DCE codes
    #[test]
    fn maps_domains_to_dce_codes() {
        assert_eq!(Domain::Person.code(), 0);
        assert_eq!(Domain::Group.code(), 1);
        assert_eq!(Domain::Org.code(), 2);
    }

    /// Looks up process identifiers for person and group domains only
    #[cfg(unix)]
    #[test]
    fn looks_up_process_identifiers_for_person_and_group_domains_only() {
        use nix::unistd::{getgid, getuid};
        assert_eq!(Domain::Person.local_id(), Some(getuid().as_raw()));
        assert_eq!(Domain::Group.local_id(), Some(getgid().as_raw()));
        assert_eq!(Domain::Org.local_id(), None);
    }
}
