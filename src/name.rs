//! Name-based UUID (versions 3 and 5) functionality

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::Uuid;

/// The digest a name-based UUID is derived from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing UUIDv3.
    Md5,
    /// SHA-1 truncated to 128 bits, producing UUIDv5.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the version number stamped on UUIDs derived with this algorithm.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }

    /// Derives a UUID from the digest of `namespace` followed by `name`.
    pub fn derive(self, namespace: &Uuid, name: &[u8]) -> Uuid {
        let mut bytes = [0u8; 16];
        match self {
            Self::Md5 => bytes.copy_from_slice(digest::<Md5>(namespace, name).as_ref()),
            Self::Sha1 => bytes.copy_from_slice(&digest::<Sha1>(namespace, name).as_ref()[..16]),
        }

        let mut uuid = Uuid::from(bytes);
        uuid.set_version(self.version());
        uuid.set_variant();
        uuid
    }
}

fn digest<D: Digest>(namespace: &Uuid, name: &[u8]) -> impl AsRef<[u8]> {
    D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize()
}

/// Generates a UUIDv3 object from the MD5 digest of `namespace` and `name`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{new_v3, NAMESPACE_DNS};
///
/// let uuid = new_v3(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    HashAlgorithm::Md5.derive(namespace, name.as_ref())
}

/// Generates a UUIDv5 object from the SHA-1 digest of `namespace` and `name`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc4122::{new_v5, NAMESPACE_DNS};
///
/// let uuid = new_v5(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    HashAlgorithm::Sha1.derive(namespace, name.as_ref())
}
