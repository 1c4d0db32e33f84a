//! Node identifier sources for time-based UUIDs.

/// A trait that supplies the 48-bit node identifier of a time-based generator.
///
/// A source may fail to produce an identifier; [`resolve_node_id`] then falls back to a random
/// one.
pub trait NodeSource {
    /// Returns a node identifier, or `None` if this source has none to offer.
    fn node_id(&mut self) -> Option<[u8; 6]>;
}

/// A [`NodeSource`] that always returns the wrapped identifier.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct FixedNode(/** The identifier returned. */ pub [u8; 6]);

impl NodeSource for FixedNode {
    fn node_id(&mut self) -> Option<[u8; 6]> {
        Some(self.0)
    }
}

/// A [`NodeSource`] that returns the address of the first hardware network interface found.
#[cfg(feature = "mac")]
#[cfg_attr(docsrs, doc(cfg(feature = "mac")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct HardwareAddress;

#[cfg(feature = "mac")]
impl NodeSource for HardwareAddress {
    fn node_id(&mut self) -> Option<[u8; 6]> {
        match mac_address::get_mac_address() {
            Ok(Some(addr)) => Some(addr.bytes()),
            Ok(None) => None,
            Err(err) => {
                log::debug!("could not look up hardware address: {}", err);
                None
            }
        }
    }
}

/// Returns a random node identifier with the multicast bit set, as RFC 4122 Section 4.5
/// recommends, so that it cannot collide with a real IEEE 802 address.
pub fn random_node_id() -> [u8; 6] {
    let mut node_id: [u8; 6] = rand::random();
    node_id[0] |= 0x01;
    node_id
}

/// Returns the identifier `source` supplies, or a [`random_node_id`] if it supplies none.
pub fn resolve_node_id<S: NodeSource>(mut source: S) -> [u8; 6] {
    source.node_id().unwrap_or_else(|| {
        log::debug!("no node identifier available; using a random one");
        random_node_id()
    })
}

#[cfg(test)]
mod tests {
    use super::{random_node_id, resolve_node_id, FixedNode, NodeSource};

    struct NoNode;

    impl NodeSource for NoNode {
        fn node_id(&mut self) -> Option<[u8; 6]> {
            None
        }
    }

    /// Prefers the identifier the source supplies
    #[test]
    fn prefers_the_identifier_the_source_supplies() {
        let node_id = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
        assert_eq!(resolve_node_id(FixedNode(node_id)), node_id);
    }

    /// Falls back to random identifier with multicast bit
    #[test]
    fn falls_back_to_random_identifier_with_multicast_bit() {
        use std::collections::HashSet;
        let mut s = HashSet::new();
        for _ in 0..1_000 {
            let node_id = resolve_node_id(NoNode);
            assert_eq!(node_id[0] & 0x01, 0x01);
            s.insert(node_id);
        }
        assert!(s.len() > 990);
        assert_eq!(random_node_id()[0] & 0x01, 0x01);
    }
}
