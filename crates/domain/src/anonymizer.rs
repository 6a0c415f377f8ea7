use crate::errors::DomainError;
use ipnetwork::{Ipv4Network, Ipv6Network};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Netmasks used to strip the host part of query/response addresses.
///
/// Built once from prefix lengths and shared read-only between workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMasks {
    ipv4: Ipv4Addr,
    ipv6: Ipv6Addr,
}

impl AddressMasks {
    pub fn from_prefixes(ipv4_prefix: u8, ipv6_prefix: u8) -> Result<Self, DomainError> {
        let ipv4 = Ipv4Network::new(Ipv4Addr::UNSPECIFIED, ipv4_prefix)
            .map_err(|e| DomainError::InvalidNetworkMask(format!("IPv4 /{}: {}", ipv4_prefix, e)))?
            .mask();
        let ipv6 = Ipv6Network::new(Ipv6Addr::UNSPECIFIED, ipv6_prefix)
            .map_err(|e| DomainError::InvalidNetworkMask(format!("IPv6 /{}: {}", ipv6_prefix, e)))?
            .mask();

        Ok(Self { ipv4, ipv6 })
    }

    pub fn ipv4_mask(&self) -> Ipv4Addr {
        self.ipv4
    }

    pub fn ipv6_mask(&self) -> Ipv6Addr {
        self.ipv6
    }

    pub fn mask(&self, addr: IpAddr) -> IpAddr {
        match addr {
            IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(u32::from(v4) & u32::from(self.ipv4))),
            IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(u128::from(v6) & u128::from(self.ipv6))),
        }
    }

    /// Masks a raw dnstap address: 4 bytes are IPv4, 16 bytes are IPv6.
    /// Any other length is not an address and yields `None`.
    pub fn mask_bytes(&self, raw: &[u8]) -> Option<IpAddr> {
        let addr = match raw.len() {
            4 => {
                let octets: [u8; 4] = raw.try_into().ok()?;
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            16 => {
                let octets: [u8; 16] = raw.try_into().ok()?;
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            _ => return None,
        };
        Some(self.mask(addr))
    }

    pub fn anonymize(&self, raw: &[u8]) -> Option<String> {
        self.mask_bytes(raw).map(|addr| addr.to_string())
    }
}
