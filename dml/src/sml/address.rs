use std::fmt;
use std::io;
use std::io::Write;
use std::net::Ipv4Addr;

use crate::consensus::{encode, Decodable, Encodable};

/// The network endpoint a masternode serves from.
///
/// On the wire the address occupies sixteen bytes with an IPv4 address in the
/// last four, followed by the port with its bytes swapped; both quirks are
/// inherited from the legacy encoding.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct ServiceAddress {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

impl Encodable for ServiceAddress {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, io::Error> {
        let mut ip_address = [0u8; 16];
        ip_address[12..16].copy_from_slice(&self.ip.octets());

        let mut len = 0;
        len += ip_address.consensus_encode(writer)?;
        len += self.port.swap_bytes().consensus_encode(writer)?;
        Ok(len)
    }
}

impl Decodable for ServiceAddress {
    fn consensus_decode<R: io::Read + ?Sized>(reader: &mut R) -> Result<Self, encode::Error> {
        let ip_address: [u8; 16] = Decodable::consensus_decode(reader)?;
        let port: u16 = Decodable::consensus_decode(reader)?;
        let port = port.swap_bytes();
        let ipv4_octets: [u8; 4] = ip_address[12..16]
            .try_into()
            .expect("a four byte slice of a sixteen byte array");
        let ip = Ipv4Addr::from(ipv4_octets);
        Ok(ServiceAddress { ip, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::{deserialize, serialize};

    #[test]
    fn round_trip() {
        let address = ServiceAddress { ip: Ipv4Addr::new(203, 0, 113, 7), port: 9999 };
        let encoded = serialize(&address);
        assert_eq!(encoded.len(), 18);
        // IPv4 occupies the tail of the sixteen address bytes.
        assert_eq!(&encoded[12..16], &[203, 0, 113, 7]);
        // The port is byte-swapped on the wire.
        assert_eq!(&encoded[16..18], &9999u16.to_be_bytes());
        assert_eq!(deserialize::<ServiceAddress>(&encoded).unwrap(), address);
    }
}
