use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SocketFamily {
    #[default]
    Inet,
    Inet6,
}

impl SocketFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocketFamily::Inet => "INET",
            SocketFamily::Inet6 => "INET6",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SocketFamily::Inet),
            2 => Some(SocketFamily::Inet6),
            _ => None,
        }
    }
}

impl fmt::Display for SocketFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocketFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INET" => Ok(SocketFamily::Inet),
            "INET6" => Ok(SocketFamily::Inet6),
            _ => Err(format!("Unknown socket family: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SocketProtocol {
    #[default]
    Udp,
    Tcp,
    Dot,
    Doh,
    DnsCryptUdp,
    DnsCryptTcp,
    Doq,
}

impl SocketProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocketProtocol::Udp => "UDP",
            SocketProtocol::Tcp => "TCP",
            SocketProtocol::Dot => "DOT",
            SocketProtocol::Doh => "DOH",
            SocketProtocol::DnsCryptUdp => "DNSCryptUDP",
            SocketProtocol::DnsCryptTcp => "DNSCryptTCP",
            SocketProtocol::Doq => "DOQ",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SocketProtocol::Udp),
            2 => Some(SocketProtocol::Tcp),
            3 => Some(SocketProtocol::Dot),
            4 => Some(SocketProtocol::Doh),
            5 => Some(SocketProtocol::DnsCryptUdp),
            6 => Some(SocketProtocol::DnsCryptTcp),
            7 => Some(SocketProtocol::Doq),
            _ => None,
        }
    }
}

impl fmt::Display for SocketProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocketProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UDP" => Ok(SocketProtocol::Udp),
            "TCP" => Ok(SocketProtocol::Tcp),
            "DOT" => Ok(SocketProtocol::Dot),
            "DOH" => Ok(SocketProtocol::Doh),
            "DNSCRYPTUDP" => Ok(SocketProtocol::DnsCryptUdp),
            "DNSCRYPTTCP" => Ok(SocketProtocol::DnsCryptTcp),
            "DOQ" => Ok(SocketProtocol::Doq),
            _ => Err(format!("Unknown socket protocol: {}", s)),
        }
    }
}
