/// Header flags of a decoded DNS message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderFlags {
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub authentic_data: bool,
    pub checking_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Fully qualified name in presentation form, trailing dot included.
    pub name: String,
    pub class: u16,
    pub record_type: u16,
}

/// Structured view of a DNS wire message, as produced by a wire decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDnsMessage {
    pub id: u16,
    pub flags: HeaderFlags,
    pub response_code: u16,
    pub questions: Vec<DnsQuestion>,
}

impl DecodedDnsMessage {
    pub fn first_question(&self) -> Option<&DnsQuestion> {
        self.questions.first()
    }
}
