use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Query,
    Response,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Query => write!(f, "query"),
            PayloadKind::Response => write!(f, "response"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SelectedPayload<'a> {
    pub kind: PayloadKind,
    pub bytes: &'a [u8],
}

impl SelectedPayload<'_> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
