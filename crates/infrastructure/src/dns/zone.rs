use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::BinDecodable;

/// Renders a dnstap `query_zone` (a wire-format domain name) in presentation
/// form. Bytes that do not parse as a name are kept as lossy UTF-8.
pub fn zone_to_text(zone: &[u8]) -> String {
    if zone.is_empty() {
        return String::new();
    }

    match Name::from_bytes(zone) {
        Ok(name) => name.to_ascii(),
        Err(_) => String::from_utf8_lossy(zone).into_owned(),
    }
}
