/// Percent-encode a query value the way `encodeURIComponent` would:
/// unreserved characters pass through, everything else becomes `%XX`.
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build the outbound WhatsApp deep link with the canned greeting, optionally
/// naming the listing the visitor was looking at.
pub fn whatsapp_link(msisdn: &str, greeting: &str, listing_title: Option<&str>) -> String {
    let text = match listing_title {
        Some(title) => format!("{} ({})", greeting, title),
        None => greeting.to_string(),
    };
    format!("https://wa.me/{}?text={}", msisdn, percent_encode(&text))
}
