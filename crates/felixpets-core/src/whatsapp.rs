//! WhatsApp Deep Link

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `https://wa.me/{digits}?text={message}`
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        utf8_percent_encode(message, COMPONENT)
    )
}
