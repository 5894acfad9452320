//! WhatsApp greeting links for birthday reminders

use reqwest::Url;
use shared::models::Member;

pub const DEFAULT_GREETING: &str = "Feliz aniversário! Que seu dia seja repleto de alegria e bênçãos!";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// `https://wa.me/{digits}?text={message}`
///
/// Everything but the digits of `phone` is dropped. Returns `None` when no
/// digit is left.
pub fn whatsapp_link(phone: &str, message: &str) -> Option<Url> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let mut url = Url::parse(WHATSAPP_BASE).ok()?.join(&digits).ok()?;
    url.query_pairs_mut().append_pair("text", message);
    Some(url)
}

/// Greeting link for a member, with the default message
pub fn greeting_link(member: &Member) -> Option<Url> {
    whatsapp_link(&member.phone, DEFAULT_GREETING)
}
