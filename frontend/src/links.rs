//! Outbound link construction for the contact surfaces.

use urlencoding::encode;

pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone)
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Strips everything but digits, so "+254 748 699 460" and "254748699460"
/// address the same chat.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn whatsapp_href(number: &str) -> String {
    format!("https://wa.me/{}", normalize_phone(number))
}

pub fn map_embed_url(address: &str) -> String {
    format!("https://www.google.com/maps?q={}&output=embed", encode(address))
}

pub fn directions_url(address: &str) -> String {
    format!("https://maps.google.com/?q={}", encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_embed_is_percent_encoded() {
        assert_eq!(
            map_embed_url("Riverside Drive, Nairobi"),
            "https://www.google.com/maps?q=Riverside%20Drive%2C%20Nairobi&output=embed"
        );
        assert_eq!(
            directions_url("Riverside Drive, Nairobi"),
            "https://maps.google.com/?q=Riverside%20Drive%2C%20Nairobi"
        );
    }

    #[test]
    fn whatsapp_deep_link() {
        assert_eq!(whatsapp_href("254748699460"), "https://wa.me/254748699460");
        assert_eq!(whatsapp_href("+254 748 699 460"), "https://wa.me/254748699460");
    }

    #[test]
    fn tel_and_mail() {
        assert_eq!(tel_href("+254 748 699 460"), "tel:+254 748 699 460");
        assert_eq!(mailto_href("hello@tech24.co.ke"), "mailto:hello@tech24.co.ke");
    }
}
