//! Outbound purchase deep links.
//!
//! WhatsApp, Telegram, and `tel:` targets built from the static contact
//! configuration and the current product. These are navigation targets,
//! not API calls.

/// WhatsApp inquiry link for a product, optionally naming the selected
/// variant.
#[must_use]
pub fn whatsapp_product_url(number: &str, product_name: &str, variant_label: Option<&str>) -> String {
    let message = match variant_label {
        Some(label) => format!(
            "Hola, me interesa el producto: {product_name} ({label}). ¿Tienen disponibilidad?"
        ),
        None => format!("Hola, me interesa el producto: {product_name}. ¿Tienen disponibilidad?"),
    };
    format!(
        "https://wa.me/{}?text={}",
        strip_plus(number),
        urlencoding::encode(&message)
    )
}

/// Plain WhatsApp contact link for the site chrome.
#[must_use]
pub fn whatsapp_url(number: &str) -> String {
    format!("https://wa.me/{}", strip_plus(number))
}

/// Telegram contact link.
#[must_use]
pub fn telegram_url(handle: &str) -> String {
    format!("https://t.me/{}", handle.trim_start_matches('@'))
}

/// `tel:` link for the phone number.
#[must_use]
pub fn tel_url(phone: &str) -> String {
    format!("tel:{phone}")
}

fn strip_plus(number: &str) -> String {
    number.replace('+', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_strips_plus_and_encodes_message() {
        let url = whatsapp_product_url("+5355555555", "Lámpara de mesa", None);
        assert!(url.starts_with("https://wa.me/5355555555?text="));
        assert!(!url.contains('+'));
        assert!(url.contains("L%C3%A1mpara%20de%20mesa"));
    }

    #[test]
    fn whatsapp_message_includes_variant_label() {
        let url = whatsapp_product_url("+5355555555", "Silla", Some("Rojo / M"));
        assert!(url.contains(&*urlencoding::encode("Silla (Rojo / M)")));
    }

    #[test]
    fn telegram_accepts_handle_with_or_without_at() {
        assert_eq!(telegram_url("MaybelCuba"), "https://t.me/MaybelCuba");
        assert_eq!(telegram_url("@MaybelCuba"), "https://t.me/MaybelCuba");
    }

    #[test]
    fn tel_link_keeps_full_number() {
        assert_eq!(tel_url("+5375555555"), "tel:+5375555555");
    }
}
