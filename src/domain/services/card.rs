#[cfg(test)]
#[path = "card_test.rs"]
mod tests;

use crate::domain::models::Listing;

fn group_thousands(value: f64) -> String {
    if value.fract() != 0.0 {
        return value.to_string();
    }

    let digits = (value.abs().trunc() as i64).to_string();
    let mut grouped = String::new();
    for (idx, c) in digits.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut out = grouped.chars().rev().collect::<String>();
    if value < 0.0 {
        out.insert(0, '-');
    }

    return out;
}

/// Formats one listing as a text card: address, locality, bed/bath/area
/// summary, price, and the listing URL.
pub fn render_card(listing: &Listing) -> String {
    let address = listing
        .street_address
        .as_deref()
        .unwrap_or("Unknown address");
    let locality = format!(
        "{}, {} {}",
        listing.city.as_deref().unwrap_or_default(),
        listing.state.as_deref().unwrap_or_default(),
        listing.zipcode.as_deref().unwrap_or_default()
    );
    let details = format!(
        "{} Bed / {} Bath / {} ft²",
        group_thousands(listing.bedrooms.unwrap_or_default()),
        group_thousands(listing.bathrooms.unwrap_or_default()),
        group_thousands(listing.living_area.unwrap_or_default())
    );
    let price = format!("${}", group_thousands(listing.price.unwrap_or_default()));

    let mut lines = vec![
        format!("┌─ {address}"),
        format!("│  {}", locality.trim()),
        format!("│  {details}"),
        format!("│  {price}"),
    ];
    match &listing.property_url {
        Some(url) => lines.push(format!("└─ {url}")),
        None => lines.push("└─".to_string()),
    }

    return lines.join("\n");
}

/// One-line summary for the map view, the terminal stand-in for a hover
/// marker: price and overview pinned to coordinates.
pub fn render_marker(listing: &Listing) -> String {
    let coords = match (listing.latitude, listing.longitude) {
        (Some(lat), Some(lng)) => format!("({lat:.4}, {lng:.4})"),
        _ => "(no coordinates)".to_string(),
    };

    return format!(
        "${} · {} bd / {} ba · {}",
        group_thousands(listing.price.unwrap_or_default()),
        group_thousands(listing.bedrooms.unwrap_or_default()),
        group_thousands(listing.bathrooms.unwrap_or_default()),
        coords
    );
}
