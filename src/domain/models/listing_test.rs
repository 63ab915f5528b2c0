use anyhow::Result;
use test_utils::listings_fixture;

use super::Listing;
use super::PLACEHOLDER_IMAGE_URL;

#[test]
fn it_deserializes_backend_results() -> Result<()> {
    let listings: Vec<Listing> = serde_json::from_str(listings_fixture())?;

    assert_eq!(listings.len(), 2);
    assert_eq!(
        listings[0].street_address.as_deref(),
        Some("9564 Cotton Rd")
    );
    assert_eq!(listings[0].bedrooms, Some(3.0));
    assert_eq!(listings[0].bathrooms, Some(2.0));
    assert_eq!(listings[0].price, Some(349000.0));
    assert_eq!(listings[1].price, None);

    return Ok(());
}

#[test]
fn it_builds_a_full_address() -> Result<()> {
    let listings: Vec<Listing> = serde_json::from_str(listings_fixture())?;
    assert_eq!(
        listings[0].full_address(),
        "9564 Cotton Rd Florence AZ 85132"
    );

    return Ok(());
}

#[test]
fn it_skips_missing_address_fields() {
    let listing = Listing {
        street_address: Some("456 Elm St".to_string()),
        state: Some("TX".to_string()),
        ..Listing::default()
    };

    // Outer whitespace is trimmed, interior gaps from missing fields remain.
    assert_eq!(listing.full_address(), "456 Elm St  TX");
}

#[test]
fn it_falls_back_to_a_placeholder_image() {
    let listing = Listing::default();
    assert_eq!(listing.image_url(), PLACEHOLDER_IMAGE_URL);
}
