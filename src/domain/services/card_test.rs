use anyhow::Result;
use test_utils::listings_fixture;

use super::render_card;
use super::render_marker;
use crate::domain::models::Listing;

#[test]
fn it_renders_a_card() -> Result<()> {
    let listings: Vec<Listing> = serde_json::from_str(listings_fixture())?;
    let card = render_card(&listings[0]);

    let expected = [
        "┌─ 9564 Cotton Rd",
        "│  Florence, AZ 85132",
        "│  3 Bed / 2 Bath / 1,850 ft²",
        "│  $349,000",
        "└─ https://www.zillow.com/homedetails/9564-cotton-rd",
    ]
    .join("\n");

    assert_eq!(card, expected);
    return Ok(());
}

#[test]
fn it_renders_missing_fields_as_zeroes() {
    let card = render_card(&Listing::default());

    assert!(card.contains("Unknown address"));
    assert!(card.contains("0 Bed / 0 Bath / 0 ft²"));
    assert!(card.contains("$0"));
}

#[test]
fn it_renders_a_map_marker() -> Result<()> {
    let listings: Vec<Listing> = serde_json::from_str(listings_fixture())?;
    let marker = render_marker(&listings[0]);

    assert_eq!(marker, "$349,000 · 3 bd / 2 ba · (33.0974, -111.4633)");
    return Ok(());
}

#[test]
fn it_keeps_fractional_bathrooms() {
    let listing = Listing {
        bathrooms: Some(2.5),
        ..Listing::default()
    };

    assert!(render_card(&listing).contains("2.5 Bath"));
}
