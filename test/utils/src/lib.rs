pub fn listings_fixture() -> &'static str {
    return r#"[
  {
    "streetAddress": "9564 Cotton Rd",
    "city": "Florence",
    "state": "AZ",
    "zipcode": "85132",
    "bedrooms": 3,
    "bathrooms": 2,
    "livingArea": 1850,
    "price": 349000,
    "latitude": 33.09744,
    "longitude": -111.46328,
    "imgSrc": "https://photos.zillowstatic.com/fp/9564-cotton-rd.jpg",
    "property_url": "https://www.zillow.com/homedetails/9564-cotton-rd"
  },
  {
    "streetAddress": "456 Elm St",
    "city": "Dallas",
    "state": "TX",
    "zipcode": "75201",
    "bedrooms": 4,
    "bathrooms": 2.5,
    "livingArea": 2210,
    "price": null,
    "latitude": 32.78014,
    "longitude": -96.80045,
    "imgSrc": null,
    "property_url": "https://www.zillow.com/homedetails/456-elm-st"
  }
]"#
    .trim();
}
