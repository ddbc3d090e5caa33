use crate::models::Restaurant;

/// The fixed in-memory restaurant catalog
///
/// Five curated entries around Gangnam. Each call returns a fresh owned list so
/// callers can annotate copies (route distances) without touching the source.
pub fn all_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1".to_string(),
            name: "Cafe Dog Run".to_string(),
            category: "brunch cafe".to_string(),
            rating: 4.7,
            address: "123-45 Sinsa-dong, Gangnam-gu, Seoul".to_string(),
            phone: "02-1234-5678".to_string(),
            hours: "09:00-22:00 (brunch until 15:00)".to_string(),
            latitude: 37.5172,
            longitude: 127.0473,
            images: vec![
                "https://placehold.co/600x400".to_string(),
                "https://placehold.co/600x400".to_string(),
            ],
            features: vec![
                "pet-friendly".to_string(),
                "terrace".to_string(),
                "valet-parking".to_string(),
                "reservations".to_string(),
            ],
            summary: "Dog-friendly brunch spot known for eggs benedict and \
                      handmade pancakes, with a fenced pet area on the terrace."
                .to_string(),
            review_count: 342,
            price_range: Some("15,000-25,000 KRW".to_string()),
            distance: None,
        },
        Restaurant {
            id: "2".to_string(),
            name: "Pasta Amore".to_string(),
            category: "Italian restaurant".to_string(),
            rating: 4.5,
            address: "456-78 Cheongdam-dong, Gangnam-gu, Seoul".to_string(),
            phone: "02-2345-6789".to_string(),
            hours: "11:30-22:00 (break 15:00-17:00)".to_string(),
            latitude: 37.5244,
            longitude: 127.0479,
            images: vec![
                "https://placehold.co/600x400".to_string(),
                "https://placehold.co/600x400".to_string(),
            ],
            features: vec![
                "parking".to_string(),
                "group-seating".to_string(),
                "kids-zone".to_string(),
                "wifi".to_string(),
            ],
            summary: "Handmade pasta and classic Italian dishes; the truffle \
                      cream pasta and seafood risotto are the signatures. Good \
                      atmosphere for dates and gatherings."
                .to_string(),
            review_count: 528,
            price_range: Some("20,000-35,000 KRW".to_string()),
            distance: None,
        },
        Restaurant {
            id: "3".to_string(),
            name: "Hanokgol Seolleongtang".to_string(),
            category: "Korean".to_string(),
            rating: 4.6,
            address: "789-12 Yeoksam-dong, Gangnam-gu, Seoul".to_string(),
            phone: "02-3456-7890".to_string(),
            hours: "00:00-24:00 (open every day)".to_string(),
            latitude: 37.5009,
            longitude: 127.0374,
            images: vec![
                "https://placehold.co/600x400".to_string(),
                "https://placehold.co/600x400".to_string(),
            ],
            features: vec![
                "24-hour".to_string(),
                "takeout".to_string(),
                "delivery".to_string(),
                "parking".to_string(),
            ],
            summary: "Forty-year-old ox bone soup house with a rich broth, a \
                      favorite on rainy days. Open around the clock."
                .to_string(),
            review_count: 1245,
            price_range: Some("9,000-12,000 KRW".to_string()),
            distance: None,
        },
        Restaurant {
            id: "4".to_string(),
            name: "Sushi Omakase".to_string(),
            category: "Japanese/sushi".to_string(),
            rating: 4.8,
            address: "234-56 Nonhyeon-dong, Gangnam-gu, Seoul".to_string(),
            phone: "02-4567-8901".to_string(),
            hours: "12:00-15:00, 18:00-22:00".to_string(),
            latitude: 37.5106,
            longitude: 127.0227,
            images: vec![
                "https://placehold.co/600x400".to_string(),
                "https://placehold.co/600x400".to_string(),
            ],
            features: vec![
                "reservation-required".to_string(),
                "counter-seating".to_string(),
                "parking".to_string(),
                "private-room".to_string(),
            ],
            summary: "Omakase built on seasonal seafood, fifteen courses served \
                      with the chef's commentary. A place for special occasions."
                .to_string(),
            review_count: 189,
            price_range: Some("100,000-150,000 KRW".to_string()),
            distance: None,
        },
        Restaurant {
            id: "5".to_string(),
            name: "Bakery and Cafe".to_string(),
            category: "bakery/cafe".to_string(),
            rating: 4.4,
            address: "567-89 Samseong-dong, Gangnam-gu, Seoul".to_string(),
            phone: "02-5678-9012".to_string(),
            hours: "08:00-22:00".to_string(),
            latitude: 37.5140,
            longitude: 127.0635,
            images: vec![
                "https://placehold.co/600x400".to_string(),
                "https://placehold.co/600x400".to_string(),
            ],
            features: vec![
                "takeout".to_string(),
                "wifi".to_string(),
                "no-kids-zone".to_string(),
                "high-chairs".to_string(),
            ],
            summary: "Bread and pastries baked fresh every morning; croissants \
                      and baguettes are the signatures. Quiet enough to work or \
                      read in."
                .to_string(),
            review_count: 678,
            price_range: Some("5,000-15,000 KRW".to_string()),
            distance: None,
        },
    ]
}

/// Look up a single restaurant by id
pub fn restaurant_by_id(id: &str) -> Option<Restaurant> {
    all_restaurants().into_iter().find(|r| r.id == id)
}

/// Restaurants whose category contains the given fragment
pub fn restaurants_by_category(category: &str) -> Vec<Restaurant> {
    all_restaurants()
        .into_iter()
        .filter(|r| r.category.contains(category))
        .collect()
}

/// Restaurants carrying the given feature tag
pub fn restaurants_by_feature(feature: &str) -> Vec<Restaurant> {
    all_restaurants()
        .into_iter()
        .filter(|r| r.has_feature(feature))
        .collect()
}

/// Restaurants at or above the given rating
pub fn restaurants_by_rating(min_rating: f64) -> Vec<Restaurant> {
    all_restaurants()
        .into_iter()
        .filter(|r| r.rating >= min_rating)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_entries() {
        assert_eq!(all_restaurants().len(), 5);
    }

    #[test]
    fn test_lookup_by_id() {
        let r = restaurant_by_id("4").unwrap();
        assert_eq!(r.name, "Sushi Omakase");
        assert!(restaurant_by_id("99").is_none());
    }

    #[test]
    fn test_by_feature() {
        let pet_friendly = restaurants_by_feature("pet-friendly");
        assert_eq!(pet_friendly.len(), 1);
        assert_eq!(pet_friendly[0].id, "1");
    }

    #[test]
    fn test_by_rating() {
        let top = restaurants_by_rating(4.5);
        assert_eq!(top.len(), 4);
        assert!(top.iter().all(|r| r.rating >= 4.5));
    }
}
