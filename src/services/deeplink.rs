use crate::core::format::format_phone_number;
use crate::models::{LinkBundle, Restaurant, UserLocation};

/// Native map-app route link: `kakaomap://route?sp=<lat,lng>&ep=<lat,lng>&by=CAR`
pub fn app_route_url(restaurant: &Restaurant, origin: UserLocation) -> String {
    format!(
        "kakaomap://route?sp={},{}&ep={},{}&by=CAR",
        origin.latitude, origin.longitude, restaurant.latitude, restaurant.longitude
    )
}

/// Web fallback when the native app is not installed
pub fn web_route_url(restaurant: &Restaurant, origin: Option<UserLocation>) -> String {
    let name = urlencoding::encode(&restaurant.name);
    match origin {
        Some(from) => format!(
            "https://map.kakao.com/link/from/my-location,{},{}/to/{},{},{}",
            from.latitude, from.longitude, name, restaurant.latitude, restaurant.longitude
        ),
        None => format!(
            "https://map.kakao.com/link/to/{},{},{}",
            name, restaurant.latitude, restaurant.longitude
        ),
    }
}

/// Map link to the place itself, used inside share text
pub fn place_url(restaurant: &Restaurant) -> String {
    format!(
        "https://map.kakao.com/link/map/{},{},{}",
        urlencoding::encode(&restaurant.name),
        restaurant.latitude,
        restaurant.longitude
    )
}

/// Dialer link; strips everything except digits
pub fn phone_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("tel:{}", digits)
}

/// Templated share sheet text
pub fn share_text(restaurant: &Restaurant) -> String {
    format!(
        "Mat.zip pick!\n\n{} ({})\n\u{2b50} {}\n\u{1f4cd} {}\n\u{1f4de} {}\n\n{}",
        restaurant.name,
        restaurant.category,
        restaurant.rating,
        restaurant.address,
        format_phone_number(&restaurant.phone),
        place_url(restaurant)
    )
}

/// Everything a client needs to navigate, call, or share
pub fn link_bundle(restaurant: &Restaurant, origin: Option<UserLocation>) -> LinkBundle {
    let app_origin = origin.unwrap_or(crate::models::DEFAULT_LOCATION);
    LinkBundle {
        app_url: app_route_url(restaurant, app_origin),
        web_url: web_route_url(restaurant, origin),
        place_url: place_url(restaurant),
        phone_url: phone_url(&restaurant.phone),
        share_text: share_text(restaurant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    #[test]
    fn test_app_route_url_shape() {
        let restaurant = catalog::restaurant_by_id("1").unwrap();
        let origin = UserLocation {
            latitude: 37.4979,
            longitude: 127.0276,
        };
        let url = app_route_url(&restaurant, origin);
        assert_eq!(
            url,
            "kakaomap://route?sp=37.4979,127.0276&ep=37.5172,127.0473&by=CAR"
        );
    }

    #[test]
    fn test_web_url_encodes_name() {
        let restaurant = catalog::restaurant_by_id("5").unwrap();
        let url = web_route_url(&restaurant, None);
        assert!(url.starts_with("https://map.kakao.com/link/to/"));
        // Spaces in "Bakery and Cafe" must be percent-encoded
        assert!(url.contains("Bakery%20and%20Cafe"));
    }

    #[test]
    fn test_phone_url_strips_non_digits() {
        assert_eq!(phone_url("02-1234-5678"), "tel:0212345678");
        assert_eq!(phone_url("+82 (2) 1234 5678"), "tel:82212345678");
    }

    #[test]
    fn test_share_text_contains_key_fields() {
        let restaurant = catalog::restaurant_by_id("4").unwrap();
        let text = share_text(&restaurant);
        assert!(text.contains("Sushi Omakase"));
        assert!(text.contains("4.8"));
        assert!(text.contains("02-4567-8901"));
        assert!(text.contains("https://map.kakao.com/link/map/"));
    }

    #[test]
    fn test_bundle_uses_default_origin_when_missing() {
        let restaurant = catalog::restaurant_by_id("2").unwrap();
        let bundle = link_bundle(&restaurant, None);
        assert!(bundle.app_url.contains("sp=37.4979,127.0276"));
        assert!(bundle.web_url.contains("/link/to/"));
    }
}
