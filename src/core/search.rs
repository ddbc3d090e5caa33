use crate::models::{catalog, Restaurant};

/// How many entries the rating-ranked fallback returns
const DEFAULT_RESULT_COUNT: usize = 3;

/// Match a free-text craving against the catalog
///
/// Rules are evaluated in priority order with case-insensitive substring
/// tests; the first matching rule wins. With no match, the top three
/// restaurants by rating are returned.
pub fn search_restaurants(query: &str) -> Vec<Restaurant> {
    let q = query.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| q.contains(k));

    if contains_any(&["pet", "dog", "puppy"]) {
        return catalog::restaurants_by_feature("pet-friendly");
    }

    if q.contains("brunch") {
        return catalog::restaurants_by_category("brunch");
    }

    if contains_any(&["rain", "soup", "warm"]) {
        return catalog::restaurants_by_category("Korean");
    }

    if contains_any(&["date", "mood", "atmosphere"]) {
        return catalog::restaurants_by_rating(4.5);
    }

    if contains_any(&["late-night", "late night", "24-hour", "24 hour", "24h"]) {
        return catalog::restaurants_by_feature("24-hour");
    }

    if contains_any(&["pasta", "italian"]) {
        return catalog::restaurants_by_category("Italian");
    }

    if contains_any(&["sushi", "japanese"]) {
        return catalog::restaurants_by_category("Japanese");
    }

    if q.contains("korean") {
        return catalog::restaurants_by_category("Korean");
    }

    if q.contains("chinese") {
        return catalog::restaurants_by_category("Chinese");
    }

    if q.contains("western") {
        return catalog::restaurants_by_category("Western");
    }

    if q.contains("cafe") {
        return catalog::restaurants_by_category("cafe");
    }

    top_rated(DEFAULT_RESULT_COUNT)
}

/// Highest-rated catalog entries, descending
fn top_rated(count: usize) -> Vec<Restaurant> {
    let mut all = catalog::all_restaurants();
    all.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    all.truncate(count);
    all
}

/// Templated confirmation sentence for the assistant reply
pub fn generate_reply(query: &str, restaurants: &[Restaurant]) -> String {
    if restaurants.is_empty() {
        return "Sorry, I couldn't find any places matching that. Want to try \
                different keywords?"
            .to_string();
    }

    format!(
        "I found {} great spot{} for \"{}\"! Each one has its own character, \
         so take a closer look.",
        restaurants.len(),
        if restaurants.len() == 1 { "" } else { "s" },
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_rule_wins_over_brunch() {
        // Both a pet keyword and a brunch keyword: pet rule is evaluated first
        let results = search_restaurants("pet friendly brunch");
        assert_eq!(results.len(), 1);
        assert!(results[0].has_feature("pet-friendly"));
    }

    #[test]
    fn test_brunch_rule() {
        let results = search_restaurants("somewhere for BRUNCH");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.category.contains("brunch")));
    }

    #[test]
    fn test_rainy_day_maps_to_korean() {
        let results = search_restaurants("rainy day soup");
        assert!(results.iter().all(|r| r.category.contains("Korean")));
    }

    #[test]
    fn test_date_rule_filters_by_rating() {
        let results = search_restaurants("good date spot");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.rating >= 4.5));
    }

    #[test]
    fn test_late_night_rule() {
        let results = search_restaurants("open late night");
        assert_eq!(results.len(), 1);
        assert!(results[0].has_feature("24-hour"));
    }

    #[test]
    fn test_sushi_rule() {
        let results = search_restaurants("sushi please");
        assert!(results.iter().all(|r| r.category.contains("Japanese")));
    }

    #[test]
    fn test_default_returns_top_three_by_rating() {
        let results = search_restaurants("best food");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].rating, 4.8);
        assert_eq!(results[1].rating, 4.7);
        assert_eq!(results[2].rating, 4.6);
    }

    #[test]
    fn test_no_match_category_is_empty() {
        let results = search_restaurants("chinese food");
        assert!(results.is_empty());
    }

    #[test]
    fn test_reply_embeds_query_and_count() {
        let restaurants = search_restaurants("pasta");
        let reply = generate_reply("pasta", &restaurants);
        assert!(reply.contains("pasta"));
        assert!(reply.contains('1'));
    }

    #[test]
    fn test_reply_for_empty_results() {
        let reply = generate_reply("chinese", &[]);
        assert!(reply.contains("couldn't find"));
    }
}
