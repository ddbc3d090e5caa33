use crate::models::{Coordinate, Restaurant};
use crate::services::directions::DirectionsClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Sequential route enrichment with stale-result protection
///
/// A new search supersedes any enrichment still in flight. In-flight HTTP
/// calls are not cancelled; their completions are dropped at publish time by
/// comparing the generation captured at start against the current one.
pub struct RouteEnricher {
    client: Arc<DirectionsClient>,
    generation: Arc<AtomicU64>,
}

impl RouteEnricher {
    pub fn new(client: Arc<DirectionsClient>) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Generation of the most recently started enrichment
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate any enrichment currently in flight
    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Start enriching a result list with route distances
    ///
    /// The first (focused) restaurant's route is resolved before returning, so
    /// the caller can render it immediately; the rest resolve sequentially in
    /// the background. Every completion publishes a wholesale replacement of
    /// the list on the returned channel. Failed lookups leave the degraded
    /// "unavailable" annotation, never an error.
    pub async fn begin(
        &self,
        origin: Coordinate,
        mut restaurants: Vec<Restaurant>,
    ) -> (Vec<Restaurant>, watch::Receiver<Vec<Restaurant>>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if restaurants.is_empty() {
            let (_, rx) = watch::channel(Vec::new());
            return (restaurants, rx);
        }

        let first = self
            .client
            .route_or_fallback(origin, restaurants[0].coordinate())
            .await;
        restaurants[0].distance = Some(first);

        let (tx, rx) = watch::channel(restaurants.clone());

        let client = Arc::clone(&self.client);
        let counter = Arc::clone(&self.generation);
        let mut background = restaurants.clone();

        tokio::spawn(async move {
            for index in 1..background.len() {
                let destination = background[index].coordinate();
                let info = client.route_or_fallback(origin, destination).await;

                if counter.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "dropping stale route enrichment");
                    return;
                }

                background[index].distance = Some(info);
                if tx.send(background.clone()).is_err() {
                    return;
                }
            }
            tracing::debug!(
                generation,
                count = background.len(),
                "route enrichment complete"
            );
        });

        (restaurants, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    fn origin() -> Coordinate {
        Coordinate {
            lat: 37.4979,
            lng: 127.0276,
        }
    }

    fn route_body(meters: u32) -> String {
        format!(
            r#"{{"routes":[{{"summary":{{"distance":{},"duration":300}},"sections":[{{"roads":[{{"vertexes":[127.0,37.5,127.01,37.51]}}]}}]}}]}}"#,
            meters
        )
    }

    #[tokio::test]
    async fn test_first_restaurant_enriched_before_return() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/directions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(route_body(2500))
            .create_async()
            .await;

        let client = Arc::new(DirectionsClient::new(
            format!("{}/directions", server.url()),
            "test-key".to_string(),
        ));
        let enricher = RouteEnricher::new(client);

        let restaurants = catalog::all_restaurants();
        let (enriched, _rx) = enricher.begin(origin(), restaurants).await;

        let first = enriched[0].distance.as_ref().unwrap();
        assert_eq!(first.meters, 2500);
        // The rest are still pending at this point
        assert!(enriched[1].distance.is_none());
    }

    #[tokio::test]
    async fn test_background_updates_replace_list_wholesale() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/directions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(route_body(1000))
            .create_async()
            .await;

        let client = Arc::new(DirectionsClient::new(
            format!("{}/directions", server.url()),
            "test-key".to_string(),
        ));
        let enricher = RouteEnricher::new(client);

        let restaurants: Vec<_> = catalog::all_restaurants().into_iter().take(3).collect();
        let (_, mut rx) = enricher.begin(origin(), restaurants).await;

        // Watch coalesces intermediate publishes, so poll until the list is
        // fully annotated or the task finishes and drops the sender
        loop {
            if rx.borrow().iter().all(|r| r.distance.is_some()) {
                break;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
        let latest = rx.borrow().clone();

        assert_eq!(latest.len(), 3);
        assert!(latest.iter().all(|r| r.distance.is_some()));
    }

    #[tokio::test]
    async fn test_failed_lookups_degrade_to_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/directions")
            .with_status(500)
            .create_async()
            .await;

        let client = Arc::new(DirectionsClient::new(
            format!("{}/directions", server.url()),
            "test-key".to_string(),
        ));
        let enricher = RouteEnricher::new(client);

        let restaurants: Vec<_> = catalog::all_restaurants().into_iter().take(1).collect();
        let (enriched, _rx) = enricher.begin(origin(), restaurants).await;

        assert!(enriched[0].distance.as_ref().unwrap().is_unavailable());
    }

    #[tokio::test]
    async fn test_superseded_generation_drops_updates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/directions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(route_body(1000))
            .create_async()
            .await;

        let client = Arc::new(DirectionsClient::new(
            format!("{}/directions", server.url()),
            "test-key".to_string(),
        ));
        let enricher = RouteEnricher::new(client);

        let restaurants: Vec<_> = catalog::all_restaurants().into_iter().take(3).collect();
        let (_, mut rx) = enricher.begin(origin(), restaurants).await;

        // A new search invalidates the running enrichment before its
        // background task publishes anything
        enricher.supersede();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        assert!(!rx.has_changed().unwrap_or(false));
        let latest = rx.borrow().clone();
        assert!(latest[1].distance.is_none());
        assert!(latest[2].distance.is_none());
    }

    #[tokio::test]
    async fn test_empty_list_is_a_noop() {
        let client = Arc::new(DirectionsClient::new(
            "http://localhost:1/directions".to_string(),
            "test-key".to_string(),
        ));
        let enricher = RouteEnricher::new(client);

        let (enriched, _rx) = enricher.begin(origin(), Vec::new()).await;
        assert!(enriched.is_empty());
    }
}
