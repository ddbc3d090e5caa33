use crate::models::{Coordinate, DistanceInfo};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the directions API
#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    ApiError(u16),

    #[error("no route found between the given points")]
    NoRoute,

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    origin: Point,
    destination: Point,
    priority: &'static str,
    car_fuel: &'static str,
    car_hipass: bool,
    alternatives: bool,
    road_details: bool,
}

/// The wire format is x=longitude, y=latitude
#[derive(Debug, Serialize)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    summary: Summary,
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    distance: u32,
    duration: u32,
}

#[derive(Debug, Deserialize)]
struct Section {
    #[serde(default)]
    roads: Vec<Road>,
}

#[derive(Debug, Deserialize)]
struct Road {
    /// Flat alternating longitude/latitude pairs
    #[serde(default)]
    vertexes: Vec<f64>,
}

/// Client for the external directions API
///
/// Requests a car route between two points and reshapes the response into a
/// [`DistanceInfo`]: total meters, whole-minute drive time (rounded up), and
/// the full road polyline in segment/vertex order.
pub struct DirectionsClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl DirectionsClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    /// Fetch the car route from origin to destination
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DistanceInfo, DirectionsError> {
        let body = DirectionsRequest {
            origin: Point {
                x: origin.lng,
                y: origin.lat,
            },
            destination: Point {
                x: destination.lng,
                y: destination.lat,
            },
            priority: "RECOMMEND",
            car_fuel: "GASOLINE",
            car_hipass: false,
            alternatives: false,
            road_details: true,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status, body = %text, "directions API error");
            return Err(DirectionsError::ApiError(status));
        }

        let data: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| DirectionsError::InvalidResponse(e.to_string()))?;

        let route = data.routes.first().ok_or(DirectionsError::NoRoute)?;

        let meters = route.summary.distance;
        let car_time = route.summary.duration.div_ceil(60);

        let mut path_coordinates = Vec::new();
        for section in &route.sections {
            for road in &section.roads {
                for pair in road.vertexes.chunks_exact(2) {
                    path_coordinates.push(Coordinate {
                        lng: pair[0],
                        lat: pair[1],
                    });
                }
            }
        }

        tracing::debug!(
            meters,
            car_time,
            vertices = path_coordinates.len(),
            "route resolved"
        );

        Ok(DistanceInfo {
            meters,
            walk_time: None,
            car_time: Some(car_time),
            transit_time: None,
            path_coordinates,
        })
    }

    /// Like [`route`](Self::route), but every failure degrades to the
    /// zero-distance "unknown" result instead of propagating
    pub async fn route_or_fallback(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> DistanceInfo {
        match self.route(origin, destination).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(error = %e, "route lookup failed, returning unavailable");
                DistanceInfo::unavailable()
            }
        }
    }

    /// One independent request per destination, issued sequentially
    ///
    /// Serializing the requests avoids bursting against the provider; each
    /// call carries its own fallback, so one failure never poisons the rest.
    pub async fn routes_to_all(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
    ) -> Vec<DistanceInfo> {
        let mut results = Vec::with_capacity(destinations.len());
        for destination in destinations {
            results.push(self.route_or_fallback(origin, *destination).await);
        }
        results
    }
}
