//! In-memory provider double and request helpers for handler tests.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use weather8_client::{CurrentApiResponse, ForecastApiResponse, WeatherError, WeatherProvider};
use weather8_core::CacheStore;

use crate::handler::{AppState, router};

type Responder<T> = Box<dyn Fn(&str) -> Result<T, WeatherError> + Send + Sync>;

/// Scriptable provider that records how it was called.
pub struct MockProvider {
    current: Mutex<Responder<CurrentApiResponse>>,
    forecast: Mutex<Responder<ForecastApiResponse>>,
    current_calls: AtomicUsize,
    forecast_calls: AtomicUsize,
    last_city: Mutex<Option<String>>,
    last_days: AtomicU8,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            current: Mutex::new(Box::new(|_| Ok(current_fixture("Test City")))),
            forecast: Mutex::new(Box::new(|_| Ok(forecast_fixture("Test City", 2)))),
            current_calls: AtomicUsize::new(0),
            forecast_calls: AtomicUsize::new(0),
            last_city: Mutex::new(None),
            last_days: AtomicU8::new(0),
        }
    }
}

impl MockProvider {
    pub fn succeed_current(&self, response: CurrentApiResponse) {
        *self.current.lock().unwrap() = Box::new(move |_| Ok(response.clone()));
    }

    pub fn succeed_forecast(&self, response: ForecastApiResponse) {
        *self.forecast.lock().unwrap() = Box::new(move |_| Ok(response.clone()));
    }

    pub fn fail_current(&self, err: impl Fn(&str) -> WeatherError + Send + Sync + 'static) {
        *self.current.lock().unwrap() = Box::new(move |city| Err(err(city)));
    }

    pub fn fail_forecast(&self, err: impl Fn(&str) -> WeatherError + Send + Sync + 'static) {
        *self.forecast.lock().unwrap() = Box::new(move |city| Err(err(city)));
    }

    pub fn current_calls(&self) -> usize {
        self.current_calls.load(Ordering::SeqCst)
    }

    pub fn forecast_calls(&self) -> usize {
        self.forecast_calls.load(Ordering::SeqCst)
    }

    pub fn last_city(&self) -> Option<String> {
        self.last_city.lock().unwrap().clone()
    }

    pub fn last_days(&self) -> u8 {
        self.last_days.load(Ordering::SeqCst)
    }

    fn record(&self, city: &str) {
        *self.last_city.lock().unwrap() = Some(city.to_string());
    }
}

#[async_trait::async_trait]
impl WeatherProvider for MockProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentApiResponse, WeatherError> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        self.record(city);
        (self.current.lock().unwrap())(city)
    }

    async fn forecast(&self, city: &str, days: u8) -> Result<ForecastApiResponse, WeatherError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.last_days.store(days, Ordering::SeqCst);
        self.record(city);
        (self.forecast.lock().unwrap())(city)
    }
}

/// Upstream current-weather body for `name`.
pub fn current_fixture(name: &str) -> CurrentApiResponse {
    serde_json::from_value(json!({
        "location": {"name": name, "country": "Test Country", "region": "Test Region", "localtime": "2024-01-01 12:00"},
        "current": {
            "temp_c": 25.0, "temp_f": 77.0,
            "condition": {"text": "Sunny", "icon": "//sunny.png"},
            "humidity": 60, "wind_kph": 10.0, "wind_dir": "N",
            "feelslike_c": 26.0, "uv": 5.0, "vis_km": 10.0,
            "last_updated": "2024-01-01 12:00"
        }
    }))
    .unwrap()
}

/// Upstream forecast body for `name` with `days` consecutive days from 2024-01-01.
pub fn forecast_fixture(name: &str, days: u8) -> ForecastApiResponse {
    let forecastday: Vec<Value> = (0..days)
        .map(|i| {
            let max = 28.0 + f64::from(i) * 2.0;
            json!({
                "date": format!("2024-01-{:02}", i + 1),
                "day": {
                    "maxtemp_c": max, "mintemp_c": max - 10.0,
                    "maxtemp_f": max * 1.8 + 32.0, "mintemp_f": (max - 10.0) * 1.8 + 32.0,
                    "condition": {"text": if i == 0 { "Sunny" } else { "Partly Cloudy" }, "icon": "//icon.png"},
                    "daily_chance_of_rain": i * 10, "avghumidity": 55
                }
            })
        })
        .collect();

    serde_json::from_value(json!({
        "location": {"name": name, "country": "Test Country", "region": "Test Region"},
        "forecast": {"forecastday": forecastday}
    }))
    .unwrap()
}

/// Router plus handles on the state it serves.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub provider: Arc<MockProvider>,
}

impl TestApp {
    pub fn new(provider: MockProvider) -> Self {
        let provider = Arc::new(provider);
        let state = AppState::new(provider.clone(), CacheStore::default(), 5);
        Self { router: router(state.clone()), state, provider }
    }

    pub async fn request(&self, method: &str, uri: &str) -> Response {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// GET `uri` and decode the body as JSON (`Null` when empty).
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.request("GET", uri).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = TestApp::new(MockProvider::default());

        let (status, body) = app.get("/api/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "error": "Resource not found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let app = TestApp::new(MockProvider::default());

        for uri in ["/api/weather/current?city=Lagos", "/api/weather/forecast", "/api/cache/status"] {
            let response = app.request("POST", uri).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({"success": false, "error": "Method not allowed"}), "{uri}");
        }
        assert_eq!(app.provider.current_calls(), 0);
    }
}
