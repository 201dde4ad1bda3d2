//! WeatherAPI.com response types and normalization.
//!
//! The raw types mirror the upstream JSON and tolerate missing fields; the
//! normalized types are what the dashboard API serves.

use serde::{Deserialize, Serialize};

fn unknown() -> String {
    "Unknown".to_string()
}

/// Raw response from `current.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentApiResponse {
    #[serde(default)]
    pub location: ApiLocation,
    #[serde(default)]
    pub current: ApiCurrent,
}

/// Raw response from `forecast.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastApiResponse {
    #[serde(default)]
    pub location: ApiLocation,
    #[serde(default)]
    pub forecast: ApiForecast,
}

/// Location block shared by both endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiLocation {
    pub name: String,
    pub country: String,
    pub region: String,
    pub localtime: String,
}

impl Default for ApiLocation {
    fn default() -> Self {
        Self { name: unknown(), country: String::new(), region: String::new(), localtime: String::new() }
    }
}

/// Condition text and icon.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiCondition {
    pub text: String,
    pub icon: String,
}

impl Default for ApiCondition {
    fn default() -> Self {
        Self { text: unknown(), icon: String::new() }
    }
}

/// Current conditions block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ApiCondition,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub feelslike_c: f64,
    pub uv: f64,
    pub vis_km: f64,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiForecast {
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiForecastDay {
    pub date: String,
    pub day: ApiDay,
}

/// Daily aggregate block of a forecast day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDay {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_f: f64,
    pub condition: ApiCondition,
    pub daily_chance_of_rain: u8,
    pub avghumidity: f64,
}

/// Normalized location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub region: String,
    /// Local time at the location; only reported with current conditions.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub local_time: Option<String>,
}

/// Normalized current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub condition: String,
    pub icon: String,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub feels_like_c: f64,
    pub uv: f64,
    pub visibility_km: f64,
}

/// Current-weather payload served by `/api/weather/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
    pub last_updated: String,
}

/// One day of a normalized forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub max_temp_f: f64,
    pub min_temp_f: f64,
    pub condition: String,
    pub icon: String,
    pub chance_of_rain: u8,
    pub avg_humidity: f64,
}

/// Forecast payload served by `/api/weather/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location: Location,
    pub forecast: Vec<ForecastDay>,
}

impl From<CurrentApiResponse> for WeatherReport {
    fn from(raw: CurrentApiResponse) -> Self {
        let ApiCurrent {
            temp_c,
            temp_f,
            condition,
            humidity,
            wind_kph,
            wind_dir,
            feelslike_c,
            uv,
            vis_km,
            last_updated,
        } = raw.current;

        WeatherReport {
            location: Location {
                name: raw.location.name,
                country: raw.location.country,
                region: raw.location.region,
                local_time: Some(raw.location.localtime),
            },
            current: CurrentConditions {
                temperature_c: temp_c,
                temperature_f: temp_f,
                condition: condition.text,
                icon: condition.icon,
                humidity,
                wind_kph,
                wind_dir,
                feels_like_c: feelslike_c,
                uv,
                visibility_km: vis_km,
            },
            last_updated,
        }
    }
}

impl From<ApiForecastDay> for ForecastDay {
    fn from(raw: ApiForecastDay) -> Self {
        let day = raw.day;
        ForecastDay {
            date: raw.date,
            max_temp_c: day.maxtemp_c,
            min_temp_c: day.mintemp_c,
            max_temp_f: day.maxtemp_f,
            min_temp_f: day.mintemp_f,
            condition: day.condition.text,
            icon: day.condition.icon,
            chance_of_rain: day.daily_chance_of_rain,
            avg_humidity: day.avghumidity,
        }
    }
}

impl From<ForecastApiResponse> for WeatherForecast {
    fn from(raw: ForecastApiResponse) -> Self {
        WeatherForecast {
            location: Location {
                name: raw.location.name,
                country: raw.location.country,
                region: raw.location.region,
                local_time: None,
            },
            forecast: raw.forecast.forecastday.into_iter().map(ForecastDay::from).collect(),
        }
    }
}

impl WeatherReport {
    /// Whether the report carries a location name and a condition.
    pub fn is_complete(&self) -> bool {
        !self.location.name.is_empty() && !self.current.condition.is_empty()
    }
}

impl WeatherForecast {
    /// Whether the forecast has a location and at least one dated day.
    pub fn is_complete(&self) -> bool {
        !self.location.name.is_empty() && !self.forecast.is_empty() && self.forecast.iter().all(|d| !d.date.is_empty())
    }

    pub fn day_count(&self) -> usize {
        self.forecast.len()
    }
}
