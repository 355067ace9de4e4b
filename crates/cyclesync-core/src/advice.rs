//! Gateway to the external advice-generation service.
//!
//! The service is opaque to the core: we send the profile plus the current
//! phase context and consume a typed day plan back. Any transport or parse
//! failure collapses into a single generic error; callers show the error
//! message and nothing else.
//!
//! Requests are keyed by the phase context that triggered them. A newer
//! request supersedes an older in-flight one, so a slow response for a
//! stale context is dropped instead of overwriting fresher data.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::cycle::{CyclePhase, CycleStats};
use crate::error::AdviceError;
use crate::profile::UserProfile;

/// Environment variable holding the advice endpoint URL.
pub const API_URL_ENV: &str = "CYCLESYNC_API_URL";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CYCLESYNC_API_KEY";

/// Default request timeout. The service has no SLA; without this a hang
/// would block the caller's loading state indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Phase context that triggered an advice request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceKey {
    pub phase: CyclePhase,
    pub day_of_cycle: u32,
}

impl From<&CycleStats> for AdviceKey {
    fn from(stats: &CycleStats) -> Self {
        Self {
            phase: stats.phase,
            day_of_cycle: stats.current_day,
        }
    }
}

/// Request body sent to the advice service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest<'a> {
    pub name: &'a str,
    pub interests: &'a [String],
    pub dietary_preference: &'a str,
    pub work_schedule: &'a str,
    pub chronotype: &'a str,
    pub symptoms: &'a [String],
    pub goals: &'a str,
    pub cycle_length: u32,
    pub phase: CyclePhase,
    pub day_of_cycle: u32,
}

/// Per-category suggestion chips (3-5 short items each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub work: Vec<String>,
    pub movement: Vec<String>,
    pub nutrition: Vec<String>,
    pub selfcare: Vec<String>,
}

/// A suggested future calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    pub title: String,
    pub description: String,
    pub days_offset: i64,
}

/// The advice service's structured day plan. Read-only to the core and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub summary: String,
    pub workout_recommendation: String,
    pub nutrition_tip: String,
    pub productivity_hack: String,
    pub self_care_action: String,
    pub mood_forecast: String,
    pub recommendations: Recommendations,
    pub upcoming_event: UpcomingEvent,
}

/// HTTP client for the advice service.
pub struct AdviceGateway {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AdviceGateway {
    /// Build a gateway for an explicit endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AdviceError> {
        Self::with_timeout(endpoint, api_key, DEFAULT_TIMEOUT)
    }

    /// Build a gateway with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AdviceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a gateway from `CYCLESYNC_API_URL` / `CYCLESYNC_API_KEY`.
    pub fn from_env() -> Result<Self, AdviceError> {
        let endpoint = std::env::var(API_URL_ENV)
            .map_err(|_| AdviceError::NotConfigured { env_var: API_URL_ENV })?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AdviceError::NotConfigured { env_var: API_KEY_ENV })?;
        Self::new(endpoint, api_key)
    }

    /// Fetch the day plan for the given profile and cycle position.
    pub async fn fetch_day_plan(
        &self,
        profile: &UserProfile,
        stats: &CycleStats,
    ) -> Result<DayPlan, AdviceError> {
        let request = AdviceRequest {
            name: &profile.name,
            interests: &profile.interests,
            dietary_preference: &profile.dietary_preference,
            work_schedule: &profile.work_schedule,
            chronotype: &profile.chronotype,
            symptoms: &profile.symptoms,
            goals: &profile.goals,
            cycle_length: profile.cycle_length,
            phase: stats.phase,
            day_of_cycle: stats.current_day,
        };

        let body = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(AdviceError::Parse)
    }
}

/// Latest-wins holder for gateway results.
///
/// `issue` records the key of the newest request; `accept` stores a
/// completed plan only when its key is still the latest one, so stale
/// completions are ignored rather than raced.
#[derive(Debug, Default)]
pub struct AdviceSlot {
    latest_key: Option<AdviceKey>,
    plan: Option<DayPlan>,
}

impl AdviceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly issued request for `key`.
    pub fn issue(&mut self, key: AdviceKey) {
        self.latest_key = Some(key);
    }

    /// Offer a completed plan. Returns true when accepted.
    pub fn accept(&mut self, key: AdviceKey, plan: DayPlan) -> bool {
        if self.latest_key == Some(key) {
            self.plan = Some(plan);
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&DayPlan> {
        self.plan.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Maya".to_string(),
            interests: vec!["Yoga".to_string()],
            dietary_preference: "Vegan".to_string(),
            work_schedule: "Freelance / Flexible".to_string(),
            chronotype: "Night Owl (Evening Energy)".to_string(),
            symptoms: vec![],
            goals: "Sleep better".to_string(),
            last_period_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            cycle_length: 28,
        }
    }

    fn stats() -> CycleStats {
        CycleStats::compute(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            28,
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        )
    }

    fn plan_json() -> &'static str {
        r#"{
            "summary": "Energy is climbing today.",
            "workoutRecommendation": "Try a strength session.",
            "nutritionTip": "Leafy greens and lentils.",
            "productivityHack": "Batch creative work this morning.",
            "selfCareAction": "Ten minutes of journaling.",
            "moodForecast": "Optimistic and social.",
            "recommendations": {
                "work": ["Outline the proposal", "Book the review"],
                "movement": ["30 min strength", "Evening walk"],
                "nutrition": ["Lentil salad", "Iron-rich snack"],
                "selfcare": ["Journal", "Early night"]
            },
            "upcomingEvent": {
                "title": "Big Project Focus Block",
                "description": "Peak focus arrives in two days.",
                "daysOffset": 2
            }
        }"#
    }

    #[tokio::test]
    async fn fetch_parses_a_full_day_plan() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(plan_json())
            .create_async()
            .await;

        let gateway = AdviceGateway::new(server.url(), "test-key").unwrap();
        let plan = gateway.fetch_day_plan(&profile(), &stats()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(plan.summary, "Energy is climbing today.");
        assert_eq!(plan.recommendations.movement.len(), 2);
        assert_eq!(plan.upcoming_event.days_offset, 2);
    }

    #[tokio::test]
    async fn server_error_maps_to_generic_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let gateway = AdviceGateway::new(server.url(), "test-key").unwrap();
        let err = gateway.fetch_day_plan(&profile(), &stats()).await.unwrap_err();
        assert!(matches!(err, AdviceError::Http(_)));
        assert_eq!(err.to_string(), "could not reach the advice service");
    }

    #[tokio::test]
    async fn slow_response_times_out_as_http_error() {
        use std::io::Write;

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(500));
                w.write_all(plan_json().as_bytes())
            })
            .create_async()
            .await;

        let gateway =
            AdviceGateway::with_timeout(server.url(), "test-key", Duration::from_millis(50))
                .unwrap();
        let err = gateway.fetch_day_plan(&profile(), &stats()).await.unwrap_err();
        assert!(matches!(err, AdviceError::Http(_)));
        assert_eq!(err.to_string(), "could not reach the advice service");
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("{\"summary\": \"only a summary\"}")
            .create_async()
            .await;

        let gateway = AdviceGateway::new(server.url(), "test-key").unwrap();
        let err = gateway.fetch_day_plan(&profile(), &stats()).await.unwrap_err();
        assert!(matches!(err, AdviceError::Parse(_)));
    }

    #[test]
    fn slot_ignores_stale_completion() {
        let mut slot = AdviceSlot::new();
        let old_key = AdviceKey {
            phase: CyclePhase::Follicular,
            day_of_cycle: 10,
        };
        let new_key = AdviceKey {
            phase: CyclePhase::Follicular,
            day_of_cycle: 11,
        };

        slot.issue(old_key);
        slot.issue(new_key);

        let plan: DayPlan = serde_json::from_str(plan_json()).unwrap();
        assert!(!slot.accept(old_key, plan.clone()));
        assert!(slot.current().is_none());

        assert!(slot.accept(new_key, plan));
        assert!(slot.current().is_some());
    }

    #[test]
    fn request_serializes_camel_case() {
        let p = profile();
        let s = stats();
        let req = AdviceRequest {
            name: &p.name,
            interests: &p.interests,
            dietary_preference: &p.dietary_preference,
            work_schedule: &p.work_schedule,
            chronotype: &p.chronotype,
            symptoms: &p.symptoms,
            goals: &p.goals,
            cycle_length: p.cycle_length,
            phase: s.phase,
            day_of_cycle: s.current_day,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["dietaryPreference"], "Vegan");
        assert_eq!(json["dayOfCycle"], 10);
        assert_eq!(json["phase"], "Follicular");
    }
}
