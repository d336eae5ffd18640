//! Typed content requests: meeting agendas, social insight summaries and
//! shift suggestions.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::models::{new_id, Event, Shift, TeamMember};

use super::AiClient;

const CLOCK_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub topic: String,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingAgenda {
    pub title: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub items: Vec<AgendaItem>,
}

impl MeetingAgenda {
    pub fn total_minutes(&self) -> u32 {
        self.items.iter().map(|i| i.duration_minutes).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Mixed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsights {
    pub summary: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSuggestion {
    pub member_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ShiftSuggestion {
    /// A schedulable shift, or `None` when the clock times don't parse.
    pub fn to_shift(&self, context: &str) -> Option<Shift> {
        let start = NaiveTime::parse_from_str(&self.start_time, CLOCK_FORMAT).ok()?;
        let end = NaiveTime::parse_from_str(&self.end_time, CLOCK_FORMAT).ok()?;
        Some(Shift {
            id: new_id(),
            member_id: self.member_id.clone(),
            context: context.to_string(),
            date: self.date,
            start_time: start,
            end_time: end,
            role: None,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ShiftPlan {
    #[serde(default)]
    shifts: Vec<ShiftSuggestion>,
}

pub fn agenda_prompt(topic: &str, attendees: &[TeamMember]) -> String {
    let attendees: Vec<String> = attendees
        .iter()
        .map(|m| format!("{} ({})", m.name, m.role))
        .collect();
    format!(
        "Draft a concise agenda for a hospitality team meeting about: {}.\n\
         Attendees: {}.\n\
         Give each item a duration in minutes and, where sensible, an owner from the attendees.",
        topic,
        if attendees.is_empty() { "unspecified".to_string() } else { attendees.join(", ") }
    )
}

fn agenda_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "objective": { "type": "STRING" },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "topic": { "type": "STRING" },
                        "durationMinutes": { "type": "INTEGER" },
                        "owner": { "type": "STRING" }
                    },
                    "required": ["topic", "durationMinutes"]
                }
            }
        },
        "required": ["title", "items"]
    })
}

pub fn insights_prompt(posts: &[String]) -> String {
    let mut prompt = String::from(
        "Summarize what guests are saying about the venue in these social media posts and reviews. \
         Report overall sentiment (positive, neutral, negative or mixed), recurring themes, \
         and concrete recommendations for management.\n\nPosts:\n",
    );
    for post in posts {
        prompt.push_str("- ");
        prompt.push_str(post.trim());
        prompt.push('\n');
    }
    prompt
}

fn insights_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "sentiment": { "type": "STRING", "enum": ["positive", "neutral", "negative", "mixed"] },
            "themes": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendations": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["summary", "sentiment"]
    })
}

pub fn shift_prompt(members: &[TeamMember], events: &[Event], week_start: NaiveDate) -> String {
    let week_end = week_start + Duration::days(6);
    let mut prompt = format!(
        "Propose a shift schedule from {} to {} for this team. \
         Use only the member ids listed, dates in YYYY-MM-DD and times in HH:MM (24h). \
         Cover the events with extra staff and keep each member near their overtime threshold.\n\nTeam:\n",
        week_start, week_end
    );
    for m in members {
        prompt.push_str(&format!(
            "- id={} name={} role={} overtimeThreshold={}h\n",
            m.id, m.name, m.role, m.overtime_threshold
        ));
    }
    let in_week: Vec<&Event> = events
        .iter()
        .filter(|e| e.date >= week_start && e.date <= week_end)
        .collect();
    if !in_week.is_empty() {
        prompt.push_str("\nEvents:\n");
        for e in in_week {
            prompt.push_str(&format!("- {} on {} ({} guests)\n", e.name, e.date, e.guest_count));
        }
    }
    prompt
}

fn shift_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "shifts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "memberId": { "type": "STRING" },
                        "date": { "type": "STRING" },
                        "startTime": { "type": "STRING" },
                        "endTime": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["memberId", "date", "startTime", "endTime"]
                }
            }
        },
        "required": ["shifts"]
    })
}

impl AiClient {
    pub async fn meeting_agenda(&self, topic: &str, attendees: &[TeamMember]) -> Option<MeetingAgenda> {
        self.generate_json(&agenda_prompt(topic, attendees), &agenda_schema())
            .await
    }

    pub async fn social_insights(&self, posts: &[String]) -> Option<SocialInsights> {
        if posts.is_empty() {
            return None;
        }
        self.generate_json(&insights_prompt(posts), &insights_schema())
            .await
    }

    /// Suggested shifts for known members only; empty on any failure.
    pub async fn shift_suggestions(
        &self,
        members: &[TeamMember],
        events: &[Event],
        week_start: NaiveDate,
    ) -> Vec<ShiftSuggestion> {
        let plan: ShiftPlan = self
            .generate_json(&shift_prompt(members, events, week_start), &shift_schema())
            .await
            .unwrap_or_default();

        let total = plan.shifts.len();
        let kept: Vec<ShiftSuggestion> = plan
            .shifts
            .into_iter()
            .filter(|s| members.iter().any(|m| m.id == s.member_id))
            .collect();
        if kept.len() < total {
            debug!(dropped = total - kept.len(), "Dropped suggestions for unknown members");
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use crate::models::Role;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn member(id: &str, name: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: Role::Server,
            context: "grill".to_string(),
            responsibilities: vec![],
            base_hourly_rate: 18.0,
            overtime_threshold: 38.0,
            overtime_multiplier: 1.5,
        }
    }

    async fn serving(text: &str) -> (MockServer, AiClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            })))
            .mount(&server)
            .await;
        let config = AiConfig {
            base_url: server.uri(),
            model: "test-model".to_string(),
        };
        let client = AiClient::new(&config).expect("client").with_key("k".to_string());
        (server, client)
    }

    #[test]
    fn test_agenda_prompt_lists_attendees() {
        let prompt = agenda_prompt("summer menu", &[member("m1", "Ana")]);
        assert!(prompt.contains("summer menu"));
        assert!(prompt.contains("Ana (Server)"));
        assert!(agenda_prompt("x", &[]).contains("unspecified"));
    }

    #[test]
    fn test_shift_prompt_only_lists_events_in_week() {
        let week = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let events = vec![
            Event {
                id: "e1".to_string(),
                name: "Jazz brunch".to_string(),
                date: week + Duration::days(6),
                guest_count: 80,
                context: "grill".to_string(),
                notes: None,
            },
            Event {
                id: "e2".to_string(),
                name: "Next week gala".to_string(),
                date: week + Duration::days(7),
                guest_count: 200,
                context: "grill".to_string(),
                notes: None,
            },
        ];
        let prompt = shift_prompt(&[member("m1", "Ana")], &events, week);
        assert!(prompt.contains("id=m1"));
        assert!(prompt.contains("Jazz brunch"));
        assert!(!prompt.contains("Next week gala"));
    }

    #[test]
    fn test_suggestion_to_shift() {
        let s = ShiftSuggestion {
            member_id: "m1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
            start_time: "17:00".to_string(),
            end_time: "01:00".to_string(),
            reason: None,
        };
        let shift = s.to_shift("grill").expect("shift");
        assert_eq!(shift.context, "grill");
        assert_eq!(crate::payroll::shift_hours(&shift), 8.0);

        let bad = ShiftSuggestion {
            start_time: "5pm".to_string(),
            ..s
        };
        assert!(bad.to_shift("grill").is_none());
    }

    #[test]
    fn test_unknown_sentiment_tolerated() {
        let parsed: SocialInsights =
            serde_json::from_str(r#"{"summary": "ok", "sentiment": "ecstatic"}"#).expect("parse");
        assert_eq!(parsed.sentiment, Sentiment::Unknown);
        assert!(parsed.themes.is_empty());
    }

    #[tokio::test]
    async fn test_meeting_agenda() {
        let (_server, client) = serving(
            r#"{"title": "Menu launch", "items": [
                {"topic": "Tasting notes", "durationMinutes": 15, "owner": "Ana"},
                {"topic": "Pricing", "durationMinutes": 10}
            ]}"#,
        )
        .await;
        let agenda = client
            .meeting_agenda("menu launch", &[member("m1", "Ana")])
            .await
            .expect("agenda");
        assert_eq!(agenda.title, "Menu launch");
        assert_eq!(agenda.items.len(), 2);
        assert_eq!(agenda.total_minutes(), 25);
    }

    #[tokio::test]
    async fn test_social_insights_empty_posts_skips_request() {
        let (server, client) = serving(r#"{"summary": "x", "sentiment": "positive"}"#).await;
        assert_eq!(client.social_insights(&[]).await, None);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());

        let insights = client
            .social_insights(&["Loved the oysters".to_string()])
            .await
            .expect("insights");
        assert_eq!(insights.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn test_shift_suggestions_drop_unknown_members() {
        let (_server, client) = serving(
            r#"{"shifts": [
                {"memberId": "m1", "date": "2026-05-05", "startTime": "09:00", "endTime": "17:00"},
                {"memberId": "ghost", "date": "2026-05-05", "startTime": "09:00", "endTime": "17:00"}
            ]}"#,
        )
        .await;
        let week = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        let suggestions = client
            .shift_suggestions(&[member("m1", "Ana")], &[], week)
            .await;
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].member_id, "m1");
    }

    #[tokio::test]
    async fn test_shift_suggestions_empty_on_garbage() {
        let (_server, client) = serving("not json at all").await;
        let week = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
        assert!(client
            .shift_suggestions(&[member("m1", "Ana")], &[], week)
            .await
            .is_empty());
    }
}
