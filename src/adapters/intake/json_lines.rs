//! JSON Lines Response Source
//!
//! Reads one participant per line:
//!
//! ```text
//! {"id":"P-1","name":"Ada","email":"ada@example.com","date":"2025-02-01",
//!  "responses":[4,"Agree",null,...],"free_responses":["..."]}
//! ```
//!
//! Identity fields are cleaned here so the engine only ever sees resolved
//! names, emails, and `dd/mm/yyyy` dates.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{ParticipantId, ParticipantIdentity};
use crate::domain::scoring::{FreeResponses, RawValue, ResponseRow, SurveyResponses};
use crate::ports::{IntakeBatch, IntakeError, IntakeRejection, ResponseSource};

/// Name used when a row carries neither a name nor an email.
pub const ANONYMOUS: &str = "Anonymous";

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

#[derive(Debug, Deserialize)]
struct IntakeLine {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    date: Option<String>,
    responses: Vec<RawValue>,
    #[serde(default)]
    free_responses: Vec<String>,
}

/// Reads response rows from a `.jsonl` file.
#[derive(Debug, Clone)]
pub struct JsonLinesResponseSource {
    path: PathBuf,
}

impl JsonLinesResponseSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parses file contents. Blank lines are skipped.
    pub fn parse(contents: &str) -> IntakeBatch {
        let mut batch = IntakeBatch::default();
        for (index, text) in contents.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let line = index + 1;
            match parse_line(text) {
                Ok(row) => batch.rows.push(row),
                Err((participant_id, reason)) => {
                    tracing::warn!(line, participant_id = ?participant_id, %reason, "Intake row rejected");
                    batch.rejections.push(IntakeRejection {
                        line,
                        participant_id,
                        reason,
                    });
                }
            }
        }
        batch
    }
}

#[async_trait]
impl ResponseSource for JsonLinesResponseSource {
    async fn load(&self) -> Result<IntakeBatch, IntakeError> {
        if !self.path.exists() {
            return Err(IntakeError::NotFound(self.path.display().to_string()));
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| IntakeError::Io(e.to_string()))?;

        let batch = Self::parse(&contents);
        tracing::info!(
            path = %self.path.display(),
            rows = batch.rows.len(),
            rejected = batch.rejections.len(),
            "Loaded survey responses"
        );
        Ok(batch)
    }
}

fn parse_line(text: &str) -> Result<ResponseRow, (Option<String>, String)> {
    let raw: IntakeLine =
        serde_json::from_str(text).map_err(|e| (None, format!("invalid JSON: {}", e)))?;

    let id_text = raw.id.as_ref().and_then(id_to_string);
    let participant_id = ParticipantId::new(id_text.clone().unwrap_or_default())
        .map_err(|_| (None, "missing participant id".to_string()))?;

    let responses = SurveyResponses::try_new(raw.responses)
        .map_err(|e| (id_text.clone(), e.to_string()))?;
    let free_responses = FreeResponses::try_from_vec(raw.free_responses)
        .map_err(|e| (id_text.clone(), e.to_string()))?;

    let (name, email) = resolve_name_and_email(raw.name.as_deref(), raw.email.as_deref());
    let date = normalize_date(raw.date.as_deref().unwrap_or_default());

    Ok(ResponseRow {
        identity: ParticipantIdentity::new(participant_id, name, email, date),
        responses,
        free_responses,
    })
}

fn id_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Loose `local@domain.tld` check.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

fn looks_like_name(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let lowered = value.to_lowercase();
    if matches!(lowered.as_str(), "nan" | "none" | "n/a") {
        return false;
    }
    !looks_like_email(value)
}

/// `jane.doe_smith@x.org` becomes `Jane Doe Smith`.
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Resolves display name and email, correcting swapped values.
///
/// The name is never empty; the email is blank when nothing looks like one.
pub fn resolve_name_and_email(name: Option<&str>, email: Option<&str>) -> (String, String) {
    let name = name.map(str::trim).filter(|s| !s.is_empty());
    let email = email.map(str::trim).filter(|s| !s.is_empty());

    let resolved_name = match (name, email) {
        (Some(n), _) if looks_like_name(n) => n.to_string(),
        (_, Some(e)) if looks_like_name(e) => {
            tracing::warn!(name = e, "Using name found in email field");
            e.to_string()
        }
        (Some(n), _) if looks_like_email(n) => name_from_email(n),
        (_, Some(e)) if looks_like_email(e) => name_from_email(e),
        _ => ANONYMOUS.to_string(),
    };

    let resolved_email = match (name, email) {
        (_, Some(e)) if looks_like_email(e) => e.to_string(),
        (Some(n), _) if looks_like_email(n) => {
            tracing::warn!(email = n, "Using email found in name field");
            n.to_string()
        }
        _ => String::new(),
    };

    (resolved_name, resolved_email)
}

/// Formats a date as `dd/mm/yyyy`. Unrecognised input is returned verbatim.
pub fn normalize_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match parsed {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => {
            tracing::warn!(date = value, "Unparseable date passed through");
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn line(id: &str, name: &str, email: &str, date: &str) -> String {
        let responses: Vec<serde_json::Value> = (0..25).map(|_| serde_json::json!(3)).collect();
        serde_json::json!({
            "id": id,
            "name": name,
            "email": email,
            "date": date,
            "responses": responses,
        })
        .to_string()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Parsing
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn parses_rows_and_skips_blank_lines() {
        let contents = format!(
            "{}\n\n{}\n",
            line("P-1", "Ada Lovelace", "ada@example.com", "2025-02-01"),
            line("P-2", "Alan Turing", "alan@example.com", "03/04/2025")
        );
        let batch = JsonLinesResponseSource::parse(&contents);
        assert_eq!(batch.rows.len(), 2);
        assert!(batch.rejections.is_empty());
        assert_eq!(batch.rows[0].identity.date, "01/02/2025");
        assert_eq!(batch.rows[1].identity.participant_id.as_str(), "P-2");
    }

    #[test]
    fn mixed_raw_values_are_kept_for_the_engine() {
        let mut responses: Vec<serde_json::Value> =
            (0..25).map(|_| serde_json::json!(3)).collect();
        responses[0] = serde_json::json!("Strongly Agree");
        responses[1] = serde_json::Value::Null;
        let text = serde_json::json!({"id": 7, "responses": responses}).to_string();

        let batch = JsonLinesResponseSource::parse(&text);
        let row = &batch.rows[0];
        assert_eq!(row.identity.participant_id.as_str(), "7");
        assert_eq!(row.responses.get(1), Some(&RawValue::text("Strongly Agree")));
        assert_eq!(row.responses.get(2), Some(&RawValue::Missing));
        assert_eq!(row.identity.name, ANONYMOUS);
    }

    #[test]
    fn rows_without_id_are_rejected_and_batch_continues() {
        let contents = format!(
            "{}\n{}",
            line("  ", "Nobody", "", ""),
            line("P-9", "Grace Hopper", "grace@example.com", "")
        );
        let batch = JsonLinesResponseSource::parse(&contents);
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rejections.len(), 1);
        assert_eq!(batch.rejections[0].line, 1);
        assert_eq!(batch.rejections[0].reason, "missing participant id");
    }

    #[test]
    fn wrong_response_count_is_rejected_with_id() {
        let text = serde_json::json!({"id": "P-3", "responses": [1, 2, 3]}).to_string();
        let batch = JsonLinesResponseSource::parse(&text);
        assert!(batch.rows.is_empty());
        assert_eq!(batch.rejections[0].participant_id.as_deref(), Some("P-3"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let batch = JsonLinesResponseSource::parse("{not json");
        assert_eq!(batch.rejections.len(), 1);
        assert!(batch.rejections[0].reason.starts_with("invalid JSON"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Identity resolution
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn swapped_name_and_email_are_corrected() {
        let (name, email) = resolve_name_and_email(Some("ada@example.com"), Some("Ada Lovelace"));
        assert_eq!(name, "Ada Lovelace");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn name_falls_back_to_email_local_part() {
        let (name, email) = resolve_name_and_email(None, Some("jane.doe_smith@example.org"));
        assert_eq!(name, "Jane Doe Smith");
        assert_eq!(email, "jane.doe_smith@example.org");
    }

    #[test]
    fn nothing_usable_gives_anonymous_and_blank_email() {
        assert_eq!(
            resolve_name_and_email(Some("n/a"), Some("   ")),
            (ANONYMOUS.to_string(), String::new())
        );
    }

    #[test]
    fn email_detection_requires_domain_with_dot() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("plain name"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Dates
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn accepted_date_formats_normalize() {
        assert_eq!(normalize_date("2025-02-01"), "01/02/2025");
        assert_eq!(normalize_date("01/02/2025"), "01/02/2025");
        assert_eq!(normalize_date("01-02-2025"), "01/02/2025");
        assert_eq!(normalize_date("2025/02/01"), "01/02/2025");
        assert_eq!(normalize_date("2025-02-01T09:30:00+01:00"), "01/02/2025");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(normalize_date("sometime in May"), "sometime in May");
        assert_eq!(normalize_date(""), "");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // File loading
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn loads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("responses.jsonl");
        std::fs::write(&path, line("P-1", "Ada", "ada@example.com", "2025-02-01")).unwrap();

        let source = JsonLinesResponseSource::new(&path);
        let batch = source.load().await.unwrap();
        assert_eq!(batch.rows.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonLinesResponseSource::new(temp_dir.path().join("absent.jsonl"));
        assert!(matches!(source.load().await, Err(IntakeError::NotFound(_))));
    }
}
