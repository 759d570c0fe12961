//! Type definitions for the job API wire format
//!
//! The remote API speaks camelCase JSON. Inbound records are deserialized
//! leniently so one malformed listing never fails a whole fetch; the
//! outbound `JobPosting` is strict and only produced by `form::normalize`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Onsite => "Onsite",
            WorkMode::Hybrid => "Hybrid",
        }
    }

    pub fn variants() -> &'static [WorkMode] {
        &[WorkMode::Remote, WorkMode::Onsite, WorkMode::Hybrid]
    }
}

impl std::str::FromStr for WorkMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkMode::variants()
            .iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "FullTime",
            JobType::PartTime => "PartTime",
            JobType::Internship => "Internship",
        }
    }

    pub fn variants() -> &'static [JobType] {
        &[JobType::FullTime, JobType::PartTime, JobType::Internship]
    }
}

impl std::str::FromStr for JobType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::variants()
            .iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

// ============================================================================
// Inbound listing record
// ============================================================================

/// A job as returned by `GET /jobs`.
///
/// Records arrive in whatever shape the API holds them, so every field is
/// optional and salary bounds tolerate non-numeric JSON. `salary_annual` is
/// derived once per fetched record and never sent back to the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub work_mode: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub salary_annual: i64,
}

impl Job {
    /// Fill in `salary_annual` from the salary bounds.
    pub fn decorate(mut self) -> Self {
        self.salary_annual = salary_annual(self.salary_min, self.salary_max);
        self
    }
}

/// Midpoint of the salary range, rounded half away from zero (`f64::round`,
/// which is round-half-up for the non-negative salaries in play). `0` when
/// either bound is absent or not a finite number.
pub fn salary_annual(min: Option<f64>, max: Option<f64>) -> i64 {
    match (min, max) {
        (Some(min), Some(max)) if min.is_finite() && max.is_finite() => {
            ((min + max) / 2.0).round() as i64
        }
        _ => 0,
    }
}

/// Accept any JSON value where a salary bound should be; only finite numbers
/// survive, everything else becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()))
}

// ============================================================================
// Outbound normalized posting
// ============================================================================

/// The validated record sent to `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company_name: String,
    pub work_mode: WorkMode,
    pub job_type: JobType,
    pub salary_min: f64,
    pub salary_max: f64,
    pub deadline: NaiveDateTime,
    pub posted_at: DateTime<Utc>,
    pub description: String,
}

// ============================================================================
// Raw form state
// ============================================================================

/// Unvalidated, string-typed form state, persisted verbatim as the draft.
///
/// Fields default individually so drafts saved by older builds still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: String,
    pub company_name: String,
    pub work_mode: String,
    pub job_type: String,
    pub salary_min: String,
    pub salary_max: String,
    pub deadline: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_annual_is_rounded_midpoint() {
        assert_eq!(salary_annual(Some(400_000.0), Some(900_000.0)), 650_000);
        assert_eq!(salary_annual(Some(5.0), Some(5.0)), 5);
        // round-half-up at the .5 boundary
        assert_eq!(salary_annual(Some(0.0), Some(1.0)), 1);
        assert_eq!(salary_annual(Some(3.0), Some(4.0)), 4);
    }

    #[test]
    fn test_salary_annual_defaults_to_zero() {
        assert_eq!(salary_annual(None, Some(900_000.0)), 0);
        assert_eq!(salary_annual(Some(400_000.0), None), 0);
        assert_eq!(salary_annual(None, None), 0);
        assert_eq!(salary_annual(Some(f64::NAN), Some(1.0)), 0);
    }

    #[test]
    fn test_job_deserializes_leniently() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": "j1",
                "title": "Engineer",
                "salaryMin": "not a number",
                "salaryMax": 900000
            }"#,
        )
        .unwrap();

        assert_eq!(job.title.as_deref(), Some("Engineer"));
        assert_eq!(job.salary_min, None);
        assert_eq!(job.salary_max, Some(900_000.0));
        assert_eq!(job.company_name, None);

        let job = job.decorate();
        assert_eq!(job.salary_annual, 0);
    }

    #[test]
    fn test_decorate_sets_salary_annual() {
        let job = Job {
            salary_min: Some(400_000.0),
            salary_max: Some(900_000.0),
            ..Job::default()
        }
        .decorate();

        assert_eq!(job.salary_annual, 650_000);
    }

    #[test]
    fn test_work_mode_parses_canonical_and_folded() {
        assert_eq!("Remote".parse::<WorkMode>(), Ok(WorkMode::Remote));
        assert_eq!("hybrid".parse::<WorkMode>(), Ok(WorkMode::Hybrid));
        assert_eq!("office".parse::<WorkMode>(), Err(()));
        assert_eq!("FullTime".parse::<JobType>(), Ok(JobType::FullTime));
        assert_eq!("internship".parse::<JobType>(), Ok(JobType::Internship));
    }

    #[test]
    fn test_job_posting_wire_format() {
        let posting = JobPosting {
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            work_mode: WorkMode::Remote,
            job_type: JobType::FullTime,
            salary_min: 400_000.0,
            salary_max: 900_000.0,
            deadline: chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_time(chrono::NaiveTime::MIN),
            posted_at: "2025-05-20T12:00:00Z".parse().unwrap(),
            description: "Build things".to_string(),
        };

        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["workMode"], "Remote");
        assert_eq!(value["jobType"], "FullTime");
        assert_eq!(value["salaryMin"], 400_000.0);
        assert_eq!(value["salaryMax"], 900_000.0);
        assert_eq!(value["deadline"], "2025-06-01T00:00:00");
    }

    #[test]
    fn test_partial_draft_still_loads() {
        let draft: JobDraft =
            serde_json::from_str(r#"{"title": "Engineer", "companyName": "Acme"}"#).unwrap();
        assert_eq!(draft.title, "Engineer");
        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.salary_min, "");
    }
}
