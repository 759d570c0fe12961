//! Form validation and normalization
//!
//! `normalize` is the single path from raw form state to a `JobPosting`:
//! a pure, short-circuiting transformation whose failures carry the field
//! they refer to, leaving presentation entirely to the caller.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::types::{JobDraft, JobPosting, JobType, WorkMode};

/// The form fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    CompanyName,
    WorkMode,
    JobType,
    SalaryMin,
    SalaryMax,
    Deadline,
    Description,
}

impl FormField {
    pub const REQUIRED: [FormField; 8] = [
        FormField::Title,
        FormField::CompanyName,
        FormField::WorkMode,
        FormField::JobType,
        FormField::SalaryMin,
        FormField::SalaryMax,
        FormField::Deadline,
        FormField::Description,
    ];

    /// Wire-format field name, as reported in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::CompanyName => "companyName",
            FormField::WorkMode => "workMode",
            FormField::JobType => "jobType",
            FormField::SalaryMin => "salaryMin",
            FormField::SalaryMax => "salaryMax",
            FormField::Deadline => "deadline",
            FormField::Description => "description",
        }
    }

    /// Human label for form rendering.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Job Title",
            FormField::CompanyName => "Company Name",
            FormField::WorkMode => "Work Mode",
            FormField::JobType => "Job Type",
            FormField::SalaryMin => "Salary Min",
            FormField::SalaryMax => "Salary Max",
            FormField::Deadline => "Application Deadline",
            FormField::Description => "Job Description",
        }
    }
}

impl JobDraft {
    /// Raw value of a form field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::CompanyName => &self.company_name,
            FormField::WorkMode => &self.work_mode,
            FormField::JobType => &self.job_type,
            FormField::SalaryMin => &self.salary_min,
            FormField::SalaryMax => &self.salary_max,
            FormField::Deadline => &self.deadline,
            FormField::Description => &self.description,
        }
    }
}

/// Why a draft could not be normalized. Carries the offending field where
/// one exists so the form can highlight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field \"{}\" is required", .0.name())]
    MissingField(FormField),

    #[error("salary values must be valid numbers")]
    InvalidSalary,

    #[error("min salary cannot be greater than max salary")]
    SalaryRange,

    #[error("work mode must be one of Remote, Onsite or Hybrid")]
    InvalidWorkMode,

    #[error("job type must be one of FullTime, PartTime or Internship")]
    InvalidJobType,

    #[error("deadline must be a valid date (YYYY-MM-DD)")]
    InvalidDeadline,
}

impl ValidationError {
    /// The field a failure refers to, where there is a single one.
    pub fn field(&self) -> Option<FormField> {
        match self {
            ValidationError::MissingField(field) => Some(*field),
            ValidationError::InvalidWorkMode => Some(FormField::WorkMode),
            ValidationError::InvalidJobType => Some(FormField::JobType),
            ValidationError::InvalidDeadline => Some(FormField::Deadline),
            ValidationError::InvalidSalary | ValidationError::SalaryRange => None,
        }
    }
}

/// Validate the raw draft and build the normalized posting.
///
/// Checks run in a fixed order and stop at the first failure: required
/// fields, numeric salaries, salary range, enum fields, deadline. The
/// resulting posting carries trimmed strings, parsed numbers, the deadline
/// at midnight of the picked calendar date, and the supplied submission
/// time.
pub fn normalize(
    draft: &JobDraft,
    posted_at: DateTime<Utc>,
) -> Result<JobPosting, ValidationError> {
    for field in FormField::REQUIRED {
        if draft.value(field).trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let salary_min = parse_salary(&draft.salary_min)?;
    let salary_max = parse_salary(&draft.salary_max)?;
    if salary_min > salary_max {
        return Err(ValidationError::SalaryRange);
    }

    let work_mode: WorkMode = draft
        .work_mode
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidWorkMode)?;
    let job_type: JobType = draft
        .job_type
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidJobType)?;

    let deadline = NaiveDate::parse_from_str(draft.deadline.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDeadline)?
        .and_time(NaiveTime::MIN);

    Ok(JobPosting {
        title: draft.title.trim().to_string(),
        company_name: draft.company_name.trim().to_string(),
        work_mode,
        job_type,
        salary_min,
        salary_max,
        deadline,
        posted_at,
        description: draft.description.trim().to_string(),
    })
}

fn parse_salary(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidSalary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> JobDraft {
        JobDraft {
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            work_mode: "Remote".to_string(),
            job_type: "FullTime".to_string(),
            salary_min: "400000".to_string(),
            salary_max: "900000".to_string(),
            deadline: "2025-06-01".to_string(),
            description: "Build things".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-05-20T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let blank = JobDraft::default();
        assert_eq!(
            normalize(&blank, now()),
            Err(ValidationError::MissingField(FormField::Title))
        );

        let mut draft = valid_draft();
        draft.company_name = "   ".to_string();
        assert_eq!(
            normalize(&draft, now()),
            Err(ValidationError::MissingField(FormField::CompanyName))
        );
    }

    #[test]
    fn test_every_required_field_is_checked() {
        for field in FormField::REQUIRED {
            let mut draft = valid_draft();
            match field {
                FormField::Title => draft.title.clear(),
                FormField::CompanyName => draft.company_name.clear(),
                FormField::WorkMode => draft.work_mode.clear(),
                FormField::JobType => draft.job_type.clear(),
                FormField::SalaryMin => draft.salary_min.clear(),
                FormField::SalaryMax => draft.salary_max.clear(),
                FormField::Deadline => draft.deadline.clear(),
                FormField::Description => draft.description.clear(),
            }
            assert_eq!(
                normalize(&draft, now()),
                Err(ValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_non_numeric_salary_is_rejected() {
        let mut draft = valid_draft();
        draft.salary_min = "four lakh".to_string();
        assert_eq!(normalize(&draft, now()), Err(ValidationError::InvalidSalary));

        let mut draft = valid_draft();
        draft.salary_max = "inf".to_string();
        assert_eq!(normalize(&draft, now()), Err(ValidationError::InvalidSalary));
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let mut draft = valid_draft();
        draft.salary_min = "500000".to_string();
        draft.salary_max = "300000".to_string();
        assert_eq!(normalize(&draft, now()), Err(ValidationError::SalaryRange));
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        let mut draft = valid_draft();
        draft.salary_min = "500000".to_string();
        draft.salary_max = "500000".to_string();
        let posting = normalize(&draft, now()).unwrap();
        assert_eq!(posting.salary_min, 500_000.0);
        assert_eq!(posting.salary_max, 500_000.0);
    }

    #[test]
    fn test_invalid_deadline_is_rejected() {
        let mut draft = valid_draft();
        draft.deadline = "June 1st".to_string();
        assert_eq!(
            normalize(&draft, now()),
            Err(ValidationError::InvalidDeadline)
        );
    }

    #[test]
    fn test_valid_draft_normalizes() {
        let posting = normalize(&valid_draft(), now()).unwrap();
        assert_eq!(posting.title, "Engineer");
        assert_eq!(posting.company_name, "Acme");
        assert_eq!(posting.work_mode, WorkMode::Remote);
        assert_eq!(posting.job_type, JobType::FullTime);
        assert_eq!(posting.salary_min, 400_000.0);
        assert_eq!(posting.salary_max, 900_000.0);
        assert_eq!(
            posting.deadline,
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        assert_eq!(posting.posted_at, now());
        assert_eq!(posting.description, "Build things");
    }

    #[test]
    fn test_strings_are_trimmed() {
        let mut draft = valid_draft();
        draft.title = "  Engineer  ".to_string();
        draft.work_mode = " Remote ".to_string();
        draft.salary_min = " 400000 ".to_string();
        let posting = normalize(&draft, now()).unwrap();
        assert_eq!(posting.title, "Engineer");
        assert_eq!(posting.work_mode, WorkMode::Remote);
        assert_eq!(posting.salary_min, 400_000.0);
    }

    #[test]
    fn test_validation_errors_carry_their_field() {
        assert_eq!(
            ValidationError::MissingField(FormField::Deadline).field(),
            Some(FormField::Deadline)
        );
        assert_eq!(ValidationError::SalaryRange.field(), None);
        assert_eq!(
            ValidationError::MissingField(FormField::CompanyName).to_string(),
            "field \"companyName\" is required"
        );
    }
}
