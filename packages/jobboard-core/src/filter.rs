//! Client-side listing filter
//!
//! A linear predicate scan over the in-memory listing. List sizes are small,
//! so every spec or source change just recomputes the whole subset.

use crate::types::Job;

/// Upper bound of the salary slider; also the default filter ceiling, so a
/// default spec matches every job.
pub const SALARY_CEILING: i64 = 5_000_000;

/// Lower bound of the salary slider.
pub const SALARY_FLOOR: i64 = 100_000;

/// Slider step.
pub const SALARY_STEP: i64 = 100_000;

/// The active set of list-view filter criteria.
///
/// String fields are case-insensitive substring matches against the
/// corresponding job field; `max_salary` is an inclusive upper bound on the
/// derived `salary_annual`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub title: String,
    pub work_mode: String,
    pub job_type: String,
    pub max_salary: i64,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            work_mode: String::new(),
            job_type: String::new(),
            max_salary: SALARY_CEILING,
        }
    }
}

impl FilterSpec {
    /// Whether a single job passes every active predicate.
    pub fn matches(&self, job: &Job) -> bool {
        contains_fold(job.title.as_deref(), &self.title)
            && contains_fold(job.work_mode.as_deref(), &self.work_mode)
            && contains_fold(job.job_type.as_deref(), &self.job_type)
            && job.salary_annual <= self.max_salary
    }
}

/// Filter the listing down to the jobs matching `spec`, preserving input
/// order. Pure and total: missing job fields are treated as empty strings.
pub fn filter_jobs(jobs: &[Job], spec: &FilterSpec) -> Vec<Job> {
    jobs.iter()
        .filter(|job| spec.matches(job))
        .cloned()
        .collect()
}

fn contains_fold(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .unwrap_or_default()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str, work_mode: &str, job_type: &str, annual: i64) -> Job {
        Job {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            work_mode: Some(work_mode.to_string()),
            job_type: Some(job_type.to_string()),
            salary_annual: annual,
            ..Job::default()
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("1", "Backend Engineer", "Remote", "FullTime", 900_000),
            job("2", "Frontend Engineer", "Onsite", "PartTime", 600_000),
            job("3", "Data Analyst", "Hybrid", "Internship", 300_000),
        ]
    }

    #[test]
    fn test_default_spec_is_identity() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, &FilterSpec::default()), jobs);
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let jobs = sample();
        let spec = FilterSpec {
            title: "ENGINEER".to_string(),
            ..FilterSpec::default()
        };
        let hits = filter_jobs(&jobs, &spec);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id.as_deref(), Some("1"));
        assert_eq!(hits[1].id.as_deref(), Some("2"));
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let jobs = sample();
        let spec = FilterSpec {
            title: "engineer".to_string(),
            work_mode: "remote".to_string(),
            job_type: "fulltime".to_string(),
            max_salary: 1_000_000,
        };
        let hits = filter_jobs(&jobs, &spec);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_deref(), Some("1"));

        // same spec with a ceiling below the survivor drops it too
        let spec = FilterSpec {
            max_salary: 800_000,
            ..spec
        };
        assert!(filter_jobs(&jobs, &spec).is_empty());
    }

    #[test]
    fn test_salary_bound_is_inclusive() {
        let jobs = sample();
        let spec = FilterSpec {
            max_salary: 600_000,
            ..FilterSpec::default()
        };
        let hits = filter_jobs(&jobs, &spec);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id.as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_fields_are_treated_as_empty() {
        let bare = Job {
            salary_annual: 0,
            ..Job::default()
        };

        // an all-empty spec still matches a record with no fields at all
        assert!(filter_jobs(&[bare.clone()], &FilterSpec::default()).len() == 1);

        // but a non-empty needle cannot match an absent field
        let spec = FilterSpec {
            title: "engineer".to_string(),
            ..FilterSpec::default()
        };
        assert!(filter_jobs(&[bare], &spec).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let jobs = vec![
            job("z", "Engineer", "Remote", "FullTime", 100),
            job("a", "Engineer", "Remote", "FullTime", 100),
            job("m", "Engineer", "Remote", "FullTime", 100),
        ];
        let ids: Vec<_> = filter_jobs(&jobs, &FilterSpec::default())
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                Some("z".to_string()),
                Some("a".to_string()),
                Some("m".to_string())
            ]
        );
    }
}
