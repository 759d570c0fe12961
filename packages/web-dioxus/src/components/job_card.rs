//! Job card component

use dioxus::prelude::*;

use jobboard_core::Job;

/// Props for JobCard
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub job: Job,
}

/// Job card component displaying a single listing
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;
    let mut applied = use_signal(|| false);

    let title = job.title.clone().unwrap_or_default();
    let company = job.company_name.clone().unwrap_or_default();
    let work_mode = job.work_mode.clone().unwrap_or_default();
    let job_type = job.job_type.clone().unwrap_or_default();
    let description = job.description.clone().unwrap_or_default();

    rsx! {
        div {
            class: "relative w-full bg-white rounded-2xl shadow-md p-4 overflow-hidden flex flex-col justify-between hover:shadow-lg transition-shadow",

            // Posted-time badge
            div {
                class: "absolute top-4 right-4 px-3 py-1 bg-sky-200 text-sm font-medium rounded-lg",
                "{format_time_ago(job.posted_at.as_deref())}"
            }

            // Company logo tile
            div {
                class: "w-20 h-20 bg-gradient-to-b from-white to-gray-100 border shadow rounded-xl flex items-center justify-center mb-3",
                if let Some(logo) = &job.logo {
                    div {
                        class: "w-16 h-16 bg-cover bg-center rounded-lg",
                        style: "background-image: url({logo})",
                    }
                } else {
                    div { class: "w-16 h-16 bg-gray-200 rounded-lg" }
                }
            }

            h2 {
                class: "text-lg font-bold text-black truncate",
                "{title}"
            }

            p {
                class: "text-sm font-medium text-gray-600",
                "{company}"
            }

            // Work mode / type / salary row
            div {
                class: "flex justify-between text-sm text-gray-600 mt-2",
                span { "{work_mode}" }
                span { "{job_type}" }
                span { "{format_lpa(job.salary_max)}" }
            }

            // Description lines
            div {
                class: "text-sm text-gray-500 mt-2 line-clamp-3 flex-grow",
                for (idx, line) in description.lines().enumerate() {
                    p { key: "{idx}", "\u{2022} {line}" }
                }
            }

            button {
                class: "mt-4 bg-sky-500 hover:bg-sky-600 text-white font-semibold py-2 rounded-lg w-full transition disabled:opacity-60",
                disabled: applied(),
                onclick: move |_| applied.set(true),
                if applied() { "Applied" } else { "Apply Now" }
            }
        }
    }
}

/// Skeleton loader for job cards
#[component]
pub fn JobCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-2xl border border-gray-200 bg-white p-4 animate-pulse",
            div { class: "h-6 w-20 bg-gray-200 rounded-lg ml-auto mb-3" }
            div { class: "w-20 h-20 bg-gray-200 rounded-xl mb-3" }
            div { class: "h-6 w-3/4 bg-gray-200 rounded mb-2" }
            div { class: "h-4 w-1/2 bg-gray-200 rounded mb-3" }
            div {
                class: "space-y-2 mb-4",
                div { class: "h-4 w-full bg-gray-200 rounded" }
                div { class: "h-4 w-5/6 bg-gray-200 rounded" }
            }
            div { class: "h-10 w-full bg-gray-200 rounded-lg" }
        }
    }
}

/// Salary ceiling of the range, in lakhs per annum.
fn format_lpa(salary_max: Option<f64>) -> String {
    match salary_max {
        Some(max) if max.is_finite() => {
            let lakhs = max / 100_000.0;
            if lakhs.fract() == 0.0 {
                format!("{lakhs:.0} LPA")
            } else {
                format!("{lakhs:.1} LPA")
            }
        }
        _ => "\u{2014}".to_string(),
    }
}

fn format_time_ago(date_string: Option<&str>) -> String {
    let Some(raw) = date_string else {
        return "Recently".to_string();
    };

    if let Ok(date) = chrono::DateTime::parse_from_rfc3339(raw) {
        let now = chrono::Utc::now();
        let diff = now.signed_duration_since(date);

        let days = diff.num_days();
        if days == 0 {
            "Today".to_string()
        } else if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else if days < 30 {
            format!("{} weeks ago", days / 7)
        } else {
            format!("{} months ago", days / 30)
        }
    } else {
        "Recently".to_string()
    }
}
