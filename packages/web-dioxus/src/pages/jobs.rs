//! Job listing page component

use dioxus::prelude::*;

use jobboard_core::{
    filter_jobs, FilterSpec, Job, SALARY_CEILING, SALARY_FLOOR, SALARY_STEP,
};

use crate::components::{CreateJobModal, JobCard, JobCardSkeleton};

/// Job listing page - browse, filter, and create job postings
#[component]
pub fn JobList() -> Element {
    // Fetch the listing on server and client
    let mut jobs = use_server_future(fetch_jobs)?;

    let mut filters = use_signal(FilterSpec::default);
    let mut show_modal = use_signal(|| false);

    // Derive the filtered view; recomputed on every spec or source change
    let filtered = use_memo(move || {
        let source: Vec<Job> = jobs
            .value()
            .read()
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .cloned()
            .unwrap_or_default();
        filter_jobs(&source, &filters())
    });

    let is_loading = jobs.value().read().is_none();
    let fetch_error = jobs
        .value()
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().err())
        .map(|e| e.to_string());

    let max_salary_lakhs = filters().max_salary as f64 / 100_000.0;

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-sky-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-6xl mx-auto px-4 py-8 flex justify-between items-center",
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "Job Listings"
                    }
                    button {
                        class: "px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                        onclick: move |_| show_modal.set(true),
                        "+ Create Jobs"
                    }
                }
            }

            // Filter bar
            div {
                class: "bg-white border-b border-gray-100 sticky top-0 z-10",
                div {
                    class: "max-w-6xl mx-auto px-4 py-4 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4 items-end",
                    input {
                        r#type: "text",
                        placeholder: "Search By Job Title, Role",
                        value: "{filters().title}",
                        oninput: move |e| filters.write().title = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-md text-sm placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500",
                    }
                    input {
                        r#type: "text",
                        placeholder: "Preferred Work Mode",
                        value: "{filters().work_mode}",
                        oninput: move |e| filters.write().work_mode = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-md text-sm placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500",
                    }
                    input {
                        r#type: "text",
                        placeholder: "Job type",
                        value: "{filters().job_type}",
                        oninput: move |e| filters.write().job_type = e.value(),
                        class: "px-3 py-2 border border-gray-300 rounded-md text-sm placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-500",
                    }
                    div {
                        class: "flex flex-col gap-1",
                        label {
                            class: "text-sm text-gray-600 font-medium",
                            "Salary \u{2264} \u{20B9}{max_salary_lakhs:.1} LPA"
                        }
                        input {
                            r#type: "range",
                            min: "{SALARY_FLOOR}",
                            max: "{SALARY_CEILING}",
                            step: "{SALARY_STEP}",
                            value: "{filters().max_salary}",
                            oninput: move |e| {
                                if let Ok(value) = e.value().parse::<i64>() {
                                    filters.write().max_salary = value;
                                }
                            },
                            class: "w-full accent-purple-600",
                        }
                    }
                }
            }

            // Main content
            main {
                class: "max-w-6xl mx-auto px-4 py-8",

                // Loading state
                if is_loading {
                    div {
                        class: "grid gap-6 grid-cols-1 sm:grid-cols-2 md:grid-cols-3 xl:grid-cols-4",
                        for i in 0..8 {
                            JobCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error state: the listing stays empty rather than crashing
                else if let Some(err) = fetch_error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load jobs" }
                        p { class: "text-gray-500", "{err}" }
                    }
                }

                // Empty state
                else if filtered().is_empty() {
                    p {
                        class: "text-center py-16 text-gray-500",
                        "No jobs found."
                    }
                }

                // Job grid
                else {
                    div {
                        class: "grid gap-6 grid-cols-1 sm:grid-cols-2 md:grid-cols-3 xl:grid-cols-4",
                        for (idx, job) in filtered().into_iter().enumerate() {
                            {
                                let card_key = job.id.clone().unwrap_or_else(|| idx.to_string());
                                rsx! {
                                    JobCard { key: "{card_key}", job: job.clone() }
                                }
                            }
                        }
                    }
                }
            }

            if show_modal() {
                CreateJobModal {
                    on_close: move |_| show_modal.set(false),
                    on_created: move |_| jobs.restart(),
                }
            }
        }
    }
}

/// Server function to fetch the job listing
#[server]
async fn fetch_jobs() -> Result<Vec<Job>, ServerFnError> {
    let client = crate::api::server_client().map_err(|e| ServerFnError::new(e.to_string()))?;

    client
        .fetch_jobs()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
