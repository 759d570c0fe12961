//! Create-job modal component
//!
//! Raw field values live in a `JobDraft`; validation happens once, on
//! publish, through `jobboard_core::normalize`. "Save Draft" persists the
//! raw state verbatim, and a successful publish is the only thing that
//! consumes the saved draft.

use chrono::Utc;
use dioxus::prelude::*;

use jobboard_core::{normalize, FormField, JobDraft, JobPosting, JobType, WorkMode};

use crate::storage;

/// Props for CreateJobModal
#[derive(Props, Clone, PartialEq)]
pub struct CreateJobModalProps {
    pub on_close: EventHandler<()>,
    pub on_created: EventHandler<()>,
}

/// Modal form for publishing a new job opening
#[component]
pub fn CreateJobModal(props: CreateJobModalProps) -> Element {
    let on_close = props.on_close;
    let on_created = props.on_created;

    let mut form = use_signal(JobDraft::default);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut error_field = use_signal(|| None::<FormField>);
    let mut draft_saved = use_signal(|| false);

    // Restore any pending draft when the form opens
    use_effect(move || {
        if let Some(draft) = storage::draft_store().load() {
            form.set(draft);
        }
    });

    let handle_draft = move |_| {
        storage::draft_store().save(&form());
        draft_saved.set(true);
        #[cfg(feature = "web")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(2_500).await;
            draft_saved.set(false);
        });
    };

    let handle_submit = move |_| {
        // one submission in flight per modal instance
        if is_submitting() {
            return;
        }

        error.set(None);
        error_field.set(None);

        // validation is synchronous and runs before anything touches the
        // network; the saved draft stays put on failure
        let posting = match normalize(&form(), Utc::now()) {
            Ok(posting) => posting,
            Err(err) => {
                error_field.set(err.field());
                error.set(Some(err.to_string()));
                return;
            }
        };

        // flip the guard before yielding so a second click cannot race a
        // submission that has not been polled yet
        is_submitting.set(true);

        spawn(async move {
            match publish_job(posting).await {
                Ok(()) => {
                    // only a successful publish consumes the draft
                    storage::draft_store().clear();
                    on_created.call(());
                    on_close.call(());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }

            is_submitting.set(false);
        });
    };

    let highlighted = error_field();

    rsx! {
        div {
            class: "fixed inset-0 bg-white/30 backdrop-blur-md flex justify-center items-start pt-24 z-10 overflow-y-auto",

            div {
                class: "w-full max-w-3xl bg-white rounded-2xl shadow-xl p-10 space-y-6 relative mb-12",

                button {
                    class: "absolute top-4 right-5 text-gray-400 hover:text-gray-600 text-xl",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }

                h2 {
                    class: "text-2xl font-bold text-center text-gray-900",
                    "Create Job Opening"
                }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "{err}"
                    }
                }

                if draft_saved() {
                    div {
                        class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg",
                        "Draft saved locally."
                    }
                }

                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-x-4 gap-y-6",

                    Field {
                        field: FormField::Title,
                        value: form().title,
                        highlight: highlighted == Some(FormField::Title),
                        oninput: move |e: FormEvent| form.write().title = e.value(),
                    }
                    Field {
                        field: FormField::CompanyName,
                        value: form().company_name,
                        highlight: highlighted == Some(FormField::CompanyName),
                        oninput: move |e: FormEvent| form.write().company_name = e.value(),
                    }

                    SelectField {
                        field: FormField::WorkMode,
                        value: form().work_mode,
                        options: WorkMode::variants().iter().map(|m| m.as_str()).collect::<Vec<_>>(),
                        highlight: highlighted == Some(FormField::WorkMode),
                        onchange: move |e: FormEvent| form.write().work_mode = e.value(),
                    }
                    SelectField {
                        field: FormField::JobType,
                        value: form().job_type,
                        options: JobType::variants().iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                        highlight: highlighted == Some(FormField::JobType),
                        onchange: move |e: FormEvent| form.write().job_type = e.value(),
                    }

                    Field {
                        field: FormField::SalaryMin,
                        value: form().salary_min,
                        input_type: "number",
                        placeholder: "\u{20B9}0",
                        highlight: highlighted == Some(FormField::SalaryMin),
                        oninput: move |e: FormEvent| form.write().salary_min = e.value(),
                    }
                    Field {
                        field: FormField::SalaryMax,
                        value: form().salary_max,
                        input_type: "number",
                        placeholder: "\u{20B9}12,00,000",
                        highlight: highlighted == Some(FormField::SalaryMax),
                        oninput: move |e: FormEvent| form.write().salary_max = e.value(),
                    }
                    Field {
                        field: FormField::Deadline,
                        value: form().deadline,
                        input_type: "date",
                        highlight: highlighted == Some(FormField::Deadline),
                        oninput: move |e: FormEvent| form.write().deadline = e.value(),
                    }
                }

                div {
                    class: "space-y-2",
                    label {
                        class: "block text-sm font-medium text-gray-700",
                        "{FormField::Description.label()}"
                    }
                    textarea {
                        value: "{form().description}",
                        oninput: move |e| form.write().description = e.value(),
                        placeholder: "Please share a description to let the candidate know more about the job role",
                        rows: "6",
                        class: if highlighted == Some(FormField::Description) {
                            "w-full p-4 border border-red-400 rounded-lg text-gray-900 resize-none focus:outline-none focus:ring-2 focus:ring-sky-500"
                        } else {
                            "w-full p-4 border border-gray-300 rounded-lg text-gray-900 resize-none focus:outline-none focus:ring-2 focus:ring-sky-500"
                        },
                    }
                }

                div {
                    class: "flex justify-between pt-4",
                    button {
                        class: "px-8 py-3 bg-white text-gray-900 font-semibold rounded-lg shadow border border-gray-900 hover:bg-gray-50 transition-colors",
                        onclick: handle_draft,
                        "Save Draft"
                    }
                    button {
                        class: "px-8 py-3 bg-sky-500 text-white font-semibold rounded-lg hover:bg-sky-600 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_submitting(),
                        onclick: handle_submit,
                        if is_submitting() { "Publishing..." } else { "Publish" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FieldProps {
    field: FormField,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)]
    placeholder: String,
    highlight: bool,
    oninput: EventHandler<FormEvent>,
}

#[component]
fn Field(props: FieldProps) -> Element {
    rsx! {
        div {
            label {
                class: "block text-sm font-medium text-gray-700 mb-2",
                "{props.field.label()} "
                span { class: "text-red-500", "*" }
            }
            input {
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                class: if props.highlight {
                    "w-full px-4 py-3 border border-red-400 rounded-lg focus:outline-none focus:ring-2 focus:ring-sky-500"
                } else {
                    "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-sky-500"
                },
                oninput: move |e| props.oninput.call(e),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SelectFieldProps {
    field: FormField,
    value: String,
    options: Vec<&'static str>,
    highlight: bool,
    onchange: EventHandler<FormEvent>,
}

#[component]
fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div {
            label {
                class: "block text-sm font-medium text-gray-700 mb-2",
                "{props.field.label()} "
                span { class: "text-red-500", "*" }
            }
            select {
                value: "{props.value}",
                class: if props.highlight {
                    "w-full px-4 py-3 border border-red-400 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-sky-500"
                } else {
                    "w-full px-4 py-3 border border-gray-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-sky-500"
                },
                onchange: move |e| props.onchange.call(e),
                option { value: "", "Select {props.field.label()}" }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: props.value == *opt,
                        "{opt}"
                    }
                }
            }
        }
    }
}

/// Server function to publish a normalized posting to the job API
#[server]
async fn publish_job(job: JobPosting) -> Result<(), ServerFnError> {
    let client = crate::api::server_client().map_err(|e| ServerFnError::new(e.to_string()))?;

    client
        .create_job(&job)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
