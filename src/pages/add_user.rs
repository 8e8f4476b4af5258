//! Add User Page
//!
//! Create-or-update form for a fleet user, prefilled from the first
//! existing record.

use leptos::*;
use leptos_router::*;

use crate::api::load_user_form_data;
use crate::browser;
use crate::form::{self, FormError, UserField, UserFormController};
use crate::menu::DASHBOARD_ROUTE;
use crate::state::models::{Department, Role};
use crate::state::use_global_state;

/// Add user page component
#[component]
pub fn AddUser() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let controller = create_rw_signal(UserFormController::new());
    let roles = create_rw_signal(Vec::<Role>::new());
    let departments = create_rw_signal(Vec::<Department>::new());

    let service = state.service();
    spawn_local(async move {
        match load_user_form_data(&service).await {
            Ok(data) => {
                roles.set(data.roles);
                departments.set(data.departments);
                let prefilled = controller.try_update(|c| c.prefill(&data.users)).unwrap_or(false);
                tracing::debug!(prefilled, "Loaded user form data");
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching user form data");
            }
        }
    });

    let on_image = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = match browser::selected_file(&input) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(error = %e, "No image selected");
                return;
            }
        };

        spawn_local(async move {
            match browser::read_as_data_uri(&file).await {
                Ok(data_uri) => controller.update(|c| c.set_image(data_uri)),
                Err(e) => tracing::error!(error = %e, "Failed to read image"),
            }
        });
    };

    let navigate_after_save = navigate.clone();
    let service = state.service();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let now = chrono::Utc::now().timestamp_millis();
        let submission = match controller.try_update(|c| c.begin_submit(now)) {
            Some(Ok(submission)) => submission,
            Some(Err(FormError::Invalid(e))) => {
                tracing::debug!(error = %e, "User form is invalid");
                return;
            }
            Some(Err(FormError::AlreadySubmitting)) | None => return,
        };

        let service = service.clone();
        let navigate = navigate_after_save.clone();
        spawn_local(async move {
            match form::dispatch(&service, &submission).await {
                Ok(saved) => {
                    tracing::info!(id = %saved.id, "Saved user");
                    controller.update(|c| c.finish(true));
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error saving user");
                    controller.update(|c| c.finish(false));
                }
            }
        });
    };

    let on_cancel = move |_| navigate(DASHBOARD_ROUTE, Default::default());

    let submitting = move || controller.with(UserFormController::is_submitting);
    let text_fields = UserField::ALL
        .into_iter()
        .filter(|field| !matches!(field, UserField::Role | UserField::Department));

    view! {
        <div class="space-y-8 max-w-3xl">
            <div>
                <h1 class="text-3xl font-bold">"Add User"</h1>
                <p class="text-gray-400 mt-1">
                    {move || if controller.with(|c| c.user_id().is_some()) {
                        "Editing the existing user record"
                    } else {
                        "Register a new fleet user"
                    }}
                </p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-6">
                <div class="grid md:grid-cols-2 gap-4">
                    {text_fields.map(|field| view! { <TextField field=field controller=controller /> }).collect_view()}

                    <SelectField
                        field=UserField::Role
                        controller=controller
                        options=Signal::derive(move || roles.with(|r| r.iter().map(|role| role.name.clone()).collect()))
                    />
                    <SelectField
                        field=UserField::Department
                        controller=controller
                        options=Signal::derive(move || {
                            departments.with(|d| d.iter().map(|dept| dept.name.clone()).collect())
                        })
                    />
                </div>

                // Profile image
                <div class="flex items-center gap-4">
                    {move || controller.with(|c| c.image().map(str::to_string)).map(|src| view! {
                        <img src=src alt="Profile" class="w-16 h-16 rounded-full object-cover" />
                    })}
                    <label class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors cursor-pointer">
                        <input type="file" accept="image/*" class="hidden" on:change=on_image />
                        "Upload image"
                    </label>
                </div>

                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        on:click=on_cancel
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=submitting
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field_label(field: UserField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

#[component]
fn TextField(field: UserField, controller: RwSignal<UserFormController>) -> impl IntoView {
    let input_type = if field == UserField::Email { "email" } else { "text" };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{field_label(field)}</label>
            <input
                type=input_type
                prop:value=move || controller.with(|c| c.form().get(field).to_string())
                on:input=move |ev| controller.update(|c| c.set_field(field, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn SelectField(
    field: UserField,
    controller: RwSignal<UserFormController>,
    #[prop(into)] options: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{field_label(field)}</label>
            <select
                prop:value=move || controller.with(|c| c.form().get(field).to_string())
                on:change=move |ev| controller.update(|c| c.set_field(field, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">{format!("Select {}", field.label().to_lowercase())}</option>
                {move || options.get().into_iter().map(|name| view! {
                    <option value=name.clone()>{name}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
