//! Afternoon Shift Page
//!
//! Vehicle table with keystroke search, status actions and CSV
//! export/import.

use leptos::*;

use crate::browser;
use crate::export;
use crate::filter::filter_vehicles;
use crate::state::models::{Action, AfternoonShiftVehicle};
use crate::state::use_global_state;

/// Table headings, in column order
const COLUMNS: [&str; 8] = [
    "Vehicle", "Plate No.", "Odometer", "GPS", "Device", "SIM", "Fleet", "Status",
];

/// Afternoon shift vehicle table
#[component]
pub fn AfternoonShift(
    /// Show search, actions, export and import
    #[prop(default = true)]
    show_toolbar: bool,
    /// Draw a border around the table
    #[prop(default = false)]
    with_border: bool,
) -> impl IntoView {
    let state = use_global_state();

    let vehicles = create_rw_signal(Vec::<AfternoonShiftVehicle>::new());
    let filtered = create_rw_signal(Vec::<AfternoonShiftVehicle>::new());
    let search_term = create_rw_signal(String::new());
    let active_action = create_rw_signal(None::<Action>);

    // Swap in a new source list and re-apply the current term
    let load_vehicles = move |data: Vec<AfternoonShiftVehicle>| {
        filtered.set(filter_vehicles(&data, &search_term.get_untracked()));
        vehicles.set(data);
    };

    let service = state.service();
    spawn_local(async move {
        match service.afternoon_shift_vehicles().await {
            Ok(data) => {
                tracing::debug!(count = data.len(), "Loaded afternoon shift vehicles");
                load_vehicles(data);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching afternoon shift vehicles");
            }
        }
    });

    let on_search = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        filtered.set(vehicles.with_untracked(|all| filter_vehicles(all, &term)));
        search_term.set(term);
    };

    let on_export = move |_| {
        let rows = filtered.get_untracked();
        let result = export::vehicles_to_csv(&rows)
            .map_err(|e| e.to_string())
            .and_then(|csv| {
                browser::download_text(export::EXPORT_FILE_NAME, &csv).map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => tracing::info!(rows = rows.len(), "Exported afternoon shift vehicles"),
            Err(e) => tracing::error!(error = %e, "Failed to export afternoon shift vehicles"),
        }
    };

    let on_import = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = match browser::selected_file(&input) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(error = %e, "Import cancelled");
                return;
            }
        };

        spawn_local(async move {
            let text = match browser::read_as_text(&file).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read vehicle import");
                    return;
                }
            };
            match export::vehicles_from_csv(&text) {
                Ok(data) => {
                    tracing::info!(rows = data.len(), file = %file.name(), "Imported afternoon shift vehicles");
                    load_vehicles(data);
                }
                Err(e) => tracing::error!(error = %e, "Failed to parse vehicle import"),
            }
        });
    };

    let table_class = if with_border {
        "w-full text-sm border border-gray-700 rounded-lg"
    } else {
        "w-full text-sm"
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Afternoon Shift"</h2>
                <span class="text-sm text-gray-400">
                    {move || format!("{} of {} vehicles", filtered.with(Vec::len), vehicles.with(Vec::len))}
                </span>
            </div>

            {show_toolbar.then(|| view! {
                <div class="flex flex-wrap items-center gap-2">
                    <input
                        type="search"
                        placeholder="Search vehicle, plate, device, fleet, status"
                        prop:value=move || search_term.get()
                        on:input=on_search
                        class="flex-1 min-w-[16rem] bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <ActionPicker active=active_action />

                    <button
                        on:click=on_export
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Export"
                    </button>

                    <label class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors cursor-pointer">
                        <input type="file" accept=".csv,text/csv" class="hidden" on:change=on_import />
                        "Import"
                    </label>
                </div>
            })}

            <div class="overflow-x-auto">
                <table class=table_class>
                    <thead>
                        <tr class="text-left text-gray-400 border-b border-gray-700">
                            {COLUMNS.iter().map(|heading| view! { <th class="py-2 px-3">{*heading}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan=COLUMNS.len() class="py-6 text-center text-gray-400">
                                            "No vehicles found"
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|vehicle| view! { <VehicleRow vehicle=vehicle /> }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
fn VehicleRow(vehicle: AfternoonShiftVehicle) -> impl IntoView {
    let status_class = match vehicle.status.to_lowercase().as_str() {
        "active" => "bg-green-600",
        "non-active" | "inactive" => "bg-red-600",
        _ => "bg-gray-600",
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
            <td class="py-2 px-3 font-medium">{vehicle.vehicle}</td>
            <td class="py-2 px-3">{vehicle.plate_num}</td>
            <td class="py-2 px-3">{vehicle.odometer}</td>
            <td class="py-2 px-3">{vehicle.gps}</td>
            <td class="py-2 px-3">{vehicle.device}</td>
            <td class="py-2 px-3">{vehicle.sim}</td>
            <td class="py-2 px-3">{vehicle.fleet}</td>
            <td class="py-2 px-3">
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", status_class)>
                    {vehicle.status}
                </span>
            </td>
        </tr>
    }
}

/// Status action selector; records the choice only
#[component]
fn ActionPicker(active: RwSignal<Option<Action>>) -> impl IntoView {
    let actions = Action::status_actions();

    let on_change = move |ev: web_sys::Event| {
        let name = event_target_value(&ev);
        let action = Action::status_actions().into_iter().find(|a| a.name == name);
        tracing::debug!(action = %name, "Selected status action");
        active.set(action);
    };

    view! {
        <select
            on:change=on_change
            prop:value=move || active.get().map(|a| a.name).unwrap_or_default()
            class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600 focus:border-primary-500 focus:outline-none"
        >
            <option value="">"Action"</option>
            {actions.into_iter().map(|action| view! {
                <option value=action.name.clone()>{action.name}</option>
            }).collect_view()}
        </select>
    }
}
