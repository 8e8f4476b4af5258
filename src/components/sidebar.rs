//! Sidebar Component
//!
//! Collapsible navigation sidebar with nested submenus.

use leptos::*;
use leptos_router::*;

use crate::menu::{self, MenuItem, OpenMenus, MENU};
use crate::state::use_global_state;

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global_state();
    let collapsed = state.sidebar_collapsed;
    let open_menus = create_rw_signal(OpenMenus::default());

    let location = use_location();
    let current = create_memo(move |_| {
        location
            .pathname
            .with(|pathname| location.search.with(|search| menu::current_url(pathname, search)))
    });

    view! {
        <aside class=move || {
            let width = if collapsed.get() { "w-16" } else { "w-64" };
            format!("{} shrink-0 bg-gray-800 border-r border-gray-700 min-h-screen transition-all", width)
        }>
            <div class="flex items-center justify-between h-16 px-4">
                {move || (!collapsed.get()).then(|| view! {
                    <A href=menu::DASHBOARD_ROUTE class="flex items-center space-x-3">
                        <span class="text-2xl">"🚚"</span>
                        <span class="text-xl font-bold text-white">"Fleet"</span>
                    </A>
                })}
                <button
                    on:click=move |_| state.toggle_sidebar()
                    class="p-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                    title="Toggle sidebar"
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            <nav class="px-2 space-y-1">
                {MENU.iter().map(|item| view! {
                    <SidebarEntry item=*item current=current open_menus=open_menus collapsed=collapsed />
                }).collect_view()}
            </nav>
        </aside>
    }
}

/// Top-level menu entry, either a link or a submenu toggle
#[component]
fn SidebarEntry(
    item: MenuItem,
    current: Memo<String>,
    open_menus: RwSignal<OpenMenus>,
    collapsed: RwSignal<bool>,
) -> impl IntoView {
    if !item.has_children() {
        return view! { <SidebarLink item=item current=current collapsed=collapsed /> }.into_view();
    }

    let label = item.label;
    let is_open = move || open_menus.with(|open| open.is_open(label));

    view! {
        <div>
            <button
                on:click=move |_| open_menus.update(|open| open.toggle(label))
                title=label
                class=move || {
                    let base = "w-full flex items-center px-3 py-2 rounded-lg transition-colors";
                    if item.contains_active(&current.get()) {
                        format!("{} text-white", base)
                    } else {
                        format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                    }
                }
            >
                <span class="text-lg">{item.icon}</span>
                {move || (!collapsed.get()).then(|| view! {
                    <span class="ml-3 flex-1 text-left">{label}</span>
                    <span class="text-xs">{move || if is_open() { "▾" } else { "▸" }}</span>
                })}
            </button>

            {move || is_open().then(|| view! {
                <div class="ml-4 mt-1 space-y-1">
                    {item.children.iter().map(|child| view! {
                        <SidebarLink item=*child current=current collapsed=collapsed />
                    }).collect_view()}
                </div>
            })}
        </div>
    }
    .into_view()
}

/// Single routed link
#[component]
fn SidebarLink(item: MenuItem, current: Memo<String>, collapsed: RwSignal<bool>) -> impl IntoView {
    let route = item.route.unwrap_or(menu::DASHBOARD_ROUTE);

    view! {
        <A
            href=route
            class=move || {
                let base = "flex items-center px-3 py-2 rounded-lg transition-colors";
                if menu::is_active(route, &current.get()) {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            <span class="text-lg" title=item.label>{item.icon}</span>
            {move || (!collapsed.get()).then(|| view! { <span class="ml-3">{item.label}</span> })}
        </A>
    }
}
