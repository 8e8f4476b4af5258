//! Count Card Component
//!
//! Summary tile showing a single count.

use leptos::*;

use crate::state::models::CountStat;

/// Count tile component
#[component]
pub fn CountCard(stat: CountStat) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{stat.label}</span>
            <div class="text-3xl font-bold mt-2">{format_count(stat.count)}</div>
        </div>
    }
}

/// Whole numbers without decimals, everything else to one place
fn format_count(count: f64) -> String {
    if count.fract() == 0.0 && count.is_finite() {
        format!("{:.0}", count)
    } else {
        format!("{:.1}", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(42.0), "42");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(7.5), "7.5");
    }
}
