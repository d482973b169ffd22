//! Brand selector with the brand-specific notification acknowledgment

use claims_core::{brand_catalog, notice_for};
use leptos::*;

/// Brand picker plus the per-brand notice the user must acknowledge.
///
/// Reports to the parent through two callbacks: the selected brand string and
/// the acknowledgment flag. Switching brands resets the acknowledgment, so a
/// tick given for one brand's notice never carries over to another's.
#[component]
pub fn BrandSelector(
    #[prop(into)] on_brand_select: Callback<String>,
    #[prop(into)] on_notification_acknowledge: Callback<bool>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(String::new());
    let (acknowledged, set_acknowledged) = create_signal(false);

    let select_brand = move |ev: ev::Event| {
        let brand = event_target_value(&ev);
        set_selected.set(brand.clone());
        on_brand_select.call(brand);
        set_acknowledged.set(false);
        on_notification_acknowledge.call(false);
    };

    let toggle_acknowledged = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        set_acknowledged.set(checked);
        on_notification_acknowledge.call(checked);
    };

    let notice = move || notice_for(&selected.get()).map(str::to_string);

    view! {
        <div>
            <label for="brand" class="block text-sm font-medium text-gray-700">"Brand"</label>
            <select
                id="brand"
                name="brand"
                required
                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                on:change=select_brand
                prop:value=selected
            >
                <option value="">"Select a brand..."</option>
                {brand_catalog()
                    .iter()
                    .map(|brand| view! { <option value=brand.slug>{brand.name}</option> })
                    .collect_view()}
            </select>

            <Show when=move || notice().is_some()>
                <div class="mt-3 p-4 bg-amber-50 border border-amber-200 rounded-md">
                    <p class="text-sm text-gray-700">{move || notice().unwrap_or_default()}</p>
                    <label class="mt-3 flex items-start">
                        <input
                            type="checkbox"
                            class="mt-0.5 h-4 w-4 rounded border-gray-300"
                            on:change=toggle_acknowledged
                            prop:checked=acknowledged
                        />
                        <span class="ml-2 text-sm text-gray-700">
                            "I have read and understood this notice."
                        </span>
                    </label>
                </div>
            </Show>
        </div>
    }
}
