//! Claim status page

use crate::app::SubmittedClaim;
use leptos::*;

/// Confirmation view the form navigates to after a successful submission.
///
/// The claim identifier arrives as transient context state; on a direct visit
/// or a reload there is none, and the page points back to the form.
#[component]
pub fn StatusPage() -> impl IntoView {
    let submitted = expect_context::<SubmittedClaim>();

    view! {
        <div class="max-w-md mx-auto mt-8">
            <Show
                when=move || submitted.0.get().is_some()
                fallback=|| view! {
                    <div class="bg-white rounded-lg shadow p-6 text-center">
                        <h2 class="text-2xl font-bold mb-2">"No claim in progress"</h2>
                        <p class="text-gray-600 mb-4">
                            "Submit a claim first to see its status here."
                        </p>
                        <a href="/" class="text-indigo-600 hover:underline">"Go to the claim form"</a>
                    </div>
                }
            >
                <div class="bg-white rounded-lg shadow p-6 text-center">
                    <div class="text-5xl mb-4">"✓"</div>
                    <h2 class="text-2xl font-bold mb-2">"Claim Submitted"</h2>
                    <p class="text-gray-600">
                        "Your reference number is "
                        <span class="font-mono font-semibold text-gray-900">
                            {move || {
                                submitted.0.get().map(|id| id.to_string()).unwrap_or_default()
                            }}
                        </span>
                    </p>
                    <p class="text-gray-600 mt-2">
                        "Keep it for any follow-up about this claim."
                    </p>
                </div>
            </Show>
        </div>
    }
}
