//! Claim submission form page

use crate::api::ClaimsApi;
use crate::app::SubmittedClaim;
use crate::components::BrandSelector;
use claims_core::{ClaimField, ClaimForm};
use leptos::*;
use leptos_router::*;

#[component]
pub fn ClaimFormPage() -> impl IntoView {
    let form = create_rw_signal(ClaimForm::default());
    let api = expect_context::<ClaimsApi>();
    let submitted = expect_context::<SubmittedClaim>();
    let navigate = use_navigate();

    let on_brand_select = move |brand: String| {
        form.update(|f| *f = std::mem::take(f).report_brand(brand));
    };
    let on_notification_acknowledge = move |acknowledged: bool| {
        form.update(|f| *f = std::mem::take(f).report_acknowledgment(acknowledged));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let (next, submission) = form.get_untracked().begin_submission();
        form.set(next);
        let Some(submission) = submission else {
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.submit_claim(&submission).await;
            if let Err(err) = &result {
                tracing::error!("error submitting claim: {err}");
            }
            let done = form.get_untracked().complete_submission(result);
            let claim_id = done.status().claim_id().cloned();
            form.set(done);
            if let Some(id) = claim_id {
                submitted.0.set(Some(id));
                navigate("/status", Default::default());
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-8">
            <h2 class="text-2xl font-bold mb-4">"Submit a Claim"</h2>

            <Show when=move || form.with(|f| f.status().error().is_some())>
                <p class="text-red-500 mb-4">
                    {move || form.with(|f| f.status().error().unwrap_or_default().to_string())}
                </p>
            </Show>

            <form on:submit=on_submit class="space-y-4">
                <Field label="Order Number" field=ClaimField::OrderNumber form=form/>
                <Field label="Email" input_type="email" field=ClaimField::Email form=form/>
                <Field label="Name" field=ClaimField::Name form=form/>
                <Field label="Address" field=ClaimField::Address form=form/>
                <Field label="Phone Number" input_type="tel" field=ClaimField::PhoneNumber form=form/>

                <BrandSelector
                    on_brand_select=on_brand_select
                    on_notification_acknowledge=on_notification_acknowledge
                />

                <div>
                    <label for="problemDescription" class="block text-sm font-medium text-gray-700">
                        "Problem Description"
                    </label>
                    <textarea
                        id="problemDescription"
                        name="problemDescription"
                        required
                        rows=4
                        class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                        prop:value=move || {
                            form.with(|f| f.draft().problem_description.clone())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                *f = std::mem::take(f).edit(ClaimField::ProblemDescription, value);
                            });
                        }
                    ></textarea>
                </div>

                <button
                    type="submit"
                    disabled=move || form.with(|f| !f.can_submit())
                    class="w-full py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                >
                    {move || {
                        if form.with(|f| f.status().is_submitting()) {
                            "Submitting..."
                        } else {
                            "Submit Claim"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    field: ClaimField,
    form: RwSignal<ClaimForm>,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                required
                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm"
                prop:value=move || form.with(|f| f.draft().field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *f = std::mem::take(f).edit(field, value));
                }
            />
        </div>
    }
}
