//! Main application component

use crate::api::ClaimsApi;
use crate::components::*;
use crate::pages::*;
use claims_core::ClaimId;
use leptos::*;
use leptos_router::*;

/// The claim identifier handed from the form to the status view after a
/// successful submission. Transient: never in the URL, never persisted.
#[derive(Clone, Copy)]
pub struct SubmittedClaim(pub RwSignal<Option<ClaimId>>);

#[component]
pub fn App() -> impl IntoView {
    provide_context(ClaimsApi::same_origin());
    provide_context(SubmittedClaim(create_rw_signal(None)));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <Nav/>
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=ClaimFormPage/>
                        <Route path="/status" view=StatusPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
