//! Forgot-password route. Reset is handled out of band; this page only
//! points the user back to the Session Gate.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Forgot Password"</h1>
                <p>"Password reset is not available online. Please contact your care team to reset your password."</p>
                <div class="auth-card__links">
                    <a href=routes::LOGIN>"Back to Login"</a>
                </div>
            </div>
        </div>
    }
}
