//! Landing page: session summary when signed in, entry links when not.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. Reads session state from the auth collaborator and only
//! keeps link feedback state of its own. Following a link unmounts the page,
//! so that state never needs resetting.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthView;
use crate::state::nav::{NavTarget, NavigationUiState};
use crate::util::auth::{AuthContext, use_auth};

pub const APP_TITLE: &str = "DRF Auth App";

fn verified_glyph(verified: bool) -> &'static str {
    if verified { "✅" } else { "❌" }
}

fn email_line(email: &str) -> String {
    format!("Email: {email}")
}

fn verified_line(verified: bool) -> String {
    format!("Email Verified: {}", verified_glyph(verified))
}

fn nav_link_class(target: NavTarget, pending: bool) -> String {
    let variant = match target {
        NavTarget::Login => "nav-button nav-button--primary",
        NavTarget::Register => "nav-button nav-button--secondary",
    };
    if pending { format!("{variant} nav-button--disabled") } else { variant.to_owned() }
}

/// Landing page: loading indicator, welcome panel, or sign-in links.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let nav = RwSignal::new(NavigationUiState::default());

    view! { <LandingView auth=auth nav=nav/> }
}

#[component]
fn LandingView(auth: AuthContext, nav: RwSignal<NavigationUiState>) -> impl IntoView {
    move || match auth.state.with(|s| s.view()) {
        AuthView::Loading => view! {
            <div class="landing-loading">
                <div class="landing-loading__label">"Loading..."</div>
            </div>
        }
        .into_any(),
        AuthView::Authenticated(user) => view! {
            <LandingCard>
                <WelcomePanel user=user auth=auth/>
            </LandingCard>
        }
        .into_any(),
        AuthView::Anonymous => view! {
            <LandingCard>
                <SignInPanel nav=nav/>
            </LandingCard>
        }
        .into_any(),
    }
}

#[component]
fn LandingCard(children: Children) -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1 class="landing-card__title">{APP_TITLE}</h1>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn WelcomePanel(user: User, auth: AuthContext) -> impl IntoView {
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::util::auth::handle_logout(move || auth.logout()));
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <div class="landing-panel">
            <div class="landing-panel__greeting">"Welcome!"</div>
            <div class="landing-panel__detail">{email_line(&user.email)}</div>
            <div class="landing-panel__detail">{verified_line(user.is_email_verified)}</div>
            <button class="landing-button landing-button--danger" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}

#[component]
fn SignInPanel(nav: RwSignal<NavigationUiState>) -> impl IntoView {
    view! {
        <div class="landing-panel">
            <div class="landing-panel__prompt">"Please sign in or create an account"</div>
            <div class="landing-panel__links">
                {NavTarget::ALL
                    .into_iter()
                    .map(|target| view! { <NavLink target=target nav=nav/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Link that shows a spinner once clicked, until the page unloads.
///
/// `rel="external"` keeps the router from resolving the target in-app; the
/// sign-in screens belong to the surrounding application.
#[component]
fn NavLink(target: NavTarget, nav: RwSignal<NavigationUiState>) -> impl IntoView {
    let pending = move || nav.with(|n| n.is_pending(target));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if nav.with_untracked(|n| n.is_pending(target)) {
            ev.prevent_default();
            return;
        }
        nav.update(|n| n.begin(target));
    };

    view! {
        <a
            href=target.path()
            rel="external"
            class=move || nav_link_class(target, pending())
            aria-disabled=move || pending().then_some("true")
            on:click=on_click
        >
            <Show when=pending>
                <span class="spinner" aria-hidden="true"></span>
            </Show>
            <span>{move || nav.with(|n| n.label_for(target))}</span>
        </a>
    }
}
