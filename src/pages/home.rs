use crate::config::SiteConfig;
use crate::form::ContactFormController;
use crate::pages::{DesktopHome, MobileHome};
use crate::viewport::{use_layout, Layout};
use leptos::*;

/// Landing page; mounts the shell matching the current window width.
///
/// The contact form controller is owned here so a resize across the
/// breakpoint swaps the shell without losing typed data or submit status.
#[component]
pub fn HomePage() -> impl IntoView {
    provide_context(create_rw_signal(ContactFormController::new()));

    let breakpoint = use_context::<SiteConfig>()
        .unwrap_or_default()
        .mobile_breakpoint_px;
    let layout = use_layout(breakpoint);

    move || match layout.get() {
        Layout::Desktop => view! { <DesktopHome/> }.into_view(),
        Layout::Mobile => view! { <MobileHome/> }.into_view(),
    }
}
