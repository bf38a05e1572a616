// ============================================================================
// APP - shell con navegación lateral
// ============================================================================

use yew::prelude::*;

use crate::components::ToastProvider;
use crate::config::AppConfig;
use crate::utils::browser::reload_page;
use crate::utils::constants::STORAGE_KEY_TOKEN;
use crate::utils::storage::remove_from_storage;
use crate::views::{DashboardView, FeesView, ReportsView, ReservationsView, UnitsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Fees,
    Units,
    Reservations,
    Reports,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Dashboard, Page::Fees, Page::Units, Page::Reservations, Page::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Fees => "Cuotas",
            Page::Units => "Unidades",
            Page::Reservations => "Reservas",
            Page::Reports => "Reportes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Fees => "💳",
            Page::Units => "🏢",
            Page::Reservations => "📅",
            Page::Reports => "📄",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let page = use_state(Page::default);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            log::debug!("🧭 Navegando a {}", next.label());
            page.set(next);
        })
    };

    let on_logout = Callback::from(|_: MouseEvent| {
        if let Err(e) = remove_from_storage(STORAGE_KEY_TOKEN) {
            log::warn!("⚠️ No se pudo borrar el token: {}", e);
        }
        log::info!("👋 Sesión cerrada");
        reload_page();
    });

    let content = match *page {
        Page::Dashboard => html! { <DashboardView on_navigate={on_navigate.clone()} /> },
        Page::Fees => html! { <FeesView /> },
        Page::Units => html! { <UnitsView /> },
        Page::Reservations => html! { <ReservationsView /> },
        Page::Reports => html! { <ReportsView /> },
    };

    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <ToastProvider duration_ms={props.config.ui_config.toast_duration_ms}>
                <div class="layout">
                    <aside class="sidebar">
                        <div class="brand">{"Smart Condominium"}</div>
                        <nav>
                            { for Page::ALL.iter().map(|p| {
                                let target = *p;
                                let onclick = on_navigate.reform(move |_: MouseEvent| target);
                                let class = classes!("nav-item", (*page == target).then_some("active"));
                                html! {
                                    <button key={target.label()} {class} {onclick}>
                                        <span class="nav-icon">{ target.icon() }</span>
                                        { target.label() }
                                    </button>
                                }
                            }) }
                        </nav>
                        <button class="nav-item logout" onclick={on_logout}>{"Cerrar sesión"}</button>
                    </aside>
                    <main class="content">{ content }</main>
                </div>
            </ToastProvider>
        </ContextProvider<AppConfig>>
    }
}
