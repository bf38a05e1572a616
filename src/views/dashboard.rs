// ============================================================================
// DASHBOARD - KPIs (admin), resumen financiero y actividad reciente
// ============================================================================

use chrono::Utc;
use yew::prelude::*;

use crate::app::Page;
use crate::components::{DashboardSkeleton, FeesChart};
use crate::config::DashboardConfig;
use crate::hooks::resource::ResourceState;
use crate::hooks::{capabilities, use_config, use_me, use_resource, LoadOptions};
use crate::models::dashboard::{recent_activity, ActivityKind};
use crate::models::{ActivityItem, DashboardStats, FinanceReport, ReportQuery, User};
use crate::services::activity::{list_maintenance_requests, list_notices};
use crate::services::fees::list_my_fees;
use crate::services::reports::{dashboard_stats, finance_report};
use crate::services::ApiError;
use crate::utils::format::{money, month_of, relative_time, shift_month};

const MSG_LOAD_FAILED: &str = "No se pudo cargar el dashboard.";

#[derive(Debug, Clone, PartialEq, Default)]
struct DashboardData {
    stats: Option<DashboardStats>,
    report: Option<FinanceReport>,
    activity: Vec<ActivityItem>,
}

/// Todo en paralelo; las lecturas de admin se resuelven a None para el resto
async fn load_dashboard(me: User, config: DashboardConfig) -> Result<DashboardData, ApiError> {
    let admin = me.is_admin();
    let to = month_of(Utc::now());
    let from = shift_month(&to, -config.report_months).unwrap_or_else(|| to.clone());

    let stats = async move {
        if admin {
            dashboard_stats().await.map(Some)
        } else {
            Ok(None)
        }
    };
    let report = async move {
        if admin {
            let query = ReportQuery::range(from, to);
            finance_report(&query).await.map(Some)
        } else {
            Ok(None)
        }
    };

    let (stats, notices, fees, maintenance, report) = futures::try_join!(
        stats,
        list_notices(config.notices_limit),
        list_my_fees(),
        list_maintenance_requests(),
        report,
    )?;

    let activity = recent_activity(&notices, &fees, &maintenance, config.activity_limit);
    log::info!("📊 Dashboard: {} items de actividad", activity.len());
    Ok(DashboardData { stats, report, activity })
}

fn chart_heading(report_months: i32) -> String {
    format!("Resumen Financiero (Últimos {} Meses)", report_months)
}

/// None = skeleton. Si la carga falla sin datos previos queda el dashboard vacío.
fn dashboard_content(state: &ResourceState<DashboardData>) -> Option<DashboardData> {
    if state.loading {
        return None;
    }
    Some(state.data.clone().unwrap_or_default())
}

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub on_navigate: Callback<Page>,
}

#[derive(Properties, PartialEq)]
struct QuickActionProps {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    page: Page,
    on_navigate: Callback<Page>,
}

#[function_component(QuickAction)]
fn quick_action(props: &QuickActionProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };
    html! {
        <button type="button" class="quick-action-link" {onclick}>
            <div class="quick-action-icon">{ props.icon }</div>
            <div>
                <div class="quick-action-title">{ props.title }</div>
                <div class="muted">{ props.desc }</div>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityRowProps {
    item: ActivityItem,
    on_navigate: Callback<Page>,
}

#[function_component(ActivityRow)]
fn activity_row(props: &ActivityRowProps) -> Html {
    let item = &props.item;
    let badge = if item.is_informational() { "badge gray" } else { "badge warn" };
    let when = item
        .date
        .map(|date| relative_time(date, Utc::now()))
        .unwrap_or_default();

    let body = html! {
        <div class="activity-item">
            <div class="quick-action-icon" style="width: 36px; height: 36px">{ item.kind.icon() }</div>
            <div>
                <div style="font-weight: 700">
                    { &item.title }{" "}
                    <span class={badge} style="margin-left: 6px">{ &item.status }</span>
                </div>
                <div class="muted">{ &item.detail }</div>
                <div class="muted" style="font-size: 12px">{ format!("⏰ {}", when) }</div>
            </div>
        </div>
    };

    // Solo las cuotas tienen vista propia
    if item.kind == ActivityKind::Fee {
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Fees))
        };
        html! { <a class="activity-item-link" href="#" {onclick}>{ body }</a> }
    } else {
        body
    }
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let config = use_config();
    let me = use_me();
    let caps = capabilities(me.data());
    let report_months = config.dashboard_config.report_months;

    let dashboard = use_resource(
        LoadOptions::keep(MSG_LOAD_FAILED),
        me.data().cloned(),
        move |me: User| load_dashboard(me, config.dashboard_config),
    );

    let Some(data) = dashboard_content(&dashboard.state) else {
        return html! { <DashboardSkeleton /> };
    };
    let stats = data.stats.unwrap_or_default();
    let on_navigate = props.on_navigate.clone();

    html! {
        <div>
            <h1>{"Dashboard"}</h1>
            <p class="muted">{"Bienvenido al sistema de gestión Smart Condominium"}</p>

            if caps.dashboard_kpis {
                <section class="kpis" style="margin-top: 12px">
                    <div class="kpi"><h4>{"Total Usuarios"}</h4><div class="big">{ stats.total_users.to_string() }</div></div>
                    <div class="kpi"><h4>{"Unidades Activas"}</h4><div class="big">{ stats.active_units.to_string() }</div></div>
                    <div class="kpi"><h4>{"Cuotas Pendientes"}</h4><div class="big">{ money(stats.pending_fees_total) }</div></div>
                    <div class="kpi"><h4>{"Reportes Abiertos"}</h4><div class="big">{ stats.open_maintenance_requests.to_string() }</div></div>
                </section>
            }

            if caps.dashboard_chart {
                if let Some(report) = data.report.clone() {
                    <section class="card" style="margin-top: 24px">
                        <h3>{ chart_heading(report_months) }</h3>
                        <FeesChart {report} />
                    </section>
                }
            }

            <section class="columns" style="margin-top: 24px">
                <div class="section">
                    <h3>{"Acciones Rápidas"}</h3>
                    <div style="display: grid; gap: 12px">
                        <QuickAction icon="📅" title="Reservas" desc="Agendar áreas comunes" page={Page::Reservations} on_navigate={on_navigate.clone()} />
                        <QuickAction icon="💳" title="Cuotas" desc="Consultar estado de cuenta" page={Page::Fees} on_navigate={on_navigate.clone()} />
                        <QuickAction icon="🏢" title="Unidades" desc="Administrar propiedades" page={Page::Units} on_navigate={on_navigate.clone()} />
                        <QuickAction icon="📄" title="Reportes" desc="Generar informes" page={Page::Reports} on_navigate={on_navigate.clone()} />
                    </div>
                </div>

                <div class="section">
                    <h3>{"Actividad Reciente"}</h3>
                    <div style="display: grid; gap: 12px">
                        if data.activity.is_empty() {
                            <p>{"No hay actividad reciente."}</p>
                        } else {
                            { for data.activity.iter().map(|item| html! {
                                <ActivityRow key={item.key.clone()} item={item.clone()} on_navigate={on_navigate.clone()} />
                            }) }
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::resource::{FailurePolicy, ResourceAction};

    #[test]
    fn skeleton_only_while_loading() {
        let state = ResourceState::<DashboardData>::new(FailurePolicy::KeepPrevious);
        assert_eq!(dashboard_content(&state), None);
        let state = state.apply(ResourceAction::Begin(1)).unwrap();
        assert_eq!(dashboard_content(&state), None);
    }

    #[test]
    fn failed_first_load_renders_an_empty_dashboard() {
        let state = ResourceState::<DashboardData>::new(FailurePolicy::KeepPrevious)
            .apply(ResourceAction::Begin(1))
            .unwrap()
            .apply(ResourceAction::Failed(1, MSG_LOAD_FAILED.into()))
            .unwrap();
        let data = dashboard_content(&state).unwrap();
        assert!(data.activity.is_empty());
        assert_eq!(data.stats, None);
        assert_eq!(data.report, None);
    }

    #[test]
    fn chart_heading_follows_the_configured_window() {
        assert_eq!(chart_heading(6), "Resumen Financiero (Últimos 6 Meses)");
        assert_eq!(chart_heading(12), "Resumen Financiero (Últimos 12 Meses)");
    }

    #[test]
    fn loaded_data_is_shown_as_is() {
        let loaded = DashboardData { report: Some(FinanceReport::default()), ..DashboardData::default() };
        let state = ResourceState::<DashboardData>::new(FailurePolicy::KeepPrevious)
            .apply(ResourceAction::Begin(1))
            .unwrap()
            .apply(ResourceAction::Loaded(1, loaded.clone()))
            .unwrap();
        assert_eq!(dashboard_content(&state), Some(loaded));
    }
}
