//! Placeholders mientras una vista carga

use yew::prelude::*;

#[function_component(ReportSkeleton)]
pub fn report_skeleton() -> Html {
    html! {
        <>
            <div class="kpi-grid">
                <div class="kpi-card skeleton" style="height: 90px"></div>
                <div class="kpi-card skeleton" style="height: 90px"></div>
                <div class="kpi-card skeleton" style="height: 90px"></div>
            </div>
            <div class="card skeleton" style="height: 300px; margin-top: 24px"></div>
            <div class="card skeleton" style="height: 200px; margin-top: 24px"></div>
        </>
    }
}

#[function_component(DashboardSkeleton)]
pub fn dashboard_skeleton() -> Html {
    html! {
        <div>
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-text" style="width: 70%"></div>
            <section class="kpis" style="margin-top: 12px">
                { for (0..4).map(|_| html! { <div class="kpi skeleton" style="height: 80px"></div> }) }
            </section>
            <section class="columns" style="margin-top: 16px">
                <div class="section skeleton" style="height: 300px"></div>
                <div class="section skeleton" style="height: 300px"></div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableMessageProps {
    pub colspan: usize,
    pub message: AttrValue,
}

/// Fila única de "Cargando..." / "No hay ..." en una tabla
#[function_component(TableMessage)]
pub fn table_message(props: &TableMessageProps) -> Html {
    html! {
        <tr><td colspan={props.colspan.to_string()}>{ props.message.clone() }</td></tr>
    }
}
