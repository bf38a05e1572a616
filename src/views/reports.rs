// ============================================================================
// REPORTS VIEW - reporte financiero
// ============================================================================
// Los inputs editan `draft`; "Generar Reporte" lo aplica y fuerza recarga.
// Si la carga falla se limpian los datos y el error va inline.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{FeesChart, KpiCard, ReportSkeleton};
use crate::hooks::{capabilities, use_me, use_resource, LoadOptions};
use crate::models::{FinanceReport, ReportFilters, ReportQuery};
use crate::services::reports::finance_report;
use crate::services::ApiError;
use crate::utils::browser::print_page;
use crate::utils::format::money;

const MSG_LOAD_FAILED: &str = "No se pudo generar el reporte. Por favor, intenta de nuevo.";
const CSV_FILE_NAME: &str = "reporte_financiero.csv";

async fn load_report(query: ReportQuery) -> Result<FinanceReport, ApiError> {
    finance_report(&query).await
}

#[derive(Clone, Copy)]
enum Filter {
    From,
    To,
    Owner,
}

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let me = use_me();
    let caps = capabilities(me.data());

    let draft = use_state(ReportFilters::default);
    let applied = use_state(ReportFilters::default);

    let query = me.data().map(|me| ReportQuery::scoped(&applied, me));
    let report = use_resource(LoadOptions::clear_inline(MSG_LOAD_FAILED), query, load_report);

    let on_filter = |filter: Filter| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            match filter {
                Filter::From => next.from = value,
                Filter::To => next.to = value,
                Filter::Owner => next.owner = value,
            }
            draft.set(next);
        })
    };

    let on_generate = {
        let draft = draft.clone();
        let applied = applied.clone();
        let reload = report.reload.clone();
        Callback::from(move |_: MouseEvent| {
            applied.set((*draft).clone());
            reload.emit(());
        })
    };

    let loading = report.loading();
    let data = report.data().cloned();
    let disabled_export = data.is_none() || loading;

    let content = if loading {
        html! { <ReportSkeleton /> }
    } else if let Some(error) = report.error() {
        html! { <p class="error-text">{ error.to_string() }</p> }
    } else {
        match data.clone().filter(|d| d.overall.is_some()) {
            None => html! { <p>{"No hay datos para mostrar con los filtros seleccionados."}</p> },
            Some(data) => html! {
                <>
                    <section class="kpi-grid">
                        { for data.kpi_cards().into_iter().map(|card| html! {
                            <KpiCard title={card.title} value={card.value} class={card.class} />
                        }) }
                    </section>

                    <section class="card">
                        <h3>{"Desglose por Período"}</h3>
                        <div style="max-height: 400px; overflow-y: auto">
                            <FeesChart report={data.clone()} />
                        </div>
                    </section>

                    <section class="card">
                        <h3>{"Desglose por Tipo de Expensa"}</h3>
                        <table class="table">
                            <thead>
                                <tr><th>{"Tipo"}</th><th>{"# Cuotas"}</th><th>{"Emitido"}</th><th>{"Pagado"}</th><th>{"Pendiente"}</th></tr>
                            </thead>
                            <tbody>
                                { for data.by_type.iter().map(|row| html! {
                                    <tr key={row.expense_type.clone()}>
                                        <td>{ &row.expense_type }</td>
                                        <td>{ row.count.to_string() }</td>
                                        <td>{ money(row.issued) }</td>
                                        <td>{ money(row.paid) }</td>
                                        <td>{ money(row.outstanding) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </section>
                </>
            },
        }
    };

    let csv_href = match data.as_ref().map(FinanceReport::csv_data_url) {
        Some(Ok(href)) => href,
        Some(Err(e)) => {
            log::error!("❌ No se pudo generar el CSV: {}", e);
            String::new()
        }
        None => String::new(),
    };

    html! {
        <div style="padding: 24px; display: grid; gap: 24px">
            <h1>{"Reporte Financiero"}</h1>

            <div class="card report-filters">
                <input type="month" value={draft.from.clone()} oninput={on_filter(Filter::From)} />
                <input type="month" value={draft.to.clone()} oninput={on_filter(Filter::To)} />
                if caps.report_owner_filter {
                    <input
                        placeholder="Filtrar por ID de Propietario"
                        value={draft.owner.clone()}
                        oninput={on_filter(Filter::Owner)}
                    />
                }
                <button onclick={on_generate} disabled={loading || me.data().is_none()}>
                    { if loading { "Generando..." } else { "Generar Reporte" } }
                </button>
                <div style="margin-left: auto; display: flex; gap: 12px">
                    if disabled_export {
                        <button class="btn-muted" disabled=true>{"Exportar CSV"}</button>
                    } else {
                        <a class="button btn-muted" href={csv_href} download={CSV_FILE_NAME}>{"Exportar CSV"}</a>
                    }
                    <button class="btn-secondary" onclick={Callback::from(|_: MouseEvent| print_page())} disabled={disabled_export}>
                        {"Imprimir / PDF"}
                    </button>
                </div>
            </div>

            { content }
        </div>
    }
}
