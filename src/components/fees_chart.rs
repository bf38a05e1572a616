use yew::prelude::*;

use crate::models::FinanceReport;
use crate::utils::format::money;

#[derive(Properties, PartialEq)]
pub struct FeesChartProps {
    pub report: FinanceReport,
}

/// Barras emitido/pagado por período, en CSS puro
#[function_component(FeesChart)]
pub fn fees_chart(props: &FeesChartProps) -> Html {
    let report = &props.report;
    if report.by_period.is_empty() {
        return html! { <p class="muted">{"Sin datos por período."}</p> };
    }
    let scale = report.period_scale();
    let width = |value: f64| if scale > 0.0 { value / scale * 100.0 } else { 0.0 };

    html! {
        <div class="fees-chart">
            { for report.by_period.iter().map(|p| html! {
                <div key={p.period.clone()} class="fees-chart-row">
                    <span class="fees-chart-label">{ &p.period }</span>
                    <div class="fees-chart-bars">
                        <div class="bar issued" style={format!("width: {:.1}%", width(p.issued))}
                            title={format!("Emitido {}", money(p.issued))}></div>
                        <div class="bar paid" style={format!("width: {:.1}%", width(p.paid))}
                            title={format!("Pagado {}", money(p.paid))}></div>
                    </div>
                    <span class="fees-chart-value">{ money(p.outstanding) }</span>
                </div>
            }) }
        </div>
    }
}
