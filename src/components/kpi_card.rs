use yew::prelude::*;

use crate::utils::format::money;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: f64,
    #[prop_or_default]
    pub class: AttrValue,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="kpi-card">
            <h4>{ props.title.clone() }</h4>
            <p class={classes!("amount", props.class.to_string())}>{ money(props.value) }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentProgressProps {
    /// 0..=100
    pub percentage: f64,
}

#[function_component(PaymentProgress)]
pub fn payment_progress(props: &PaymentProgressProps) -> Html {
    let pct = props.percentage.clamp(0.0, 100.0);
    let color = if pct >= 100.0 { "var(--brand-500)" } else { "#f59e0b" };
    html! {
        <div class="progress-track">
            <div
                class="progress-bar"
                style={format!("width: {:.1}%; background-color: {}; height: 100%", pct, color)}
            />
        </div>
    }
}
