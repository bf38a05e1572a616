use yew::prelude::*;

use super::modal::Modal;
use crate::models::UnitDetail;
use crate::utils::format::{format_local_date, local_offset, money_plain};

#[derive(Properties, PartialEq)]
pub struct UnitDetailModalProps {
    pub is_open: bool,
    pub unit: Option<UnitDetail>,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section class="detail-section">
            <h3>{ props.title.clone() }</h3>
            { props.children.clone() }
        </section>
    }
}

#[function_component(UnitDetailModal)]
pub fn unit_detail_modal(props: &UnitDetailModalProps) -> Html {
    let Some(unit) = &props.unit else {
        return html! {};
    };
    let offset = local_offset();
    let owner = unit.owner.as_ref();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let footer = html! { <button type="button" onclick={on_close}>{"Cerrar"}</button> };

    html! {
        <Modal
            is_open={props.is_open}
            on_close={props.on_close.clone()}
            title={format!("Detalles de la Unidad: {}", unit.code)}
            wide=true
            {footer}
        >
            <Section title="Información del Propietario">
                <p><strong>{"Nombre: "}</strong>{ unit.owner_full_name() }</p>
                <p><strong>{"Usuario: "}</strong>{ format!("@{}", owner.map(|o| o.username.as_str()).unwrap_or("")) }</p>
                <p><strong>{"Email: "}</strong>{ owner.and_then(|o| o.email.clone()).unwrap_or_default() }</p>
                <p><strong>{"Teléfono: "}</strong>{ unit.owner_phone() }</p>
            </Section>

            <Section title="Historial de Cuotas Recientes">
                if unit.fees.is_empty() {
                    <p>{"No hay cuotas registradas para esta unidad."}</p>
                } else {
                    <table class="table">
                        <thead><tr><th>{"Período"}</th><th>{"Tipo"}</th><th>{"Monto"}</th><th>{"Estado"}</th></tr></thead>
                        <tbody>
                            { for unit.recent_fees().iter().map(|fee| html! {
                                <tr key={fee.id.to_string()}>
                                    <td>{ &fee.period }</td>
                                    <td>{ fee.expense_type_name.clone().unwrap_or_default() }</td>
                                    <td>{ money_plain(fee.amount) }</td>
                                    <td><span class={fee.badge_class()}>{ &fee.status }</span></td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            </Section>

            <Section title="Reportes de Mantenimiento">
                if unit.maintenance_requests.is_empty() {
                    <p>{"No hay reportes de mantenimiento para esta unidad."}</p>
                } else {
                    { for unit.maintenance_requests.iter().map(|req| html! {
                        <div key={req.id.to_string()} class="maintenance-item">
                            <strong>{ &req.title }</strong>
                            { format!(" ({}) - {}", req.status,
                                req.created_at.as_deref().map(|d| format_local_date(d, offset)).unwrap_or_default()) }
                        </div>
                    }) }
                }
            </Section>
        </Modal>
    }
}
