// ============================================================================
// FEES VIEW - cuotas y estado de cuenta
// ============================================================================
// Admin: todas las cuotas + tipos de expensa, panel de emisión y pago manual.
// Residente: solo sus cuotas (`?mine=1`) y pago online por QR.
// ============================================================================

use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{use_toast, PaymentProgress, PaymentQrModal, RegisterPaymentModal, TableMessage};
use crate::components::toast::ToastKind;
use crate::hooks::{capabilities, refresh_on_success, spawn_mutation, spawn_mutation_with, use_me, use_resource, LoadOptions, MutationMessages};
use crate::models::fee::PaymentRequest;
use crate::models::{ExpenseType, Fee, FeeQuery, IssueFeesForm, User};
use crate::services::fees::{
    create_payment_preference, issue_monthly_fees, list_expense_types, list_fees, list_my_fees,
    register_manual_payment,
};
use crate::services::ApiError;
use crate::utils::format::{money_plain, month_of};

const MSG_LOAD_FAILED: &str = "Error al cargar los datos.";

const ISSUE_MESSAGES: MutationMessages = MutationMessages {
    loading: "Emitiendo cuotas...",
    success: "Cuotas emitidas.",
    failure: "No se pudieron emitir las cuotas.",
};

const PAYMENT_MESSAGES: MutationMessages = MutationMessages {
    loading: "Registrando pago...",
    success: "Pago registrado correctamente.",
    failure: "No se pudo registrar el pago.",
};

#[derive(Debug, Clone, PartialEq, Default)]
struct FeesData {
    fees: Vec<Fee>,
    expense_types: Vec<ExpenseType>,
}

async fn load_fees(me: User) -> Result<FeesData, ApiError> {
    if me.is_admin() {
        let (fees, expense_types) =
            futures::try_join!(list_fees(FeeQuery { mine: false }), list_expense_types())?;
        Ok(FeesData { fees, expense_types })
    } else {
        Ok(FeesData {
            fees: list_my_fees().await?,
            expense_types: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Loading,
    Empty,
    Rows,
}

/// Cada carga (también las recargas tras pagar o emitir) muestra la fila de carga
fn list_state(loading: bool, fees: &[Fee]) -> ListState {
    if loading {
        ListState::Loading
    } else if fees.is_empty() {
        ListState::Empty
    } else {
        ListState::Rows
    }
}

#[function_component(FeesView)]
pub fn fees_view() -> Html {
    let me = use_me();
    let caps = capabilities(me.data());
    let toast = use_toast();

    let data = use_resource(LoadOptions::keep(MSG_LOAD_FAILED), me.data().cloned(), load_fees);

    let manual_fee = use_state(|| None::<Fee>);
    let qr_open = use_state(|| false);
    let qr = use_state(|| None::<AttrValue>);
    let paying = use_state(|| false);

    let reload = data.reload.clone();

    let on_online_pay = {
        let toast = toast.clone();
        let qr_open = qr_open.clone();
        let qr = qr.clone();
        let paying = paying.clone();
        Callback::from(move |fee_id: u64| {
            let toast = toast.clone();
            let qr_open = qr_open.clone();
            let qr = qr.clone();
            let paying = paying.clone();
            qr.set(None);
            qr_open.set(true);
            paying.set(true);
            let id = toast.loading("Generando QR...");
            wasm_bindgen_futures::spawn_local(async move {
                match create_payment_preference(fee_id).await {
                    Ok(preference) => match preference.qr_code_base64() {
                        Some(code) => {
                            qr.set(Some(AttrValue::from(code.to_string())));
                            toast.resolve(id, ToastKind::Success, "QR generado con éxito.");
                        }
                        None => {
                            log::warn!("⚠️ Preferencia de pago sin QR (cuota #{})", fee_id);
                            qr_open.set(false);
                            toast.resolve(id, ToastKind::Error, "No se pudo generar el código QR.");
                        }
                    },
                    Err(e) => {
                        log::error!("❌ Pago online cuota #{}: {}", fee_id, e);
                        qr_open.set(false);
                        toast.resolve(id, ToastKind::Error, "No se pudo iniciar el proceso de pago.");
                    }
                }
                paying.set(false);
            });
        })
    };

    let on_manual_pay = {
        let manual_fee = manual_fee.clone();
        Callback::from(move |fee: Fee| manual_fee.set(Some(fee)))
    };

    let on_close_payment = {
        let manual_fee = manual_fee.clone();
        Callback::from(move |_| manual_fee.set(None))
    };

    let on_save_payment = {
        let toast = toast.clone();
        let close = on_close_payment.clone();
        let reload = reload.clone();
        Callback::from(move |(fee_id, payment): (u64, PaymentRequest)| {
            spawn_mutation(
                toast.clone(),
                PAYMENT_MESSAGES,
                async move { register_manual_payment(fee_id, &payment).await },
                refresh_on_success(Some(close.clone()), reload.clone()),
            );
        })
    };

    let on_close_qr = {
        let qr_open = qr_open.clone();
        Callback::from(move |_| qr_open.set(false))
    };

    if me.data().is_none() {
        return html! { <div style="padding: 24px">{"Cargando..."}</div> };
    }

    let colspan: usize = if caps.unit_column { 6 } else { 5 };
    let (fees, expense_types) = data
        .data()
        .map(|d| (d.fees.clone(), d.expense_types.clone()))
        .unwrap_or_default();

    let body = match list_state(data.loading(), &fees) {
        ListState::Loading => html! { <TableMessage {colspan} message="Cargando cuotas..." /> },
        ListState::Empty => html! { <TableMessage {colspan} message="No hay cuotas para mostrar." /> },
        ListState::Rows => html! {
            { for fees.iter().map(|fee| html! {
                <FeeRow
                    key={fee.id}
                    fee={fee.clone()}
                    show_unit={caps.unit_column}
                    can_register={caps.register_payments}
                    paying={*paying}
                    on_online_pay={on_online_pay.clone()}
                    on_manual_pay={on_manual_pay.clone()}
                />
            }) }
        },
    };

    html! {
        <div style="padding: 24px; display: grid; gap: 24px">
            <h1>{"Cuotas y Estado de Cuenta"}</h1>

            if caps.issue_fees {
                <AdminPanel {expense_types} on_issued={reload.clone()} />
            }

            <section class="card">
                <h3>{ if caps.list_all_fees { "Listado General de Cuotas" } else { "Mi Estado de Cuenta" } }</h3>
                <table class="table">
                    <thead>
                        <tr>
                            if caps.unit_column { <th>{"Unidad"}</th> }
                            <th>{"Tipo"}</th>
                            <th>{"Periodo"}</th>
                            <th>{"Monto / Pagado"}</th>
                            <th>{"Estado"}</th>
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </section>

            <PaymentQrModal is_open={*qr_open} qr_base64={(*qr).clone()} on_close={on_close_qr} />

            if caps.register_payments {
                <RegisterPaymentModal
                    is_open={manual_fee.is_some()}
                    fee={(*manual_fee).clone()}
                    on_close={on_close_payment}
                    on_save={on_save_payment}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeeRowProps {
    fee: Fee,
    show_unit: bool,
    can_register: bool,
    paying: bool,
    on_online_pay: Callback<u64>,
    on_manual_pay: Callback<Fee>,
}

#[function_component(FeeRow)]
fn fee_row(props: &FeeRowProps) -> Html {
    let fee = &props.fee;
    let online = {
        let on_online_pay = props.on_online_pay.clone();
        let id = fee.id;
        Callback::from(move |_: MouseEvent| on_online_pay.emit(id))
    };
    let manual = {
        let on_manual_pay = props.on_manual_pay.clone();
        let fee = fee.clone();
        Callback::from(move |_: MouseEvent| on_manual_pay.emit(fee.clone()))
    };

    html! {
        <tr>
            if props.show_unit { <td>{ fee.unit_code.clone().unwrap_or_default() }</td> }
            <td>{ fee.expense_type_name.clone().unwrap_or_default() }</td>
            <td>{ &fee.period }</td>
            <td>
                { format!("{} / {}", money_plain(fee.amount), money_plain(fee.total_paid)) }
                <PaymentProgress percentage={fee.paid_percentage()} />
            </td>
            <td><span class={fee.badge_class()}>{ &fee.status }</span></td>
            <td>
                <div style="display: flex; gap: 8px">
                    if !fee.is_paid() {
                        <button onclick={online} disabled={props.paying}>{"Pagar Online"}</button>
                        if props.can_register {
                            <button class="btn-secondary" onclick={manual}>{"Registrar Pago"}</button>
                        }
                    }
                </div>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct AdminPanelProps {
    expense_types: Vec<ExpenseType>,
    on_issued: Callback<()>,
}

#[function_component(AdminPanel)]
fn admin_panel(props: &AdminPanelProps) -> Html {
    let form = use_state(|| IssueFeesForm::new(month_of(Utc::now())));
    let issuing = use_state(|| false);
    let toast = use_toast();

    let on_period = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(IssueFeesForm { period: input.value(), ..(*form).clone() });
        })
    };

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(IssueFeesForm { expense_type_id: select.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let issuing = issuing.clone();
        let on_issued = props.on_issued.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    toast.error(err.to_string());
                    return;
                }
            };
            issuing.set(true);
            let done = issuing.clone();
            let on_issued = on_issued.clone();
            spawn_mutation_with(
                toast.clone(),
                ISSUE_MESSAGES,
                async move {
                    let detail = issue_monthly_fees(&request).await;
                    done.set(false);
                    detail
                },
                |detail: &Option<String>| detail.clone(),
                refresh_on_success(None, on_issued),
            );
        })
    };

    html! {
        <section class="card">
            <h3>{"Panel de Administrador"}</h3>
            <form class="issue-form" onsubmit={on_submit}>
                <label>{"Período (YYYY-MM)"}
                    <input type="month" value={form.period.clone()} oninput={on_period} required=true />
                </label>
                <label>{"Tipo de Expensa"}
                    <select onchange={on_type} required=true>
                        <option value="" selected={form.expense_type_id.is_empty()}>{"-- Seleccionar --"}</option>
                        { for props.expense_types.iter().map(|et| {
                            let value = et.id.to_string();
                            let selected = value == form.expense_type_id;
                            html! { <option key={et.id} {value} {selected}>{ &et.name }</option> }
                        }) }
                    </select>
                </label>
                <button type="submit" disabled={*issuing}>
                    { if *issuing { "Emitiendo..." } else { "Emitir Cuotas" } }
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fees() -> Vec<Fee> {
        serde_json::from_str(r#"[{"id": 1, "period": "2024-03", "amount": "80.00", "status": "PENDING"}]"#).unwrap()
    }

    #[test]
    fn reload_after_payment_shows_loading_row_over_stale_rows() {
        assert_eq!(list_state(true, &fees()), ListState::Loading);
        assert_eq!(list_state(true, &[]), ListState::Loading);
    }

    #[test]
    fn settled_list_shows_rows_or_empty_message() {
        assert_eq!(list_state(false, &fees()), ListState::Rows);
        assert_eq!(list_state(false, &[]), ListState::Empty);
    }
}
