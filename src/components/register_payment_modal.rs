// ============================================================================
// REGISTER PAYMENT MODAL - pago manual de una cuota (admin)
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::modal::Modal;
use super::toast::use_toast;
use crate::models::fee::PaymentRequest;
use crate::models::{Fee, PaymentForm, PaymentMethod};

#[derive(Properties, PartialEq)]
pub struct RegisterPaymentModalProps {
    pub is_open: bool,
    pub fee: Option<Fee>,
    pub on_close: Callback<()>,
    /// (id de cuota, pago validado)
    pub on_save: Callback<(u64, PaymentRequest)>,
}

#[function_component(RegisterPaymentModal)]
pub fn register_payment_modal(props: &RegisterPaymentModalProps) -> Html {
    let form = use_state(PaymentForm::default);
    let toast = use_toast();

    // Sincroniza el formulario cuando cambia la cuota
    {
        let form = form.clone();
        use_effect_with(props.fee.clone(), move |fee| {
            if let Some(fee) = fee {
                form.set(PaymentForm::for_fee(fee));
            }
            || ()
        });
    }

    let Some(fee) = props.fee.clone() else {
        return html! {};
    };

    let on_amount = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(PaymentForm { amount: input.value(), ..(*form).clone() });
        })
    };

    let on_method = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(PaymentForm { method: PaymentMethod::from_value(&select.value()), ..(*form).clone() });
        })
    };

    let on_note = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(PaymentForm { note: area.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        let fee_id = fee.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(payment) => on_save.emit((fee_id, payment)),
                // Rechazo local: no hay request
                Err(err) => {
                    toast.error(err.to_string());
                }
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let footer = html! {
        <>
            <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
            <button type="submit" form="payment-form">{"Confirmar Pago"}</button>
        </>
    };

    html! {
        <Modal
            is_open={props.is_open}
            on_close={props.on_close.clone()}
            title={format!("Registrar Pago para Cuota #{}", fee.id)}
            {footer}
        >
            <p>
                {"Unidad: "}<strong>{ fee.unit_code.clone().unwrap_or_default() }</strong>
                {" | Período: "}<strong>{ &fee.period }</strong>
            </p>
            <form id="payment-form" class="form-grid" onsubmit={on_submit}>
                <label>{"Monto a Pagar"}
                    <input type="number" step="0.01" value={form.amount.clone()} oninput={on_amount} required=true />
                </label>
                <label>{"Método de Pago"}
                    <select onchange={on_method}>
                        { for PaymentMethod::ALL.iter().map(|m| html! {
                            <option value={m.value()} selected={*m == form.method}>{ m.label() }</option>
                        }) }
                    </select>
                </label>
                <label>{"Nota (Opcional)"}
                    <textarea
                        rows="3"
                        value={form.note.clone()}
                        oninput={on_note}
                        placeholder="Ej: Pago realizado por el residente..."
                    />
                </label>
            </form>
        </Modal>
    }
}
