use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct PaymentQrModalProps {
    pub is_open: bool,
    /// PNG en base64; None mientras se genera
    pub qr_base64: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(PaymentQrModal)]
pub fn payment_qr_modal(props: &PaymentQrModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let footer = html! {
        <button class="btn-block" onclick={on_close}>{"Cerrar"}</button>
    };

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()} title="Escanea para Pagar" {footer}>
            <p>{"Usa la app de tu banco o billetera móvil."}</p>
            {
                match &props.qr_base64 {
                    Some(qr) => html! {
                        <img class="payment-qr" src={format!("data:image/png;base64,{}", qr)} alt="Código QR de Pago" />
                    },
                    None => html! { <div class="payment-qr placeholder">{"Cargando QR..."}</div> },
                }
            }
        </Modal>
    }
}
