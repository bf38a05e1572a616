use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: AttrValue,
    /// Modal ancho (detalle de unidad)
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub footer: Html,
}

/// Overlay controlado: el padre decide `is_open` y recibe `on_close`
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div
                class={classes!("modal-content", props.wide.then_some("modal-wide"))}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                if !props.title.is_empty() {
                    <div class="modal-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="btn-close" onclick={close}>{"✕"}</button>
                    </div>
                }
                <div class="modal-body">
                    { props.children.clone() }
                </div>
                <div class="modal-footer">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}
