// ============================================================================
// UNIT MODAL - crear / editar unidad
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::modal::Modal;
use super::toast::use_toast;
use crate::models::unit::UnitPayload;
use crate::models::{OwnerOption, Unit, UnitForm};

#[derive(Properties, PartialEq)]
pub struct UnitModalProps {
    pub is_open: bool,
    /// None = crear
    pub unit: Option<Unit>,
    pub owners: Vec<OwnerOption>,
    /// Sin este permiso se conserva el propietario actual de la unidad
    pub show_owner: bool,
    pub on_close: Callback<()>,
    /// (id si es edición, datos validados)
    pub on_save: Callback<(Option<u64>, UnitPayload)>,
}

#[derive(Clone, Copy)]
enum Field {
    Code,
    Tower,
    Number,
}

#[function_component(UnitModal)]
pub fn unit_modal(props: &UnitModalProps) -> Html {
    let form = use_state(UnitForm::default);
    let toast = use_toast();

    // Se resetea cada vez que se abre o cambia la unidad
    {
        let form = form.clone();
        use_effect_with((props.unit.clone(), props.is_open), move |(unit, _)| {
            form.set(unit.as_ref().map(UnitForm::from_unit).unwrap_or_default());
            || ()
        });
    }

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match field {
                Field::Code => next.code = value,
                Field::Tower => next.tower = value,
                Field::Number => next.number = value,
            }
            form.set(next);
        })
    };

    let on_owner = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(UnitForm { owner: select.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(payload) => on_save.emit((form.id, payload)),
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

    let title = if props.unit.is_some() { "Editar Unidad" } else { "Crear Nueva Unidad" };
    let footer = html! {
        <>
            <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
            <button type="submit" form="unit-form">{"Guardar Cambios"}</button>
        </>
    };

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()} {title} {footer}>
            <form id="unit-form" class="form-grid" onsubmit={on_submit}>
                <input value={form.code.clone()} oninput={on_text(Field::Code)} placeholder="Código (ej. T1-302)" required=true />
                <input value={form.tower.clone()} oninput={on_text(Field::Tower)} placeholder="Torre" required=true />
                <input value={form.number.clone()} oninput={on_text(Field::Number)} placeholder="Número" required=true />
                if props.show_owner {
                    <select onchange={on_owner} required=true>
                        <option value="" selected={form.owner.is_empty()}>{"-- Seleccione un Propietario --"}</option>
                        { for props.owners.iter().map(|o| {
                            let value = o.id.to_string();
                            let selected = value == form.owner;
                            html! { <option key={value.clone()} {value} {selected}>{ &o.label }</option> }
                        }) }
                    </select>
                }
            </form>
        </Modal>
    }
}
