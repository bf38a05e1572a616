// ============================================================================
// UNITS VIEW - gestión de unidades
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastKind;
use crate::components::{use_toast, TableMessage, UnitDetailModal, UnitModal};
use crate::hooks::{capabilities, refresh_on_success, spawn_mutation, use_config, use_me, use_debounce, use_resource, LoadOptions, MutationMessages};
use crate::models::unit::UnitPayload;
use crate::models::user::owner_options;
use crate::models::{OwnerOption, Unit, UnitDetail};
use crate::services::units::{create_unit, delete_unit, get_unit_details, list_units, update_unit};
use crate::services::users::list_users;
use crate::services::ApiError;
use crate::utils::browser::confirm;

const MSG_LOAD_FAILED: &str = "No se pudo cargar la información.";
const MSG_CONFIRM_DELETE: &str = "¿Seguro que quieres eliminar esta unidad?";

const SAVE_MESSAGES: MutationMessages = MutationMessages {
    loading: "Guardando...",
    success: "Unidad creada.",
    failure: "Error al guardar la unidad.",
};

const DELETE_MESSAGES: MutationMessages = MutationMessages {
    loading: "Eliminando...",
    success: "Unidad eliminada.",
    failure: "No se pudo eliminar.",
};

#[derive(Debug, Clone, PartialEq, Default)]
struct UnitsData {
    units: Vec<Unit>,
    owners: Vec<OwnerOption>,
}

/// `users/` solo se pide si el rol puede ver propietarios
async fn load_units((search, with_owners): (String, bool)) -> Result<UnitsData, ApiError> {
    let owners = async move {
        if with_owners {
            list_users().await.map(|users| owner_options(&users))
        } else {
            Ok(Vec::new())
        }
    };
    let (units, owners) = futures::try_join!(list_units(&search), owners)?;
    Ok(UnitsData { units, owners })
}

#[function_component(UnitsView)]
pub fn units_view() -> Html {
    let config = use_config();
    let toast = use_toast();
    let me = use_me();
    let caps = capabilities(me.data());

    let search = use_state(String::new);
    let debounced = use_debounce((*search).clone(), config.ui_config.search_debounce_ms);
    let deps = me.data().map(|_| (debounced, caps.unit_owners));
    let data = use_resource(LoadOptions::keep(MSG_LOAD_FAILED), deps, load_units);

    // Some(None) = modal abierto en modo crear
    let editing = use_state(|| None::<Option<Unit>>);
    let detail = use_state(|| None::<UnitDetail>);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_new = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(Some(None)))
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |unit: Unit| editing.set(Some(Some(unit))))
    };

    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_save = {
        let toast = toast.clone();
        let close = on_close_edit.clone();
        let reload = data.reload.clone();
        Callback::from(move |(id, payload): (Option<u64>, UnitPayload)| {
            let messages = MutationMessages {
                success: if id.is_some() { "Unidad actualizada." } else { SAVE_MESSAGES.success },
                ..SAVE_MESSAGES
            };
            spawn_mutation(
                toast.clone(),
                messages,
                async move {
                    match id {
                        Some(id) => update_unit(id, &payload).await,
                        None => create_unit(&payload).await,
                    }
                },
                refresh_on_success(Some(close.clone()), reload.clone()),
            );
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let reload = data.reload.clone();
        Callback::from(move |id: u64| {
            if !confirm(MSG_CONFIRM_DELETE) {
                return;
            }
            spawn_mutation(
                toast.clone(),
                DELETE_MESSAGES,
                delete_unit(id),
                refresh_on_success(None, reload.clone()),
            );
        })
    };

    let on_details = {
        let toast = toast.clone();
        let detail = detail.clone();
        Callback::from(move |id: u64| {
            let toast = toast.clone();
            let detail = detail.clone();
            let toast_id = toast.loading("Cargando detalles...");
            wasm_bindgen_futures::spawn_local(async move {
                match get_unit_details(id).await {
                    Ok(unit) => {
                        toast.dismiss(toast_id);
                        detail.set(Some(unit));
                    }
                    Err(e) => {
                        log::error!("❌ Detalle de unidad #{}: {}", id, e);
                        toast.resolve(toast_id, ToastKind::Error, "No se pudieron cargar los detalles.");
                    }
                }
            });
        })
    };

    let on_close_detail = {
        let detail = detail.clone();
        Callback::from(move |_| detail.set(None))
    };

    let (units, owners) = data
        .data()
        .map(|d| (d.units.clone(), d.owners.clone()))
        .unwrap_or_default();

    let colspan: usize = if caps.unit_owners { 5 } else { 4 };
    let rows = if data.loading() {
        html! { <TableMessage {colspan} message="Cargando..." /> }
    } else if units.is_empty() {
        html! { <TableMessage {colspan} message="No se encontraron unidades." /> }
    } else {
        html! {
            { for units.iter().map(|unit| html! {
                <UnitRow
                    key={unit.id}
                    unit={unit.clone()}
                    show_owner={caps.unit_owners}
                    on_details={on_details.clone()}
                    on_edit={on_edit.clone()}
                    on_delete={on_delete.clone()}
                />
            }) }
        }
    };

    html! {
        <div style="padding: 24px; display: grid; gap: 16px">
            <h1>{"Gestión de Unidades"}</h1>

            <div class="card">
                <div class="toolbar" style="margin-bottom: 16px">
                    <input
                        class="grow"
                        placeholder="Buscar por código, torre o propietario..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <button onclick={on_new}>{"➕ Nueva Unidad"}</button>
                </div>

                <table class="table" width="100%">
                    <thead>
                        <tr>
                            <th>{"Código"}</th><th>{"Torre"}</th><th>{"Número"}</th>
                            if caps.unit_owners { <th>{"Propietario"}</th> }
                            <th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>

            <UnitModal
                is_open={editing.is_some()}
                unit={(*editing).clone().flatten()}
                {owners}
                show_owner={caps.unit_owners}
                on_close={on_close_edit}
                {on_save}
            />

            <UnitDetailModal
                is_open={detail.is_some()}
                unit={(*detail).clone()}
                on_close={on_close_detail}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UnitRowProps {
    unit: Unit,
    show_owner: bool,
    on_details: Callback<u64>,
    on_edit: Callback<Unit>,
    on_delete: Callback<u64>,
}

#[function_component(UnitRow)]
fn unit_row(props: &UnitRowProps) -> Html {
    let unit = &props.unit;
    let id = unit.id;
    let details = props.on_details.reform(move |_: MouseEvent| id);
    let delete = props.on_delete.reform(move |_: MouseEvent| id);
    let edit = {
        let unit = unit.clone();
        props.on_edit.reform(move |_: MouseEvent| unit.clone())
    };

    html! {
        <tr>
            <td><button class="link-button" onclick={details}>{ &unit.code }</button></td>
            <td>{ &unit.tower }</td>
            <td>{ &unit.number }</td>
            if props.show_owner { <td>{ unit.owner_display() }</td> }
            <td>
                <button onclick={edit}>{"Editar"}</button>
                <button class="btn-danger" style="margin-left: 6px" onclick={delete}>{"Eliminar"}</button>
            </td>
        </tr>
    }
}
