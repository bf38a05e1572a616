// ============================================================================
// RESERVATIONS VIEW - reservas de áreas comunes
// ============================================================================
// Formulario inline (crear/editar) + agenda del día del área elegida + tabla
// de reservas propias. Los mensajes van inline, no como toast.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::TableMessage;
use crate::hooks::{use_resource, LoadOptions};
use crate::models::reservation::is_error_message;
use crate::models::{CommonArea, Reservation, ReservationForm, ScheduleQuery};
use crate::services::reservations::{
    create_reservation, delete_reservation, list_common_areas, list_reservations, update_reservation,
};
use crate::services::ApiError;
use crate::utils::browser::{confirm, scroll_to_top};
use crate::utils::format::{format_local_date, format_local_datetime, format_local_time, local_offset};

const MSG_LOAD_FAILED: &str = "Error al cargar los datos.";
const MSG_SCHEDULE_FAILED: &str = "Error al cargar la agenda del área.";
const MSG_SAVE_FAILED: &str = "No se pudo guardar la reserva. Revisa los horarios y que no haya conflictos.";
const MSG_CONFIRM_DELETE: &str = "¿Estás seguro de que quieres eliminar esta reserva?";

#[derive(Debug, Clone, PartialEq, Default)]
struct ReservationsData {
    areas: Vec<CommonArea>,
    reservations: Vec<Reservation>,
}

async fn load_reservations(_: ()) -> Result<ReservationsData, ApiError> {
    let (areas, reservations) = futures::try_join!(list_common_areas(), list_reservations(None))?;
    Ok(ReservationsData { areas, reservations })
}

async fn load_schedule(query: ScheduleQuery) -> Result<Vec<Reservation>, ApiError> {
    list_reservations(Some(&query)).await
}

#[derive(Clone, Copy)]
enum Field {
    Start,
    End,
}

#[function_component(ReservationsView)]
pub fn reservations_view() -> Html {
    let offset = local_offset();

    let data = use_resource(LoadOptions::keep_inline(MSG_LOAD_FAILED), Some(()), load_reservations);
    let form = use_state(ReservationForm::default);
    let editing_id = use_state(|| None::<u64>);
    let msg = use_state(|| None::<String>);

    let schedule = use_resource(
        LoadOptions::keep_inline(MSG_SCHEDULE_FAILED),
        form.schedule_query(),
        load_schedule,
    );

    // Tras guardar/eliminar se recargan la lista y la agenda
    let reload_all = {
        let reload_data = data.reload.clone();
        let reload_schedule = schedule.reload.clone();
        Callback::from(move |_: ()| {
            reload_data.emit(());
            reload_schedule.emit(());
        })
    };

    let cancel_edit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_: ()| {
            editing_id.set(None);
            form.set(ReservationForm::default());
        })
    };

    let on_area = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ReservationForm { area: select.value(), ..(*form).clone() });
        })
    };

    let on_time = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match field {
                Field::Start => next.start_time = value,
                Field::End => next.end_time = value,
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        let msg = msg.clone();
        let cancel_edit = cancel_edit.clone();
        let reload_all = reload_all.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            msg.set(None);
            let payload = match form.validate(offset) {
                Ok(payload) => payload,
                Err(err) => {
                    msg.set(Some(err.to_string()));
                    return;
                }
            };
            let editing = *editing_id;
            let msg = msg.clone();
            let cancel_edit = cancel_edit.clone();
            let reload_all = reload_all.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing {
                    Some(id) => update_reservation(id, &payload).await,
                    None => create_reservation(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        log::info!("📅 Reserva #{} guardada", saved.id);
                        msg.set(Some(
                            if editing.is_some() {
                                "¡Reserva actualizada con éxito!"
                            } else {
                                "¡Reserva creada con éxito!"
                            }
                            .to_string(),
                        ));
                        cancel_edit.emit(());
                        reload_all.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando reserva: {}", e);
                        msg.set(Some(e.user_message(MSG_SAVE_FAILED)));
                    }
                }
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |reservation: Reservation| {
            editing_id.set(Some(reservation.id));
            form.set(ReservationForm::from_reservation(&reservation, offset));
            scroll_to_top();
        })
    };

    let on_delete = {
        let msg = msg.clone();
        let reload_all = reload_all.clone();
        Callback::from(move |id: u64| {
            if !confirm(MSG_CONFIRM_DELETE) {
                return;
            }
            let msg = msg.clone();
            let reload_all = reload_all.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_reservation(id).await {
                    Ok(()) => {
                        msg.set(Some("Reserva eliminada.".to_string()));
                        reload_all.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando reserva #{}: {}", id, e);
                        msg.set(Some("No se pudo eliminar la reserva.".to_string()));
                    }
                }
            });
        })
    };

    let (areas, reservations) = data
        .data()
        .map(|d| (d.areas.clone(), d.reservations.clone()))
        .unwrap_or_default();
    let message = (*msg).clone().or_else(|| data.error().map(String::from));

    let agenda = if form.area.is_empty() {
        html! { <p class="muted">{"Selecciona un área para ver su agenda."}</p> }
    } else if form.schedule_query().is_none() {
        html! { <p class="muted">{"No hay reservas para esta fecha."}</p> }
    } else if schedule.loading() {
        html! { <p>{"Cargando agenda..."}</p> }
    } else {
        match schedule.data() {
            Some(day) if !day.is_empty() => html! {
                <ul class="schedule">
                    { for day.iter().map(|res| html! {
                        <li key={res.id}>
                            <strong>{ format!("{} - {}",
                                format_local_time(&res.start_time, offset),
                                format_local_time(&res.end_time, offset)) }</strong>
                            <br />
                            <small>{ format!("Reservado por: {}", res.user_username.clone().unwrap_or_default()) }</small>
                        </li>
                    }) }
                </ul>
            },
            _ => html! { <p class="muted">{"No hay reservas para esta fecha."}</p> },
        }
    };

    let rows = if reservations.is_empty() {
        html! { <TableMessage colspan={5} message="No tienes reservas." /> }
    } else {
        html! {
            { for reservations.iter().map(|r| {
                let edit = {
                    let r = r.clone();
                    on_edit.reform(move |_: MouseEvent| r.clone())
                };
                let id = r.id;
                let delete = on_delete.reform(move |_: MouseEvent| id);
                html! {
                    <tr key={r.id}>
                        <td>{ r.area_name.clone().unwrap_or_default() }</td>
                        <td>{ format_local_datetime(&r.start_time, offset) }</td>
                        <td>{ format_local_datetime(&r.end_time, offset) }</td>
                        <td>{ r.created_at.as_deref().map(|d| format_local_date(d, offset)).unwrap_or_default() }</td>
                        <td>
                            <button class="btn-small" onclick={edit}>{"Editar"}</button>
                            <button class="btn-small btn-danger" style="margin-left: 6px" onclick={delete}>{"Eliminar"}</button>
                        </td>
                    </tr>
                }
            }) }
        }
    };

    let on_cancel = cancel_edit.reform(|_: MouseEvent| ());

    html! {
        <div style="padding: 24px; display: grid; gap: 24px">
            <h1>{"Reservas de Áreas Comunes"}</h1>

            <section class="two-columns">
                <div class="card">
                    <h3>{ if editing_id.is_some() { "Editar Reserva" } else { "Crear Nueva Reserva" } }</h3>
                    <form onsubmit={on_submit} style="display: grid; gap: 12px">
                        <select onchange={on_area}>
                            <option value="" selected={form.area.is_empty()}>{"-- Selecciona un área --"}</option>
                            { for areas.iter().map(|a| {
                                let value = a.id.to_string();
                                let selected = value == form.area;
                                html! { <option key={a.id} {value} {selected}>{ &a.name }</option> }
                            }) }
                        </select>
                        <input type="datetime-local" value={form.start_time.clone()} oninput={on_time(Field::Start)} />
                        <input type="datetime-local" value={form.end_time.clone()} oninput={on_time(Field::End)} />
                        <div style="display: flex; gap: 8px">
                            <button type="submit">{ if editing_id.is_some() { "Actualizar" } else { "Reservar" } }</button>
                            if editing_id.is_some() {
                                <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancelar Edición"}</button>
                            }
                        </div>
                        if let Some(text) = message {
                            <p class={if is_error_message(&text) { "form-message error" } else { "form-message success" }}>
                                { text }
                            </p>
                        }
                    </form>
                </div>

                <div class="card">
                    <h3>{"Agenda del Día"}</h3>
                    { agenda }
                </div>
            </section>

            <section>
                <h3>{"Mis Próximas Reservas"}</h3>
                <table class="table" width="100%">
                    <thead>
                        <tr>
                            <th>{"Área"}</th><th>{"Desde"}</th><th>{"Hasta"}</th><th>{"Hecha el"}</th><th>{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </section>
        </div>
    }
}
