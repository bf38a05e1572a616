use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::form::{FormError, MSG_RESERVATION_FIELDS};
use crate::utils::format::{input_day, local_input_to_utc, utc_to_local_input};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommonArea {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub area: u64,
    #[serde(default)]
    pub area_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_username: Option<String>,
}

/// Body de POST/PATCH `reservations/`; horarios en UTC
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationPayload {
    pub area: u64,
    pub start_time: String,
    pub end_time: String,
}

/// Formulario inline: valores crudos de `<select>` y `datetime-local`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationForm {
    pub area: String,
    pub start_time: String,
    pub end_time: String,
}

impl ReservationForm {
    pub fn from_reservation(reservation: &Reservation, offset: FixedOffset) -> Self {
        Self {
            area: reservation.area.to_string(),
            start_time: utc_to_local_input(&reservation.start_time, offset),
            end_time: utc_to_local_input(&reservation.end_time, offset),
        }
    }

    pub fn validate(&self, offset: FixedOffset) -> Result<ReservationPayload, FormError> {
        let missing = FormError(MSG_RESERVATION_FIELDS);
        let area = self.area.trim().parse::<u64>().map_err(|_| missing.clone())?;
        let start_time = local_input_to_utc(&self.start_time, offset).ok_or_else(|| missing.clone())?;
        let end_time = local_input_to_utc(&self.end_time, offset).ok_or(missing)?;
        Ok(ReservationPayload {
            area,
            start_time,
            end_time,
        })
    }

    /// Agenda a mostrar: área + día de inicio seleccionados
    pub fn schedule_query(&self) -> Option<ScheduleQuery> {
        let area = self.area.trim().parse::<u64>().ok()?;
        let date = input_day(&self.start_time)?.to_string();
        Some(ScheduleQuery { area, date })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub area: u64,
    pub date: String,
}

impl ScheduleQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![("area", self.area.to_string()), ("date", self.date.clone())]
    }
}

/// Mensaje inline en rojo si habla de error
pub fn is_error_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("error") || lower.contains("no se pudo")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn missing_area_is_rejected_before_any_request() {
        let form = ReservationForm {
            area: String::new(),
            start_time: "2024-05-01T10:00".into(),
            end_time: "2024-05-01T12:00".into(),
        };
        let err = form.validate(utc()).unwrap_err();
        assert_eq!(err.to_string(), "Por favor, completa todos los campos.");
    }

    #[test]
    fn missing_times_are_rejected_too() {
        let form = ReservationForm {
            area: "2".into(),
            start_time: "2024-05-01T10:00".into(),
            end_time: String::new(),
        };
        assert_eq!(form.validate(utc()), Err(FormError(MSG_RESERVATION_FIELDS)));
    }

    #[test]
    fn local_times_are_sent_as_utc() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let form = ReservationForm {
            area: "3".into(),
            start_time: "2024-05-01T20:00".into(),
            end_time: "2024-05-01T22:30".into(),
        };
        let payload = form.validate(offset).unwrap();
        assert_eq!(payload.area, 3);
        assert_eq!(payload.start_time, "2024-05-02T01:00:00.000Z");
        assert_eq!(payload.end_time, "2024-05-02T03:30:00.000Z");
    }

    #[test]
    fn editing_converts_back_to_local_inputs() {
        let reservation: Reservation = serde_json::from_str(
            r#"{"id": 5, "area": 3, "area_name": "Piscina", "start_time": "2024-05-02T01:00:00Z",
                "end_time": "2024-05-02T03:30:00Z", "created_at": "2024-04-20T10:00:00Z",
                "user_username": "ana"}"#,
        )
        .unwrap();
        let form = ReservationForm::from_reservation(&reservation, FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(form.area, "3");
        assert_eq!(form.start_time, "2024-05-01T20:00");
        assert_eq!(form.end_time, "2024-05-01T22:30");
    }

    #[test]
    fn schedule_needs_area_and_day() {
        let mut form = ReservationForm::default();
        assert_eq!(form.schedule_query(), None);
        form.area = "3".into();
        assert_eq!(form.schedule_query(), None);
        form.start_time = "2024-05-01T20:00".into();
        let query = form.schedule_query().unwrap();
        assert_eq!(query.params(), vec![("area", "3".to_string()), ("date", "2024-05-01".to_string())]);
    }

    #[test]
    fn message_tone() {
        assert!(is_error_message("No se pudo eliminar la reserva."));
        assert!(is_error_message("Error al cargar los datos."));
        assert!(!is_error_message("¡Reserva creada con éxito!"));
    }
}
