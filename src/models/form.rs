use thiserror::Error;

pub const MSG_AMOUNT_POSITIVE: &str = "El monto debe ser mayor a cero.";
pub const MSG_RESERVATION_FIELDS: &str = "Por favor, completa todos los campos.";
pub const MSG_ISSUE_FIELDS: &str = "Por favor, seleccione período y tipo de expensa.";
pub const MSG_UNIT_FIELDS: &str = "Por favor, completa todos los campos de la unidad.";

/// Rechazo local de un formulario: no se hace ningún request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FormError(pub &'static str);
