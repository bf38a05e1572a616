use serde::{Deserialize, Serialize};

use super::form::{FormError, MSG_AMOUNT_POSITIVE, MSG_ISSUE_FIELDS};
use super::lenient;
use crate::utils::constants::FEE_STATUS_PAID;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fee {
    pub id: u64,
    #[serde(default)]
    pub unit_code: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_paid: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub expense_type_name: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
}

impl Fee {
    pub fn is_paid(&self) -> bool {
        self.status == FEE_STATUS_PAID
    }

    /// Saldo pendiente (nunca negativo)
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.total_paid).max(0.0)
    }

    /// Porcentaje pagado para la barra de progreso, tope 100
    pub fn paid_percentage(&self) -> f64 {
        if self.amount > 0.0 {
            (self.total_paid / self.amount * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn type_label(&self) -> &str {
        self.expense_type_name.as_deref().unwrap_or("General")
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_paid() {
            "badge success"
        } else {
            "badge warn"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseType {
    pub id: u64,
    pub name: String,
}

/// Filtro del listado: residente pide solo sus cuotas (`?mine=1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeQuery {
    pub mine: bool,
}

impl FeeQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        if self.mine {
            vec![("mine", "1".to_string())]
        } else {
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Emisión de cuotas (admin)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFeesRequest {
    pub period: String,
    pub expense_type_id: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueFeesForm {
    pub period: String,
    pub expense_type_id: String,
}

impl IssueFeesForm {
    pub fn new(current_month: String) -> Self {
        Self {
            period: current_month,
            expense_type_id: String::new(),
        }
    }

    pub fn validate(&self) -> Result<IssueFeesRequest, FormError> {
        let period = self.period.trim();
        let expense_type_id = self
            .expense_type_id
            .trim()
            .parse::<u64>()
            .map_err(|_| FormError(MSG_ISSUE_FIELDS))?;
        if period.is_empty() {
            return Err(FormError(MSG_ISSUE_FIELDS));
        }
        Ok(IssueFeesRequest {
            period: period.to_string(),
            expense_type_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Pago manual (admin)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Transfer,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Transfer, PaymentMethod::Other];

    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Other => "Otro",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub amount: String,
    pub method: PaymentMethod,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentForm {
    pub amount: String,
    pub method: PaymentMethod,
    pub note: String,
}

impl PaymentForm {
    /// Precarga el saldo pendiente de la cuota
    pub fn for_fee(fee: &Fee) -> Self {
        Self {
            amount: format!("{:.2}", fee.outstanding()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<PaymentRequest, FormError> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or(FormError(MSG_AMOUNT_POSITIVE))?;
        Ok(PaymentRequest {
            amount: format!("{:.2}", amount),
            method: self.method,
            note: self.note.trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Pago online (QR)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PaymentPreference {
    #[serde(default)]
    pub point_of_interaction: Option<PointOfInteraction>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PointOfInteraction {
    #[serde(default)]
    pub transaction_data: Option<TransactionData>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub qr_code_base64: Option<String>,
}

impl PaymentPreference {
    pub fn qr_code_base64(&self) -> Option<&str> {
        self.point_of_interaction
            .as_ref()?
            .transaction_data
            .as_ref()?
            .qr_code_base64
            .as_deref()
            .filter(|qr| !qr.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(amount: f64, paid: f64, status: &str) -> Fee {
        Fee {
            id: 9,
            unit_code: Some("T1-302".into()),
            period: "2024-05".into(),
            amount,
            total_paid: paid,
            status: status.into(),
            expense_type_name: None,
            issued_at: None,
        }
    }

    #[test]
    fn decodes_decimal_strings_from_the_backend() {
        let json = r#"{"id": 3, "unit_code": "A-1", "period": "2024-02", "amount": "150.00",
                       "total_paid": "50.00", "status": "PENDING", "expense_type_name": "Expensa"}"#;
        let f: Fee = serde_json::from_str(json).unwrap();
        assert_eq!(f.outstanding(), 100.0);
        assert!(!f.is_paid());
        assert_eq!(f.badge_class(), "badge warn");
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(fee(100.0, 150.0, "PAID").paid_percentage(), 100.0);
        assert_eq!(fee(0.0, 0.0, "PAID").paid_percentage(), 0.0);
        assert_eq!(fee(200.0, 50.0, "PARTIAL").paid_percentage(), 25.0);
    }

    #[test]
    fn payment_form_prefills_remaining_balance() {
        let form = PaymentForm::for_fee(&fee(150.0, 40.0, "PARTIAL"));
        assert_eq!(form.amount, "110.00");
        assert_eq!(form.method, PaymentMethod::Cash);
    }

    #[test]
    fn non_positive_payment_is_rejected_with_fixed_message() {
        for amount in ["0", "-5", "", "abc", "0.00"] {
            let form = PaymentForm {
                amount: amount.into(),
                ..PaymentForm::default()
            };
            assert_eq!(form.validate(), Err(FormError(MSG_AMOUNT_POSITIVE)));
        }
        assert_eq!(MSG_AMOUNT_POSITIVE, "El monto debe ser mayor a cero.");
    }

    #[test]
    fn valid_payment_serializes_like_the_api_expects() {
        let form = PaymentForm {
            amount: " 25.5 ".into(),
            method: PaymentMethod::from_value("transfer"),
            note: "pagó en portería ".into(),
        };
        let body = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"amount": "25.50", "method": "transfer", "note": "pagó en portería"})
        );
    }

    #[test]
    fn issuing_requires_period_and_type() {
        let mut form = IssueFeesForm::new("2024-06".into());
        assert_eq!(form.validate(), Err(FormError(MSG_ISSUE_FIELDS)));
        form.expense_type_id = "4".into();
        assert_eq!(
            form.validate(),
            Ok(IssueFeesRequest { period: "2024-06".into(), expense_type_id: 4 })
        );
        form.period.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn mine_query_only_when_requested() {
        assert!(FeeQuery::default().params().is_empty());
        assert_eq!(FeeQuery { mine: true }.params(), vec![("mine", "1".to_string())]);
    }

    #[test]
    fn qr_is_read_from_nested_preference() {
        let pref: PaymentPreference = serde_json::from_str(
            r#"{"point_of_interaction": {"transaction_data": {"qr_code_base64": "iVBOR"}}}"#,
        )
        .unwrap();
        assert_eq!(pref.qr_code_base64(), Some("iVBOR"));
        assert_eq!(PaymentPreference::default().qr_code_base64(), None);
    }
}
