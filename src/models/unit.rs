use serde::{Deserialize, Serialize};

use super::dashboard::MaintenanceRequest;
use super::fee::Fee;
use super::form::{FormError, MSG_UNIT_FIELDS};
use super::lenient;
use super::user::Profile;

/// Fila del listado `units/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub code: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tower: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub number: String,
    #[serde(default)]
    pub owner: Option<u64>,
    #[serde(default)]
    pub owner_full_name: Option<String>,
    #[serde(default)]
    pub owner_username: Option<String>,
}

impl Unit {
    pub fn owner_display(&self) -> &str {
        self.owner_full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.owner_username.as_deref())
            .unwrap_or("")
    }
}

/// `units/{id}/`: el propietario viene expandido, más historial
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnitDetail {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub owner: Option<OwnerDetail>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    #[serde(default)]
    pub maintenance_requests: Vec<MaintenanceRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnerDetail {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl UnitDetail {
    pub const RECENT_FEES: usize = 5;

    pub fn recent_fees(&self) -> &[Fee] {
        &self.fees[..self.fees.len().min(Self::RECENT_FEES)]
    }

    pub fn owner_full_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|o| o.profile.as_ref())
            .and_then(|p| p.full_name.as_deref())
            .unwrap_or("N/A")
    }

    pub fn owner_phone(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|o| o.profile.as_ref())
            .and_then(|p| p.phone.as_deref())
            .unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitPayload {
    pub code: String,
    pub tower: String,
    pub number: String,
    pub owner: u64,
}

/// Estado del formulario del modal; `id` presente = edición (PATCH)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitForm {
    pub id: Option<u64>,
    pub code: String,
    pub tower: String,
    pub number: String,
    pub owner: String,
}

impl UnitForm {
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            id: Some(unit.id),
            code: unit.code.clone(),
            tower: unit.tower.clone(),
            number: unit.number.clone(),
            owner: unit.owner.map(|o| o.to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<UnitPayload, FormError> {
        let required = [&self.code, &self.tower, &self.number];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError(MSG_UNIT_FIELDS));
        }
        let owner = self
            .owner
            .trim()
            .parse::<u64>()
            .map_err(|_| FormError(MSG_UNIT_FIELDS))?;
        Ok(UnitPayload {
            code: self.code.trim().to_string(),
            tower: self.tower.trim().to_string(),
            number: self.number.trim().to_string(),
            owner,
        })
    }
}

/// `units/?search=`; búsqueda vacía no manda el parámetro
pub fn search_params(term: &str) -> Vec<(&'static str, String)> {
    let term = term.trim();
    if term.is_empty() {
        Vec::new()
    } else {
        vec![("search", term.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_shows_full_name_then_username() {
        let unit: Unit = serde_json::from_str(
            r#"{"id": 1, "code": "T1-302", "tower": "T1", "number": 302, "owner": 7,
                "owner_full_name": "", "owner_username": "ana"}"#,
        )
        .unwrap();
        assert_eq!(unit.number, "302");
        assert_eq!(unit.owner_display(), "ana");
    }

    #[test]
    fn edit_form_keeps_id_and_owner() {
        let unit = Unit {
            id: 4,
            code: "B-1".into(),
            tower: "B".into(),
            number: "1".into(),
            owner: Some(12),
            owner_full_name: None,
            owner_username: None,
        };
        let form = UnitForm::from_unit(&unit);
        assert_eq!(form.id, Some(4));
        assert_eq!(
            form.validate(),
            Ok(UnitPayload { code: "B-1".into(), tower: "B".into(), number: "1".into(), owner: 12 })
        );
    }

    #[test]
    fn missing_owner_or_code_is_rejected() {
        let mut form = UnitForm {
            code: "A-1".into(),
            tower: "A".into(),
            number: "1".into(),
            ..UnitForm::default()
        };
        assert_eq!(form.validate(), Err(FormError(MSG_UNIT_FIELDS)));
        form.owner = "3".into();
        form.code = "  ".into();
        assert_eq!(form.validate(), Err(FormError(MSG_UNIT_FIELDS)));
    }

    #[test]
    fn detail_lists_only_recent_fees() {
        let fees: Vec<String> = (1..=7)
            .map(|i| format!(r#"{{"id": {i}, "period": "2024-0{i}", "amount": 10, "total_paid": 0, "status": "PENDING"}}"#))
            .collect();
        let json = format!(
            r#"{{"id": 1, "code": "A-1", "owner": {{"username": "ana", "email": "a@x.io",
                 "profile": {{"full_name": "Ana", "role": "RESIDENT"}}}},
                 "fees": [{}], "maintenance_requests": []}}"#,
            fees.join(",")
        );
        let detail: UnitDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(detail.recent_fees().len(), 5);
        assert_eq!(detail.owner_full_name(), "Ana");
        assert_eq!(detail.owner_phone(), "N/A");
    }

    #[test]
    fn empty_search_sends_no_param() {
        assert!(search_params("   ").is_empty());
        assert_eq!(search_params(" torre "), vec![("search", "torre".to_string())]);
    }
}
