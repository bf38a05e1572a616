use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Usuario del backend; `GET me/` devuelve la misma forma
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.role).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn full_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// `"Ana Pérez (@ana)"`, o `"ana (@ana)"` sin nombre completo
    pub fn owner_label(&self) -> String {
        format!("{} (@{})", self.full_name().unwrap_or(&self.username), self.username)
    }
}

/// Opción del selector de propietario en el modal de unidad
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerOption {
    pub id: u64,
    pub label: String,
}

pub fn owner_options(users: &[User]) -> Vec<OwnerOption> {
    users
        .iter()
        .map(|u| OwnerOption {
            id: u.id,
            label: u.owner_label(),
        })
        .collect()
}

/// Controles visibles según el rol. Solo oculta UI: la autorización real es del backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub issue_fees: bool,
    pub register_payments: bool,
    pub list_all_fees: bool,
    pub unit_column: bool,
    /// Columna y selector de propietario en unidades (requiere `users/`)
    pub unit_owners: bool,
    pub report_owner_filter: bool,
    pub dashboard_kpis: bool,
    pub dashboard_chart: bool,
}

impl Capabilities {
    pub fn for_user(user: &User) -> Self {
        Self::for_role(user.role())
    }

    pub fn for_role(role: Role) -> Self {
        let admin = role == Role::Admin;
        Self {
            issue_fees: admin,
            register_payments: admin,
            list_all_fees: admin,
            unit_column: admin,
            unit_owners: admin,
            report_owner_filter: admin,
            dashboard_kpis: admin,
            dashboard_chart: admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn role_parsing_falls_back_to_other() {
        let admin = user(r#"{"id": 1, "username": "root", "profile": {"role": "ADMIN"}}"#);
        let resident = user(r#"{"id": 2, "username": "ana", "profile": {"role": "RESIDENT"}}"#);
        let bare = user(r#"{"id": 3, "username": "guard"}"#);
        assert!(admin.is_admin());
        assert_eq!(resident.role(), Role::Other);
        assert_eq!(bare.role(), Role::Other);
    }

    #[test]
    fn admin_unlocks_every_gated_control() {
        let caps = Capabilities::for_role(Role::Admin);
        assert_eq!(
            caps,
            Capabilities {
                issue_fees: true,
                register_payments: true,
                list_all_fees: true,
                unit_column: true,
                unit_owners: true,
                report_owner_filter: true,
                dashboard_kpis: true,
                dashboard_chart: true,
            }
        );
    }

    #[test]
    fn non_admin_sees_none_of_them() {
        let caps = Capabilities::for_role(Role::Other);
        assert_eq!(caps, Capabilities::default());
        assert!(!caps.unit_owners);
        assert!(!crate::hooks::capabilities(None).unit_owners);
    }

    #[test]
    fn owner_labels_prefer_full_name() {
        let users = vec![
            user(r#"{"id": 7, "username": "ana", "profile": {"full_name": "Ana Pérez"}}"#),
            user(r#"{"id": 8, "username": "luis", "profile": {"full_name": "  "}}"#),
        ];
        let options = owner_options(&users);
        assert_eq!(options[0].label, "Ana Pérez (@ana)");
        assert_eq!(options[1], OwnerOption { id: 8, label: "luis (@luis)".into() });
    }
}
