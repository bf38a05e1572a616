use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::fee::Fee;
use super::lenient;
use crate::utils::format::{money_plain, parse_iso};

const MAINTENANCE_COMPLETED: &str = "COMPLETED";
const NOTICE_STATUS: &str = "Información";

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_units: u64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pending_fees_total: f64,
    #[serde(default)]
    pub open_maintenance_requests: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub created_by_username: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaintenanceRequest {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reported_by_username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Notice,
    Fee,
    Maintenance,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Notice => "🔔",
            ActivityKind::Fee => "💳",
            ActivityKind::Maintenance => "🛠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub key: String,
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub status: String,
    pub date: Option<DateTime<Utc>>,
}

impl ActivityItem {
    pub fn is_informational(&self) -> bool {
        self.status == NOTICE_STATUS
    }
}

/// Avisos + cuotas impagas + mantenimiento abierto, más recientes primero.
/// Items sin fecha válida quedan al final.
pub fn recent_activity(
    notices: &[Notice],
    fees: &[Fee],
    maintenance: &[MaintenanceRequest],
    limit: usize,
) -> Vec<ActivityItem> {
    let notices = notices.iter().map(|n| ActivityItem {
        key: format!("n-{}", n.id),
        kind: ActivityKind::Notice,
        title: n.title.clone(),
        detail: format!("Por {}", n.created_by_username.as_deref().unwrap_or("")),
        status: NOTICE_STATUS.to_string(),
        date: n.publish_date.as_deref().and_then(parse_iso),
    });

    let fees = fees.iter().filter(|f| !f.is_paid()).map(|f| ActivityItem {
        key: format!("f-{}", f.id),
        kind: ActivityKind::Fee,
        title: format!("Cuota Vencida ({})", f.type_label()),
        detail: format!("Monto: {}", money_plain(f.amount)),
        status: f.status.clone(),
        date: f.issued_at.as_deref().and_then(parse_iso),
    });

    let maintenance = maintenance
        .iter()
        .filter(|r| r.status != MAINTENANCE_COMPLETED)
        .map(|r| ActivityItem {
            key: format!("m-{}", r.id),
            kind: ActivityKind::Maintenance,
            title: r.title.clone(),
            detail: format!("Reportado por {}", r.reported_by_username.as_deref().unwrap_or("")),
            status: r.status.clone(),
            date: r.created_at.as_deref().and_then(parse_iso),
        });

    let mut combined: Vec<ActivityItem> = notices.chain(fees).chain(maintenance).collect();
    // Option ordena None < Some: invertimos para que lo más nuevo quede arriba
    combined.sort_by(|a, b| b.date.cmp(&a.date));
    combined.truncate(limit);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64, date: &str) -> Notice {
        Notice {
            id,
            title: format!("Aviso {id}"),
            created_by_username: Some("admin".into()),
            publish_date: Some(date.into()),
        }
    }

    fn fee(id: u64, status: &str, date: &str) -> Fee {
        serde_json::from_value(serde_json::json!({
            "id": id, "period": "2024-05", "amount": "80.00", "total_paid": "0",
            "status": status, "issued_at": date
        }))
        .unwrap()
    }

    fn request(id: u64, status: &str, date: Option<&str>) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            title: "Fuga".into(),
            status: status.into(),
            reported_by_username: Some("luis".into()),
            created_at: date.map(String::from),
        }
    }

    #[test]
    fn merges_filters_and_sorts_newest_first() {
        let items = recent_activity(
            &[notice(1, "2024-05-01T10:00:00Z")],
            &[fee(2, "PENDING", "2024-05-03T10:00:00Z"), fee(3, "PAID", "2024-05-04T10:00:00Z")],
            &[
                request(4, "OPEN", Some("2024-05-02T10:00:00Z")),
                request(5, "COMPLETED", Some("2024-05-05T10:00:00Z")),
            ],
            5,
        );
        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["f-2", "m-4", "n-1"]);
        assert_eq!(items[0].title, "Cuota Vencida (General)");
        assert_eq!(items[0].detail, "Monto: $80.00");
        assert!(items[2].is_informational());
    }

    #[test]
    fn keeps_only_the_limit_and_puts_undated_last() {
        let notices: Vec<Notice> = (1..=6)
            .map(|i| notice(i, &format!("2024-05-0{i}T10:00:00Z")))
            .collect();
        let items = recent_activity(&notices, &[], &[request(9, "OPEN", None)], 5);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].key, "n-6");
        assert!(items.iter().all(|i| i.key != "m-9"));

        let items = recent_activity(&notices[..1], &[], &[request(9, "OPEN", None)], 5);
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("m-9"));
    }
}
