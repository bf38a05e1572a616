use serde::Deserialize;

use super::lenient;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ReportTotals {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub issued: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub paid: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub outstanding: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub expense_type: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub issued: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub paid: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub outstanding: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeriodBreakdown {
    pub period: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub issued: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub paid: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub outstanding: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FinanceReport {
    #[serde(default)]
    pub overall: Option<ReportTotals>,
    #[serde(default)]
    pub by_type: Vec<TypeBreakdown>,
    #[serde(default)]
    pub by_period: Vec<PeriodBreakdown>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: f64,
    pub class: &'static str,
}

impl FinanceReport {
    /// Emitido / Pagado / Pendiente; vacío si el backend no devolvió `overall`
    pub fn kpi_cards(&self) -> Vec<KpiCard> {
        let Some(overall) = self.overall else {
            return Vec::new();
        };
        vec![
            KpiCard { title: "Emitido", value: overall.issued, class: "issued" },
            KpiCard { title: "Pagado", value: overall.paid, class: "paid" },
            KpiCard { title: "Pendiente", value: overall.outstanding, class: "outstanding" },
        ]
    }

    /// Máximo emitido por período (escala del gráfico de barras)
    pub fn period_scale(&self) -> f64 {
        self.by_period
            .iter()
            .map(|p| p.issued.max(p.paid))
            .fold(0.0, f64::max)
    }

    /// Una fila por tipo de expensa; el quoting lo resuelve `csv`
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for row in &self.by_type {
            writer.write_record([
                row.expense_type.clone(),
                row.count.to_string(),
                format!("{:.2}", row.issued),
                format!("{:.2}", row.paid),
                format!("{:.2}", row.outstanding),
            ])?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn csv_data_url(&self) -> Result<String, csv::Error> {
        let csv = self.to_csv()?;
        Ok(format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(&csv)))
    }
}

const CSV_HEADERS: [&str; 5] = ["Tipo", "# Cuotas", "Emitido", "Pagado", "Pendiente"];

/// Filtros tal como están en los inputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportFilters {
    pub from: String,
    pub to: String,
    pub owner: String,
}

/// Query efectiva de `reports/finance/`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub owner: Option<String>,
}

impl ReportQuery {
    /// Un admin puede filtrar por cualquier propietario (o ninguno);
    /// el resto siempre queda acotado a su propio id.
    pub fn scoped(filters: &ReportFilters, me: &User) -> Self {
        let owner = if me.is_admin() {
            non_empty(&filters.owner)
        } else {
            Some(me.id.to_string())
        };
        Self {
            from: non_empty(&filters.from),
            to: non_empty(&filters.to),
            owner,
        }
    }

    pub fn range(from: String, to: String) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            owner: None,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        [("from", &self.from), ("to", &self.to), ("owner", &self.owner)]
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "overall": {"issued": "1500.00", "paid": "900.00", "outstanding": "600.00"},
        "by_type": [
            {"type": "Expensa ordinaria", "count": 12, "issued": 1200, "paid": 800, "outstanding": 400},
            {"type": "Fondo de reserva", "count": 6, "issued": "300.00", "paid": "100.00", "outstanding": "200.00"}
        ],
        "by_period": [
            {"period": "2024-01", "issued": 250, "paid": 200, "outstanding": 50},
            {"period": "2024-02", "issued": 300, "paid": 100, "outstanding": 200}
        ]
    }"#;

    fn user(id: u64, role: &str) -> User {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "username": "u{id}", "profile": {{"role": "{role}"}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn half_year_report_renders_three_cards_and_a_row_per_type() {
        let filters = ReportFilters { from: "2024-01".into(), to: "2024-06".into(), owner: String::new() };
        let query = ReportQuery::scoped(&filters, &user(1, "ADMIN"));
        assert_eq!(
            query.params(),
            vec![("from", "2024-01".to_string()), ("to", "2024-06".to_string())]
        );

        let report: FinanceReport = serde_json::from_str(REPORT).unwrap();
        let cards = report.kpi_cards();
        assert_eq!(cards.iter().map(|c| c.title).collect::<Vec<_>>(), ["Emitido", "Pagado", "Pendiente"]);
        assert_eq!(cards[2].value, 600.0);
        assert_eq!(report.by_type.len(), 2);
        assert_eq!(report.period_scale(), 300.0);
    }

    #[test]
    fn residents_are_scoped_to_themselves() {
        let filters = ReportFilters { owner: "99".into(), ..ReportFilters::default() };
        let query = ReportQuery::scoped(&filters, &user(42, "RESIDENT"));
        assert_eq!(query.params(), vec![("owner", "42".to_string())]);
    }

    #[test]
    fn admin_owner_filter_is_trimmed() {
        let filters = ReportFilters { owner: " 99 ".into(), ..ReportFilters::default() };
        let query = ReportQuery::scoped(&filters, &user(1, "ADMIN"));
        assert_eq!(query.owner.as_deref(), Some("99"));
    }

    #[test]
    fn missing_overall_means_no_cards() {
        let report: FinanceReport = serde_json::from_str("{}").unwrap();
        assert!(report.kpi_cards().is_empty());
        assert_eq!(report.period_scale(), 0.0);
    }

    #[test]
    fn csv_export_quotes_awkward_names() {
        let mut report: FinanceReport = serde_json::from_str(REPORT).unwrap();
        report.by_type[1].expense_type = "Agua, luz".into();
        let csv = report.to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Tipo,# Cuotas,Emitido,Pagado,Pendiente");
        assert_eq!(lines[1], "Expensa ordinaria,12,1200.00,800.00,400.00");
        assert_eq!(lines[2], "\"Agua, luz\",6,300.00,100.00,200.00");
        assert!(report.csv_data_url().unwrap().starts_with("data:text/csv;charset=utf-8,Tipo%2C"));
    }

    #[test]
    fn csv_export_quotes_carriage_returns_and_quotes() {
        let mut report: FinanceReport = serde_json::from_str(REPORT).unwrap();
        report.by_type.truncate(1);
        report.by_type[0].expense_type = "Agua\rLuz \"fría\"".into();
        let csv = report.to_csv().unwrap();
        assert_eq!(
            csv,
            "Tipo,# Cuotas,Emitido,Pagado,Pendiente\n\"Agua\rLuz \"\"fría\"\"\",12,1200.00,800.00,400.00\n"
        );

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Agua\rLuz \"fría\"");
    }
}
