//! Deserializadores tolerantes: el backend serializa decimales como string
//! ("120.00") y a veces números donde esperamos texto.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

/// Monto como número o string decimal; null/ausente/vacío -> 0.0
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Texto que puede llegar como número (ej. `number: 302`)
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Number(n)) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(Raw::Number(n)) => n.to_string(),
        Some(Raw::Text(s)) => s,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::amount")]
        amount: f64,
        #[serde(default, deserialize_with = "super::text")]
        number: String,
    }

    #[test]
    fn amounts_accept_strings_numbers_and_null() {
        let p: Probe = serde_json::from_str(r#"{"amount": "120.50", "number": 302}"#).unwrap();
        assert_eq!(p.amount, 120.5);
        assert_eq!(p.number, "302");

        let p: Probe = serde_json::from_str(r#"{"amount": 80, "number": "B-2"}"#).unwrap();
        assert_eq!(p.amount, 80.0);
        assert_eq!(p.number, "B-2");

        let p: Probe = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.number, "");
    }

    #[test]
    fn garbage_amount_is_an_error() {
        assert!(serde_json::from_str::<Probe>(r#"{"amount": "doce"}"#).is_err());
    }
}
