use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, NaiveDateTime};

/// Pago recibido (solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Payment {
    #[serde(default)]
    pub payment_time: String,
    #[serde(default)]
    pub ticket_code: Option<String>,
    #[serde(default)]
    pub external_pos_id: Option<String>,
    /// `None` cuando el backend manda null o algo que no es un número
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: String,
}

impl Payment {
    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }

    /// Fecha legible `dd/mm/YYYY HH:MM:SS`; si no se puede parsear se devuelve tal cual
    pub fn formatted_time(&self) -> String {
        let raw = self.payment_time.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%d/%m/%Y %H:%M:%S").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%d/%m/%Y %H:%M:%S").to_string();
        }
        raw.to_string()
    }

    pub fn formatted_amount(&self) -> String {
        match self.amount {
            Some(amount) => format!("${:.2}", amount),
            None => "N/A".to_string(),
        }
    }
}

// El backend serializa Decimal como string ("12.50"), pero aceptamos número también.
// Un monto ilegible no debe tumbar la página entera: queda en None.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(json: &str) -> Payment {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_monto_como_string_o_numero() {
        let p = payment(r#"{"payment_time": "2024-05-01T12:30:00", "amount": "12.5", "status": "approved"}"#);
        assert_eq!(p.formatted_amount(), "$12.50");
        let p = payment(r#"{"payment_time": "2024-05-01T12:30:00", "amount": 3, "status": "pending"}"#);
        assert_eq!(p.formatted_amount(), "$3.00");
        assert!(!p.is_approved());
    }

    #[test]
    fn test_monto_ilegible_no_rompe_la_pagina() {
        let page: Vec<Payment> = serde_json::from_str(
            r#"[
                {"payment_time": "2024-05-01T12:30:00", "amount": "10.00", "status": "approved"},
                {"payment_time": "2024-05-01T12:31:00", "amount": null, "status": "approved"},
                {"payment_time": "2024-05-01T12:32:00", "amount": "doce"},
                {"payment_time": "2024-05-01T12:33:00", "status": "pending"}
            ]"#,
        )
        .unwrap();
        assert_eq!(page.len(), 4);
        assert_eq!(page[0].formatted_amount(), "$10.00");
        assert_eq!(page[1].amount, None);
        assert_eq!(page[1].formatted_amount(), "N/A");
        assert_eq!(page[2].formatted_amount(), "N/A");
        assert_eq!(page[2].status, "");
        assert_eq!(page[3].amount, None);
    }

    #[test]
    fn test_formato_fecha() {
        let p = payment(r#"{"payment_time": "2024-05-01T12:30:05.123456", "amount": 1, "status": "approved"}"#);
        assert_eq!(p.formatted_time(), "01/05/2024 12:30:05");
        let p = payment(r#"{"payment_time": "2024-05-01T12:30:05+00:00", "amount": 1, "status": "approved"}"#);
        assert_eq!(p.formatted_time(), "01/05/2024 12:30:05");
        let p = payment(r#"{"payment_time": "ayer", "amount": 1, "status": "approved"}"#);
        assert_eq!(p.formatted_time(), "ayer");
    }
}
