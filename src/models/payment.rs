use serde::{Deserialize, Serialize};

/// Canned answer of the payment stub. No provider is ever contacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSimulation {
    pub ok: bool,
    pub status: String,
    pub provider: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl PaymentSimulation {
    pub fn paid(timestamp_ms: i64) -> Self {
        PaymentSimulation {
            ok: true,
            status: "paid".to_string(),
            provider: "simulation".to_string(),
            reference: format!("sim-{}", timestamp_ms),
        }
    }
}
