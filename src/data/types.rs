use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A sale record as the clustering service expects it in the POST body.
/// The service treats the fields as opaque; the client only ever checks
/// key presence before sending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub venta_id: i64,
    pub hora: u8,
    pub dia_semana: u8,
    pub id_producto: i64,
    pub cantidad: i64,
    pub precio_total: f64,
}

impl SaleRecord {
    /// Default payload used when the user does not supply one
    pub fn sample() -> Self {
        Self {
            venta_id: 1490,
            hora: 18,
            dia_semana: 5,
            id_producto: 14,
            cantidad: 3,
            precio_total: 15.0,
        }
    }
}

/// One entry of the `resultados` array in a clustering response. Every
/// field is optional; the renderer substitutes "N/A" for missing ones.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterRow {
    #[serde(default)]
    pub cluster: Option<i64>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub venta_id: Option<i64>,
    #[serde(default)]
    pub hora: Option<i64>,
    #[serde(default)]
    pub dia_semana: Option<i64>,
    #[serde(default)]
    pub id_producto: Option<i64>,
    #[serde(default)]
    pub cantidad: Option<i64>,
    #[serde(default)]
    pub precio_total: Option<f64>,
}

/// Extract the rows for the cluster view, if the response qualifies: an
/// array field `resultados` with at least one item carrying a `cluster` key.
pub fn cluster_rows(response: &Value) -> Option<Vec<ClusterRow>> {
    let items = response.get("resultados")?.as_array()?;

    if !items.iter().any(|item| item.get("cluster").is_some()) {
        return None;
    }

    serde_json::from_value(Value::Array(items.clone())).ok()
}

/// Association-rule response. The `reglas` array is the only field whose
/// shape is enforced; the summary fields degrade to "N/A" when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleReport {
    #[serde(default)]
    pub fecha_analisis: Option<String>,
    #[serde(default)]
    pub periodo: Option<String>,
    #[serde(default)]
    pub total_transacciones: Option<i64>,
    #[serde(default)]
    pub reglas: Vec<Rule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub antecedents: Vec<String>,
    #[serde(default)]
    pub consequents: Vec<String>,
    #[serde(default)]
    pub support: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub lift: f64,
}
