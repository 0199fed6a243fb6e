//! Formatting of API responses into the text the user sees: per-cluster
//! tables for clustering results, summary plus cards for association rules.

use serde_json::Value;

use crate::data::types::{cluster_rows, ClusterRow, Rule, RuleReport};

/// Sunday-first day names used by the clustering service
const DAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Day index to name; out-of-range indexes fall back to "Día N"
pub fn day_name(index: i64) -> String {
    if (0..7).contains(&index) {
        DAY_NAMES[index as usize].to_string()
    } else {
        format!("Día {}", index)
    }
}

fn fmt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn fmt_hour(value: Option<i64>) -> String {
    value
        .map(|hour| format!("{}:00", hour))
        .unwrap_or_else(|| "N/A".to_string())
}

fn fmt_day(value: Option<i64>) -> String {
    value.map(day_name).unwrap_or_else(|| "N/A".to_string())
}

fn fmt_price(value: Option<f64>) -> String {
    value
        .map(|price| format!("${:.2}", price))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Full body for a clustering response: the cluster view first when the
/// response qualifies, then the complete JSON pretty-printed.
pub fn kmeans_body(response: &Value) -> String {
    let mut out = String::new();

    if let Some(rows) = cluster_rows(response) {
        out.push_str(&cluster_view(&rows));
        out.push('\n');
    }

    out.push_str(&json_section(response));
    out
}

/// The raw response, pretty-printed under its own heading
pub fn json_section(response: &Value) -> String {
    let pretty =
        serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    format!("Respuesta JSON Completa\n{}\n", pretty)
}

struct ClusterGroup<'a> {
    id: i64,
    title: String,
    items: Vec<&'a ClusterRow>,
}

/// One table per cluster, in first-seen order. Items without a cluster (or
/// cluster 0) land in group 0. The group title comes from the first item's
/// `descripcion`, falling back to "Cluster N".
pub fn cluster_view(rows: &[ClusterRow]) -> String {
    let mut groups: Vec<ClusterGroup> = Vec::new();

    for row in rows {
        let id = row.cluster.unwrap_or(0);
        match groups.iter_mut().find(|group| group.id == id) {
            Some(group) => group.items.push(row),
            None => groups.push(ClusterGroup {
                id,
                title: row
                    .descripcion
                    .clone()
                    .unwrap_or_else(|| format!("Cluster {}", id)),
                items: vec![row],
            }),
        }
    }

    let mut out = String::from("Vista de Clusters\n");

    for group in &groups {
        out.push('\n');
        out.push_str(&format!("{} ({} elementos)\n", group.title, group.items.len()));
        out.push_str(&format!(
            "  {:<8} | {:<5} | {:<10} | {:<8} | {:<8} | {:<10}\n",
            "Venta ID", "Hora", "Día", "Producto", "Cantidad", "Total"
        ));
        out.push_str("  ---------|-------|------------|----------|----------|-----------\n");

        for item in &group.items {
            out.push_str(&format!(
                "  {:<8} | {:<5} | {:<10} | {:<8} | {:<8} | {:<10}\n",
                fmt_int(item.venta_id),
                fmt_hour(item.hora),
                fmt_day(item.dia_semana),
                fmt_int(item.id_producto),
                fmt_int(item.cantidad),
                fmt_price(item.precio_total),
            ));
        }
    }

    out
}

/// Summary block followed by one card per rule, in response order
pub fn rule_report(report: &RuleReport) -> String {
    let mut out = String::from("📋 Reglas de Asociación\n");

    out.push_str(&format!(
        "Fecha de análisis: {}\n",
        report.fecha_analisis.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Período: {}\n",
        report.periodo.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Transacciones analizadas: {}\n",
        report
            .total_transacciones
            .map(|total| total.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    ));
    out.push_str(&format!("Reglas encontradas: {}\n", report.reglas.len()));

    for (index, rule) in report.reglas.iter().enumerate() {
        out.push('\n');
        out.push_str(&rule_card(index + 1, rule));
    }

    out
}

fn rule_card(index: usize, rule: &Rule) -> String {
    format!(
        "Regla #{}: {} → {}\n  Soporte: {:.2}%\n  Confianza: {:.2}%\n  Lift: {:.2}\n",
        index,
        rule.antecedents.join(", "),
        rule.consequents.join(", "),
        rule.support * 100.0,
        rule.confidence * 100.0,
        rule.lift,
    )
}
