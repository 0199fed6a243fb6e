//! One panel per analytics service. A panel runs the whole pipeline for a
//! single user action: validate inputs, issue the request, interpret the
//! response and produce either a success render or an error message.

use crate::data::apriori_api::AprioriClient;
use crate::data::kmeans_api::KmeansClient;
use crate::error::ApiError;
use crate::{render, validate};

/// Result of one user action. Success carries a status line and the rendered
/// body; failure carries a single message. The two are never shown together.
#[derive(Debug)]
pub enum Outcome {
    Success { status: String, body: String },
    Failure { message: String },
}

pub struct KmeansPanel {
    client: KmeansClient,
}

impl KmeansPanel {
    pub fn new() -> Self {
        Self {
            client: KmeansClient::new(),
        }
    }

    /// POST a sale record to the save endpoint
    pub async fn save_sale(&self, url_text: &str, payload_text: &str) -> Outcome {
        match self.try_save(url_text, payload_text).await {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failure {
                message: wrap_error("Error al guardar datos", &err),
            },
        }
    }

    async fn try_save(&self, url_text: &str, payload_text: &str) -> Result<Outcome, ApiError> {
        let url = validate::check_url(url_text, "POST")?;
        let payload = validate::parse_sale_payload(payload_text)?;

        tracing::info!("Guardando datos en {}", url);
        let (status, body) = self.client.save(url, &payload).await?;
        tracing::debug!("Datos recibidos: {}", body);

        Ok(Outcome::Success {
            status: format!("✅ Datos guardados exitosamente ({})", status),
            body: render::kmeans_body(&body),
        })
    }

    /// GET previously clustered results
    pub async fn fetch_clustered(&self, url_text: &str) -> Outcome {
        match self.try_fetch(url_text).await {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failure {
                message: wrap_error("Error al obtener datos", &err),
            },
        }
    }

    async fn try_fetch(&self, url_text: &str) -> Result<Outcome, ApiError> {
        let url = validate::check_url(url_text, "GET")?;

        tracing::info!("Obteniendo resultados de {}", url);
        let (status, body) = self.client.fetch(url).await?;
        tracing::debug!("Datos recibidos: {}", body);

        Ok(Outcome::Success {
            status: format!("✅ Datos obtenidos exitosamente ({})", status),
            body: render::kmeans_body(&body),
        })
    }
}

impl Default for KmeansPanel {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AprioriPanel {
    client: AprioriClient,
}

impl AprioriPanel {
    pub fn new() -> Self {
        Self {
            client: AprioriClient::new(),
        }
    }

    /// GET mined association rules
    pub async fn fetch_rules(&self, url_text: &str) -> Outcome {
        match self.try_fetch(url_text).await {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failure {
                message: rule_error_message(&err),
            },
        }
    }

    async fn try_fetch(&self, url_text: &str) -> Result<Outcome, ApiError> {
        let url = validate::check_url(url_text, "GET")?;

        tracing::info!("Consultando reglas en {}", url);
        let (status, report, raw) = self.client.fetch_rules(url).await?;
        tracing::debug!("Datos recibidos: {}", raw);

        Ok(Outcome::Success {
            status: format!("✅ Reglas obtenidas exitosamente ({})", status),
            body: render::rule_report(&report),
        })
    }
}

impl Default for AprioriPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation errors are shown as-is; request-stage errors get the action
/// name as a prefix.
fn wrap_error(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::InvalidUrl(_) | ApiError::InvalidJson | ApiError::MissingFields(_) => {
            err.to_string()
        }
        other => format!("{}: {}", action, other),
    }
}

/// The rule panel additionally maps transport failures to friendlier wording.
fn rule_error_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidUrl(_) | ApiError::UnexpectedFormat => err.to_string(),
        ApiError::Transport(source) => {
            format!("Error al obtener reglas: {}", friendly_transport(source))
        }
        other => format!("Error al obtener reglas: {}", other),
    }
}

fn friendly_transport(err: &reqwest::Error) -> String {
    if err.is_connect() {
        "No se pudo conectar con el servidor. Verifica que el servicio esté en ejecución."
            .to_string()
    } else if err.is_timeout() {
        "El servidor tardó demasiado en responder.".to_string()
    } else if err.is_request() {
        "Fallo de red al enviar la solicitud.".to_string()
    } else {
        err.to_string()
    }
}
