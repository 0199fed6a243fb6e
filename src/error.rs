use thiserror::Error;

/// Everything that can go wrong during a single user action, from local
/// validation through the HTTP round trip to the response-shape check.
/// Validation variants are raised before any network call is made.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Por favor ingresa una URL válida para el endpoint {0}")]
    InvalidUrl(&'static str),

    #[error("Los datos para POST deben estar en formato JSON válido")]
    InvalidJson,

    #[error("Faltan campos requeridos: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Error HTTP: {0}")]
    Http(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("La respuesta del servidor no tiene el formato esperado (no se encontró la lista 'reglas')")]
    UnexpectedFormat,
}
