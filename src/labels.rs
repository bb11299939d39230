//! User-facing strings
//!
//! The directory is presented in Spanish. Every string the renderers show
//! lives here so the terminal and browser hosts stay in sync.

/// Page title
pub const TITLE: &str = "DOCENTES INGENIERÍA INFORMÁTICA TESSFP";

/// Shown until the first successful fetch
pub const LOADING: &str = "Cargando datos...";

/// Prefix for the error view
pub const ERROR_PREFIX: &str = "Error: ";

/// The single message stored in state for any failed fetch cycle
pub const FETCH_FAILED: &str = "Error en la solicitud";

// Card field labels
pub const FIELD_ID: &str = "Clave ISSEMYN";
pub const FIELD_NAME: &str = "Nombre";
pub const FIELD_SEX: &str = "Sexo";
pub const FIELD_PHONE: &str = "Teléfono";

// Chart
pub const CHART_DATASET: &str = "Cantidad de docentes por género";
pub const BAR_MALE: &str = "Masculino";
pub const BAR_FEMALE: &str = "Femenino";

/// Bar colours, in the same order as the bars
pub const COLOR_MALE: &str = "#4CAF50";
pub const COLOR_FEMALE: &str = "#FF4081";

/// Footer shown once data has been fetched
pub const LAST_UPDATE: &str = "Última actualización";
