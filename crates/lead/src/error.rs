pub const CONFIG_ERROR_MESSAGE: &str = "Error de configuración del servidor. Intenta más tarde.";
pub const RELAY_ERROR_MESSAGE: &str = "Error al enviar el formulario.";
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Hubo un problema al enviar tu solicitud. Por favor escribe directamente a nuestro email.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("relay endpoint id is missing or still set to the placeholder")]
    Config,

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("relay rejected the submission with status {status}")]
    Rejected { status: u16, messages: Vec<String> },

    #[error("relay response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("relay transport failed: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.into())
    }
}

impl Error {
    /// Message safe to show to a visitor. Technical details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::Config => CONFIG_ERROR_MESSAGE.to_owned(),
            Error::Rejected { messages, .. } if !messages.is_empty() => messages.join(", "),
            Error::Rejected { .. } => RELAY_ERROR_MESSAGE.to_owned(),
            Error::Validate(_) | Error::UnknownField(_) => RELAY_ERROR_MESSAGE.to_owned(),
            Error::Decode(_) | Error::Transport(_) => TRANSPORT_ERROR_MESSAGE.to_owned(),
        }
    }
}
