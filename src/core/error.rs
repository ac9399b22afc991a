/// Identifiers read from the page that the paint box does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown tool id `{0}`")]
    UnknownTool(String),
    #[error("unknown color channel input `{0}`")]
    UnknownChannel(String),
    #[error("resizer id `{0}` names no edge")]
    UnknownResizer(String),
}
