// src/error.rs

use thiserror::Error;

/// Fehlerarten der Geometrie- und Katalog-Pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudioError {
    /// Ein Katalogprofil verletzt seine Daten-Invarianten.
    #[error("invalid profile '{id}': {reason}")]
    InvalidProfile { id: String, reason: String },

    /// Eine Kurvenoperation hat zu wenige Punkte bekommen.
    #[error("insufficient points: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    /// Nachschlag mit einer id, die der Katalog nicht kennt.
    #[error("unknown {kind} id '{id}'")]
    UnknownCatalogId { kind: &'static str, id: String },

    /// Ein Motiv ließ sich nicht in eine Textur rastern.
    #[error("texture encoding for pattern '{id}' failed: {reason}")]
    TextureEncoding { id: String, reason: String },
}

pub type StudioResult<T> = Result<T, StudioError>;
