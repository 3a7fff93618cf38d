//! # Modelo de Saída — Tipos de "Filth" e Spans Localizados
//!
//! Define o que o pipeline entrega ao resto do sistema: spans com offsets de
//! byte no texto **original**, já tipados segundo a tabela de configuração
//! categoria → tipo de saída.
//!
//! ## Tipos de saída
//!
//! | Variante     | Significado              | Exemplos                       |
//! |--------------|--------------------------|--------------------------------|
//! | Name         | Nome de pessoa           | Jane, John Smith               |
//! | Organization | Organização              | National Hospital, Petrobras   |
//! | Location     | Local/geográfico         | London, São Paulo              |

use serde::{Deserialize, Serialize};

/// Tipo de dado sensível associado a um span localizado.
///
/// Enum **fechado**: a tabela categoria → tipo é configuração, mas o conjunto
/// de tipos de saída é fixo e conhecido em tempo de compilação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilthKind {
    /// Nome de pessoa.
    Name,
    /// Nome de organização.
    Organization,
    /// Local geográfico.
    Location,
}

impl FilthKind {
    /// Nome do tipo como string (para serialização e logs).
    pub fn name(&self) -> &'static str {
        match self {
            FilthKind::Name => "name",
            FilthKind::Organization => "organization",
            FilthKind::Location => "location",
        }
    }
}

impl std::fmt::Display for FilthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Uma ocorrência localizada de entidade no texto original.
///
/// Os offsets são **índices de byte** no texto original, `end` exclusivo, e
/// vale sempre `text == &original[start..end]`. Spans não são deduplicados:
/// a mesma região pode aparecer mais de uma vez sob tipos diferentes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilthSpan {
    /// Índice de byte inicial no texto original (inclusivo).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// O trecho exato do texto original coberto pelo span.
    pub text: String,
    /// Tipo de dado sensível, vindo da tabela de configuração.
    pub kind: FilthKind,
    /// Nome do detector que produziu o span (proveniência).
    pub detector_name: String,
    /// Nome do documento, se informado pelo chamador.
    pub document_name: Option<String>,
    /// Locale do documento (ex: "en_GB"), propagado verbatim.
    pub locale: String,
}
