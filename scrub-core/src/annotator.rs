//! # Colaborador Externo — Anotador de Tokens
//!
//! O núcleo deste crate **não faz NER**: a marcação dos tokens vem de um motor
//! externo (ex: um tagger CRF em Java, um servidor de anotação, ou um pipeline
//! neural). Este módulo define o contrato mínimo com esse colaborador:
//! uma sequência ordenada de pares (texto do token, categoria).
//!
//! O anotador pode omitir tokens que não são entidade, ou devolvê-los com uma
//! categoria fora da tabela configurada (ex: `"O"`) — ambos os casos são
//! simplesmente descartados no agrupamento.

use serde::{Deserialize, Serialize};

/// Um token anotado pelo motor externo de NER.
///
/// Diferente de um token de tokenizador, **não carrega offsets**: o motor
/// externo descarta a posição original, e é exatamente por isso que o pipeline
/// precisa relocalizar as entidades por conteúdo no texto original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// O texto do token (ex: "Jane", "Hospital").
    pub text: String,
    /// Código da categoria atribuída pelo motor (ex: "PERSON", "ORG", "O").
    pub category: String,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Contrato do motor externo de anotação.
///
/// A implementação real (processo Java, serviço HTTP, modelo neural) fica fora
/// deste crate. O contrato exige apenas: tokens **em ordem de documento**,
/// possivelmente com lacunas (tokens não-entidade ausentes).
pub trait TokenAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}

/// Anotador "enlatado" que devolve sempre a mesma lista pré-computada.
///
/// Útil em testes e no servidor web, onde as tags chegam prontas junto com o
/// documento em vez de serem produzidas localmente.
#[derive(Debug, Clone, Default)]
pub struct FixedAnnotator {
    tokens: Vec<AnnotatedToken>,
}

impl FixedAnnotator {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    /// Constrói a partir de pares `(texto, categoria)`.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            tokens: pairs
                .iter()
                .map(|(text, category)| AnnotatedToken::new(*text, *category))
                .collect(),
        }
    }
}

impl TokenAnnotator for FixedAnnotator {
    fn annotate(&self, _text: &str) -> Vec<AnnotatedToken> {
        self.tokens.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_annotator_replays_pairs() {
        let annotator = FixedAnnotator::from_pairs(&[("Jane", "PERSON"), ("London", "LOCATION")]);
        let tokens = annotator.annotate("qualquer texto");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], AnnotatedToken::new("Jane", "PERSON"));
        assert_eq!(tokens[1].category, "LOCATION");
    }
}
