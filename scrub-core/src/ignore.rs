//! # Lista de Palavras Ignoradas
//!
//! Alguns tokens marcados pelo motor externo são falsos positivos conhecidos
//! (ex: "tennant", que o modelo Stanford insiste em marcar como pessoa).
//! Este módulo mantém a lista de exclusão: comparação **case-insensitive** e
//! com espaços nas bordas removidos.
//!
//! Importante: um token ignorado não é só descartado — ele também **quebra**
//! a contiguidade de uma entidade em andamento (ver [`crate::grouper`]).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Palavra ignorada por padrão em todos os detectores.
const DEFAULT_IGNORED: &str = "tennant";

/// Conjunto de palavras a excluir da marcação.
///
/// A normalização (lowercase + trim) acontece na inserção e na consulta, de
/// modo que `"Tennant "` e `"tennant"` são a mesma entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredWords {
    words: HashSet<String>,
}

impl Default for IgnoredWords {
    fn default() -> Self {
        Self::from_list(&[DEFAULT_IGNORED])
    }
}

impl IgnoredWords {
    /// Conjunto vazio (nenhuma palavra é ignorada).
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Constrói a partir de uma lista de palavras.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| normalize(w)).collect(),
        }
    }

    /// Adiciona uma palavra à lista.
    pub fn add(&mut self, word: &str) {
        self.words.insert(normalize(word));
    }

    /// Remove uma palavra da lista.
    pub fn remove(&mut self, word: &str) {
        self.words.remove(&normalize(word));
    }

    /// Verifica se a palavra está na lista. Não muta o conjunto.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_tennant() {
        let ignored = IgnoredWords::default();
        assert!(ignored.contains("tennant"));
        assert!(ignored.contains("Tennant"));
        assert!(ignored.contains("  TENNANT "));
        assert_eq!(ignored.len(), 1);
    }

    #[test]
    fn test_empty_ignores_nothing() {
        let ignored = IgnoredWords::empty();
        assert!(!ignored.contains("tennant"));
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_add_and_remove() {
        let mut ignored = IgnoredWords::empty();
        ignored.add("Doctor");
        assert!(ignored.contains("doctor "));
        ignored.remove("DOCTOR");
        assert!(!ignored.contains("doctor"));
    }
}
