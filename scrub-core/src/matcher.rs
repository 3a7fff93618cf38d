//! # Compilador de Padrões — Candidatas → Matchers de Palavra Inteira
//!
//! Cada string candidata vira uma regex segura que:
//!
//! 1. Trata todo metacaractere como literal (escape).
//! 2. Aceita qualquer espaçamento entre as palavras (`\s+` no lugar do espaço
//!    simples usado na fusão), já que o texto original pode usar tabs, quebras
//!    de linha ou espaços múltiplos.
//! 3. Exige fronteira de palavra nas duas pontas, para que `"Ann"` não case
//!    dentro de `"Anna"`. As fronteiras respeitam categorias unicode de letra,
//!    não apenas ASCII.
//!
//! Candidatas repetidas dentro de uma categoria compilam **uma vez só**; a
//! mesma string em duas categorias compila duas vezes (um matcher por string
//! única por categoria).
//!
//! Falha de compilação (entrada patológica, já que tudo foi escapado) é
//! **fatal para o documento**: o erro sobe para o chamador com o padrão
//! ofensor, em vez de pular o padrão silenciosamente — um padrão descartado em
//! silêncio significaria entidades perdidas em silêncio.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::debug;

/// Erro de compilação de um padrão de entidade.
///
/// Carrega o código-fonte do padrão ofensor, para diagnóstico estruturado
/// (nada de imprimir e re-lançar).
#[derive(Debug, Error)]
#[error("falha ao compilar o padrão de entidade `{pattern}`: {source}")]
pub struct PatternError {
    /// O código-fonte da regex que não compilou.
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Um matcher compilado para uma string candidata de uma categoria.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// Categoria da candidata (ex: "PERSON").
    pub category: String,
    /// Código-fonte do padrão (útil em logs e testes).
    pub source: String,
    /// A regex compilada, pronta para varrer o texto original.
    pub pattern: Regex,
}

/// Monta o código-fonte do padrão de palavra inteira para uma candidata.
///
/// `"New York"` → `\bNew\s+York\b` (com os devidos escapes).
fn whole_word_pattern(candidate: &str) -> String {
    // O escape não toca o espaço literal, então a troca por `\s+` é segura.
    let escaped = regex::escape(candidate).replace(' ', r"\s+");
    format!(r"\b{escaped}\b")
}

/// Compila os matchers de todas as categorias.
///
/// As candidatas de cada categoria são deduplicadas antes de compilar. A
/// compilação do conjunto inteiro acontece **antes** de qualquer span ser
/// emitido: se um padrão falhar, o documento inteiro falha de forma atômica.
pub fn build_matchers(
    grouped: &HashMap<String, Vec<String>>,
) -> Result<HashMap<String, Vec<CompiledMatcher>>, PatternError> {
    // Dedup por categoria: um matcher por string única por categoria.
    let specs: Vec<(String, String)> = grouped
        .iter()
        .flat_map(|(category, candidates)| {
            let unique: HashSet<&String> = candidates.iter().collect();
            unique
                .into_iter()
                .map(|candidate| (category.clone(), candidate.clone()))
                .collect::<Vec<_>>()
        })
        .collect();

    // Padrões são independentes entre si: compila em paralelo.
    let compiled: Result<Vec<CompiledMatcher>, PatternError> = specs
        .into_par_iter()
        .map(|(category, candidate)| {
            let source = whole_word_pattern(&candidate);
            let pattern = RegexBuilder::new(&source)
                .multi_line(true)
                .unicode(true)
                .build()
                .map_err(|err| PatternError {
                    pattern: source.clone(),
                    source: err,
                })?;
            Ok(CompiledMatcher {
                category,
                source,
                pattern,
            })
        })
        .collect();

    let mut matchers: HashMap<String, Vec<CompiledMatcher>> = HashMap::new();
    for matcher in compiled? {
        matchers.entry(matcher.category.clone()).or_default().push(matcher);
    }
    debug!(
        categories = matchers.len(),
        patterns = matchers.values().map(Vec::len).sum::<usize>(),
        "padrões de entidade compilados"
    );
    Ok(matchers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(cat, list)| {
                (
                    cat.to_string(),
                    list.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_whole_word_pattern_shape() {
        assert_eq!(whole_word_pattern("New York"), r"\bNew\s+York\b");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let matchers = build_matchers(&grouped(&[("ORG", &["A.B. Corp"])])).unwrap();
        let m = &matchers["ORG"][0];
        assert!(m.pattern.is_match("na A.B. Corp ontem"));
        // O ponto é literal: não pode casar com qualquer caractere.
        assert!(!m.pattern.is_match("na AxBx Corp ontem"));
    }

    #[test]
    fn test_whitespace_flexible_across_newline() {
        let matchers = build_matchers(&grouped(&[("LOCATION", &["New York"])])).unwrap();
        let m = &matchers["LOCATION"][0];
        assert!(m.pattern.is_match("I flew to New\nYork yesterday"));
        assert!(m.pattern.is_match("New\t York"));
    }

    #[test]
    fn test_word_boundary_blocks_partial_match() {
        let matchers = build_matchers(&grouped(&[("PERSON", &["Ann"])])).unwrap();
        let m = &matchers["PERSON"][0];
        assert!(!m.pattern.is_match("Anna Smith chegou"));
        assert!(m.pattern.is_match("Ann Smith chegou"));
    }

    #[test]
    fn test_unicode_word_boundary() {
        let matchers = build_matchers(&grouped(&[("PERSON", &["José"])])).unwrap();
        let m = &matchers["PERSON"][0];
        assert!(m.pattern.is_match("o José saiu"));
        // "Joséa" continua dentro de uma palavra unicode: não casa.
        assert!(!m.pattern.is_match("o Joséa saiu"));
    }

    #[test]
    fn test_duplicates_compile_once_per_category() {
        let matchers = build_matchers(&grouped(&[("PERSON", &["Jane", "Jane"])])).unwrap();
        assert_eq!(matchers["PERSON"].len(), 1);
    }

    #[test]
    fn test_same_string_in_two_categories_compiles_twice() {
        let matchers =
            build_matchers(&grouped(&[("PERSON", &["Paris"]), ("LOCATION", &["Paris"])])).unwrap();
        assert_eq!(matchers["PERSON"].len(), 1);
        assert_eq!(matchers["LOCATION"].len(), 1);
    }

    #[test]
    fn test_empty_grouped_yields_no_matchers() {
        let matchers = build_matchers(&HashMap::new()).unwrap();
        assert!(matchers.is_empty());
    }
}
