//! # Localizador de Spans — Varredura do Texto Original
//!
//! Varre o texto original **inteiro** com cada matcher compilado e produz uma
//! ocorrência por casamento, com offsets de byte exatos. A varredura é
//! independente por matcher e por categoria: o mesmo trecho pode ser
//! produzido mais de uma vez sob categorias diferentes, e ocorrências podem
//! se sobrepor — nenhuma deduplicação acontece aqui (isso é comportamento
//! observável pelo chamador, não defeito).
//!
//! A sequência é **preguiçosa** e reiniciável: cada chamada a [`locate`] faz
//! uma passada nova do zero, e o chamador pode abandonar a iteração em
//! qualquer ponto sem limpeza adicional.

use std::collections::HashMap;

use crate::matcher::CompiledMatcher;

/// Uma ocorrência crua encontrada no texto original, ainda sem tipo de saída.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedMatch {
    /// Índice de byte inicial (inclusivo).
    pub start: usize,
    /// Índice de byte final (exclusivo).
    pub end: usize,
    /// O trecho casado, exatamente como aparece no original.
    pub text: String,
    /// Categoria do matcher que encontrou a ocorrência.
    pub category: String,
}

/// Produz todas as ocorrências de todos os matchers no texto original.
///
/// Dentro de um mesmo padrão, as ocorrências vêm da esquerda para a direita
/// (casamentos não sobrepostos, mais à esquerda primeiro). Entre padrões e
/// entre categorias **não há ordem garantida** — quem precisar de ordem
/// estável deve ordenar por `start`.
pub fn locate<'a>(
    text: &'a str,
    matchers: &'a HashMap<String, Vec<CompiledMatcher>>,
) -> impl Iterator<Item = LocatedMatch> + 'a {
    matchers.iter().flat_map(move |(category, list)| {
        list.iter().flat_map(move |matcher| {
            matcher.pattern.find_iter(text).map(move |found| LocatedMatch {
                start: found.start(),
                end: found.end(),
                text: found.as_str().to_string(),
                category: category.clone(),
            })
        })
    })
}
