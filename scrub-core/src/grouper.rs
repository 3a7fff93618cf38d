//! # Agrupador de Sequências — Tokens Contíguos → Entidades Candidatas
//!
//! O motor externo devolve a entidade "National Hospital of Neurology" como
//! quatro tokens separados, todos com a mesma categoria. Este módulo desfaz a
//! tokenização: percorre a sequência uma única vez e funde **sequências
//! contíguas** de tokens com a mesma categoria em uma string candidata,
//! juntando com espaço simples.
//!
//! ## Regras de contiguidade
//!
//! - Token com categoria rastreada e fora da lista de ignorados: estende a
//!   sequência atual (se a categoria for a mesma) ou inicia uma nova.
//! - Qualquer outro token (categoria não rastreada, ou palavra ignorada)
//!   **encerra** a sequência em andamento — mesmo que o token seguinte tenha a
//!   mesma categoria do anterior. Política deliberada: um token ignorado nunca
//!   é "pulado por cima".
//!
//! ## Exemplo
//!
//! `[("Jane","PERSON"), ("tennant","PERSON"), ("Jane","PERSON")]` com a lista
//! de ignorados padrão produz `{"PERSON": ["Jane", "Jane"]}` — duas candidatas
//! de um token, nunca `"Jane Jane"`.

use std::collections::{HashMap, HashSet};

use crate::annotator::AnnotatedToken;
use crate::ignore::IgnoredWords;

/// Agrupa tokens contíguos de mesma categoria em strings candidatas.
///
/// Retorna categoria → lista ordenada de strings fundidas. Duplicatas são
/// **mantidas** neste estágio (a deduplicação é papel do compilador de
/// padrões). Categorias sem nenhum token sobrevivente ficam ausentes do mapa.
pub fn group_runs(
    tokens: &[AnnotatedToken],
    categories: &HashSet<String>,
    ignored: &IgnoredWords,
) -> HashMap<String, Vec<String>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    // Acumulador local: a categoria do último token que entrou numa sequência.
    let mut previous: Option<String> = None;

    for token in tokens {
        if categories.contains(&token.category) && !ignored.contains(&token.text) {
            let same_run = previous.as_deref() == Some(token.category.as_str());
            let entry = grouped.entry(token.category.clone()).or_default();
            if same_run {
                // Estende a candidata em andamento desta categoria.
                if let Some(last) = entry.last_mut() {
                    last.push(' ');
                    last.push_str(&token.text);
                }
            } else {
                entry.push(token.text.clone());
            }
            previous = Some(token.category.clone());
        } else {
            // Token ignorado ou de categoria não rastreada quebra a sequência.
            previous = None;
        }
    }

    grouped
}
