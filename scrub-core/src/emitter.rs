//! # Emissor de Spans — Ocorrências Cruas → Registros Tipados
//!
//! Último estágio do pipeline: mapeamento puro de cada ocorrência localizada
//! para um [`FilthSpan`], usando a tabela categoria → tipo de saída fornecida
//! pelo chamador e propagando os campos de proveniência (nome do detector,
//! nome do documento, locale) verbatim.
//!
//! Nenhuma filtragem acontece aqui — ela já aconteceu no agrupamento. Uma
//! categoria fora da tabela (que o pipeline normal nunca produz) é pulada em
//! silêncio, coerente com a política de "categoria desconhecida não é erro".

use std::collections::HashMap;

use crate::filth::{FilthKind, FilthSpan};
use crate::locator::LocatedMatch;

/// Converte ocorrências localizadas em spans tipados, preguiçosamente.
pub fn emit<'a, I>(
    located: I,
    filth_lookup: &'a HashMap<String, FilthKind>,
    detector_name: &'a str,
    document_name: Option<&'a str>,
    locale: &'a str,
) -> impl Iterator<Item = FilthSpan> + 'a
where
    I: Iterator<Item = LocatedMatch> + 'a,
{
    located.filter_map(move |found| {
        filth_lookup.get(&found.category).map(|kind| FilthSpan {
            start: found.start,
            end: found.end,
            text: found.text,
            kind: *kind,
            detector_name: detector_name.to_string(),
            document_name: document_name.map(str::to_string),
            locale: locale.to_string(),
        })
    })
}
