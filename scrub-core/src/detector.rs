//! # Detector — Orquestrador do Pipeline
//!
//! Conecta os quatro estágios em linha reta:
//!
//! tokens anotados → [`grouper`](crate::grouper) → [`matcher`](crate::matcher)
//! → [`locator`](crate::locator) → [`emitter`](crate::emitter) → spans.
//!
//! Nenhum estado é mantido entre documentos: cada chamada a [`EntityDetector::detect`]
//! é independente e livre de efeitos colaterais, então o mesmo detector pode
//! ser usado de várias threads ao mesmo tempo.
//!
//! ## Presets de motor
//!
//! A tabela categoria → tipo é configuração, e cada motor externo usa códigos
//! próprios. Os presets reproduzem as três tabelas conhecidas:
//!
//! | Preset     | Pessoa   | Organização    | Local      |
//! |------------|----------|----------------|------------|
//! | `stanford` | PERSON   | ORGANIZATION   | LOCATION   |
//! | `stanza`   | PERSON   | ORG            | LOC        |
//! | `corenlp`  | PERSON   | ORGANIZATION   | LOCATION   |
//!
//! Pessoa e organização vêm habilitadas; local é opcional (`with_location()`).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotator::{AnnotatedToken, TokenAnnotator};
use crate::emitter::emit;
use crate::filth::{FilthKind, FilthSpan};
use crate::grouper::group_runs;
use crate::ignore::IgnoredWords;
use crate::locator::locate;
use crate::matcher::{build_matchers, PatternError};

/// Locale padrão dos documentos quando o chamador não informa outro.
const DEFAULT_LOCALE: &str = "en_US";

/// Detector de entidades: localiza no texto original as entidades que o motor
/// externo marcou, e as emite como spans tipados.
///
/// # Exemplo
///
/// ```rust
/// use scrub_core::{AnnotatedToken, EntityDetector};
///
/// let detector = EntityDetector::stanford();
/// let tags = vec![
///     AnnotatedToken::new("Jane", "PERSON"),
///     AnnotatedToken::new("is", "O"),
///     AnnotatedToken::new("here", "O"),
/// ];
/// let spans = detector.detect("Jane is here.", &tags, None).unwrap();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].text, "Jane");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDetector {
    /// Tabela categoria do motor → tipo de saída. Só categorias presentes aqui
    /// são rastreadas; o resto é descartado no agrupamento.
    filth_lookup: HashMap<String, FilthKind>,
    /// Palavras excluídas da marcação (quebram contiguidade).
    ignored: IgnoredWords,
    /// Nome do detector, propagado em cada span (proveniência).
    name: String,
    /// Locale dos documentos (ex: "en_GB"), propagado verbatim.
    locale: String,
    /// Rótulo que o motor deste preset usa para locais (ex: "LOCATION", "LOC").
    /// Fixado na construção do preset; independe do nome de proveniência.
    location_label: String,
}

impl EntityDetector {
    /// Detector com uma tabela categoria → tipo arbitrária.
    pub fn new(filth_lookup: HashMap<String, FilthKind>, name: impl Into<String>) -> Self {
        Self {
            filth_lookup,
            ignored: IgnoredWords::default(),
            name: name.into(),
            locale: DEFAULT_LOCALE.to_string(),
            location_label: "LOCATION".to_string(),
        }
    }

    /// Preset do tagger CRF Stanford (rótulos por extenso).
    pub fn stanford() -> Self {
        Self::new(
            [
                ("PERSON".to_string(), FilthKind::Name),
                ("ORGANIZATION".to_string(), FilthKind::Organization),
            ]
            .into_iter()
            .collect(),
            "stanford",
        )
    }

    /// Preset do pipeline Stanza (rótulos abreviados para ORG/LOC).
    pub fn stanza() -> Self {
        let mut detector = Self::new(
            [
                ("PERSON".to_string(), FilthKind::Name),
                ("ORG".to_string(), FilthKind::Organization),
            ]
            .into_iter()
            .collect(),
            "stanza",
        );
        detector.location_label = "LOC".to_string();
        detector
    }

    /// Preset do servidor de anotação CoreNLP (mesmos rótulos do Stanford).
    pub fn corenlp() -> Self {
        Self::new(
            [
                ("PERSON".to_string(), FilthKind::Name),
                ("ORGANIZATION".to_string(), FilthKind::Organization),
            ]
            .into_iter()
            .collect(),
            "corenlp",
        )
    }

    /// Habilita a categoria de local do preset (desabilitada por padrão).
    ///
    /// O rótulo usado é o do preset (ex: "LOC" para stanza), não o nome de
    /// proveniência — renomear o detector não muda o que o motor emite.
    pub fn with_location(mut self) -> Self {
        self.filth_lookup
            .insert(self.location_label.clone(), FilthKind::Location);
        self
    }

    /// Sobrescreve o rótulo de local esperado do motor (para motores com
    /// tabelas de rótulos fora dos presets).
    pub fn with_location_label(mut self, label: impl Into<String>) -> Self {
        self.location_label = label.into();
        self
    }

    /// Remove a categoria de pessoa do preset.
    pub fn without_person(mut self) -> Self {
        self.filth_lookup.retain(|_, kind| *kind != FilthKind::Name);
        self
    }

    /// Remove a categoria de organização do preset.
    pub fn without_organization(mut self) -> Self {
        self.filth_lookup
            .retain(|_, kind| *kind != FilthKind::Organization);
        self
    }

    /// Substitui a lista de palavras ignoradas.
    pub fn with_ignored_words(mut self, ignored: IgnoredWords) -> Self {
        self.ignored = ignored;
        self
    }

    /// Sobrescreve o nome do detector.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Define o locale dos documentos.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Nome do detector (proveniência dos spans).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categorias rastreadas no momento.
    pub fn tracked_categories(&self) -> HashSet<String> {
        self.filth_lookup.keys().cloned().collect()
    }

    /// Executa o pipeline completo para um documento.
    ///
    /// Todos os padrões do documento são compilados **antes** de qualquer span
    /// ser produzido: uma falha de compilação retorna [`PatternError`] sem
    /// emitir nada (falha atômica por documento). Texto vazio ou lista de tags
    /// vazia produzem um vetor vazio, não um erro.
    ///
    /// A ordem dos spans entre categorias não é garantida; ordene por `start`
    /// se precisar de saída estável.
    pub fn detect(
        &self,
        text: &str,
        tags: &[AnnotatedToken],
        document_name: Option<&str>,
    ) -> Result<Vec<FilthSpan>, PatternError> {
        let categories = self.tracked_categories();
        let grouped = group_runs(tags, &categories, &self.ignored);
        debug!(
            detector = %self.name,
            candidates = grouped.values().map(Vec::len).sum::<usize>(),
            "candidatas agrupadas"
        );

        let matchers = build_matchers(&grouped)?;
        let spans: Vec<FilthSpan> = emit(
            locate(text, &matchers),
            &self.filth_lookup,
            &self.name,
            document_name,
            &self.locale,
        )
        .collect();
        debug!(detector = %self.name, spans = spans.len(), "spans localizados");
        Ok(spans)
    }

    /// Obtém as tags de um [`TokenAnnotator`] e roda [`detect`](Self::detect).
    pub fn detect_with<A: TokenAnnotator>(
        &self,
        annotator: &A,
        text: &str,
        document_name: Option<&str>,
    ) -> Result<Vec<FilthSpan>, PatternError> {
        let tags = annotator.annotate(text);
        self.detect(text, &tags, document_name)
    }

    /// Verifica se o detector suporta o locale dado (só inglês, por ora).
    ///
    /// Formato esperado: código de língua minúsculo, opcionalmente seguido de
    /// `_` e código de país (ex: "en", "en_GB", "de_CH").
    pub fn supports_locale(locale: &str) -> bool {
        let (language, _region) = locale_split(locale);
        language == "en"
    }
}

/// Separa um locale em (língua, região). `"en_GB"` → `("en", Some("GB"))`.
pub fn locale_split(locale: &str) -> (&str, Option<&str>) {
    match locale.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (locale, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Vec<AnnotatedToken> {
        pairs
            .iter()
            .map(|(t, c)| AnnotatedToken::new(*t, *c))
            .collect()
    }

    fn sorted(mut spans: Vec<FilthSpan>) -> Vec<FilthSpan> {
        spans.sort_by_key(|s| (s.start, s.end, s.kind.name()));
        spans
    }

    #[test]
    fn test_national_hospital_scenario() {
        let detector = EntityDetector::stanza().with_ignored_words(IgnoredWords::empty());
        let text = "Jane has an appointment at the National Hospital of Neurology and Neurosurgery today.";
        let tokens = tags(&[
            ("Jane", "PERSON"),
            ("National", "ORG"),
            ("Hospital", "ORG"),
            ("of", "ORG"),
            ("Neurology", "ORG"),
        ]);
        let spans = sorted(detector.detect(text, &tokens, None).unwrap());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Jane");
        assert_eq!(spans[0].kind, FilthKind::Name);
        assert_eq!(spans[1].text, "National Hospital of Neurology");
        assert_eq!(spans[1].kind, FilthKind::Organization);
        assert_eq!(&text[spans[1].start..spans[1].end], spans[1].text);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let detector = EntityDetector::stanford();
        let text = "Jane met Jane at Acme Corp.";
        let tokens = tags(&[
            ("Jane", "PERSON"),
            ("met", "O"),
            ("Jane", "PERSON"),
            ("Acme", "ORGANIZATION"),
            ("Corp", "ORGANIZATION"),
        ]);
        let first = sorted(detector.detect(text, &tokens, None).unwrap());
        let second = sorted(detector.detect(text, &tokens, None).unwrap());
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_round_trip_containment() {
        let detector = EntityDetector::stanford().with_location();
        let text = "John  Smith mora em New\nYork.";
        let tokens = tags(&[
            ("John", "PERSON"),
            ("Smith", "PERSON"),
            ("New", "LOCATION"),
            ("York", "LOCATION"),
        ]);
        for span in detector.detect(text, &tokens, None).unwrap() {
            assert_eq!(&text[span.start..span.end], span.text);
            // Módulo colapso de espaços, o trecho equivale à candidata fundida.
            let collapsed = span.text.split_whitespace().collect::<Vec<_>>().join(" ");
            assert!(["John Smith", "New York"].contains(&collapsed.as_str()));
        }
    }

    #[test]
    fn test_cross_category_overlap_emitted_twice() {
        let detector = EntityDetector::stanford().with_location();
        let text = "Paris decidiu.";
        // Classificação dupla do mesmo token em chamadas distintas do motor:
        // o agrupador trata categorias de forma independente.
        let tokens = tags(&[("Paris", "PERSON"), ("decidiu", "O"), ("Paris", "LOCATION")]);
        let spans = detector.detect(text, &tokens, None).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, spans[1].start);
        let kinds: HashSet<&str> = spans.iter().map(|s| s.kind.name()).collect();
        assert!(kinds.contains("name") && kinds.contains("location"));
    }

    #[test]
    fn test_empty_text_and_empty_tags_yield_nothing() {
        let detector = EntityDetector::stanford();
        assert!(detector.detect("", &[], None).unwrap().is_empty());
        assert!(detector
            .detect("texto sem tags", &[], None)
            .unwrap()
            .is_empty());
        assert!(detector
            .detect("", &tags(&[("Jane", "PERSON")]), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_default_ignore_list_breaks_person_run() {
        let detector = EntityDetector::stanford();
        let text = "Jane tennant Jane";
        let tokens = tags(&[("Jane", "PERSON"), ("tennant", "PERSON"), ("Jane", "PERSON")]);
        let spans = sorted(detector.detect(text, &tokens, None).unwrap());
        // Duas ocorrências de "Jane"; "tennant" nunca vira span nem funde as duas.
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.text == "Jane"));
    }

    #[test]
    fn test_location_disabled_by_default() {
        let detector = EntityDetector::stanford();
        let tokens = tags(&[("London", "LOCATION")]);
        let spans = detector.detect("London calling.", &tokens, None).unwrap();
        assert!(spans.is_empty());

        let with_loc = EntityDetector::stanford().with_location();
        let spans = with_loc.detect("London calling.", &tokens, None).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, FilthKind::Location);
    }

    #[test]
    fn test_renamed_detector_keeps_preset_location_label() {
        // Renomear é só proveniência: o preset stanza continua esperando "LOC".
        let detector = EntityDetector::stanza()
            .with_name("meu-stanza")
            .with_location();
        let tokens = tags(&[("London", "LOC")]);
        let spans = detector.detect("London calling.", &tokens, None).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, FilthKind::Location);
        assert_eq!(spans[0].detector_name, "meu-stanza");
    }

    #[test]
    fn test_custom_location_label() {
        let detector = EntityDetector::stanford()
            .with_location_label("GPE")
            .with_location();
        let tokens = tags(&[("London", "GPE")]);
        let spans = detector.detect("London calling.", &tokens, None).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, FilthKind::Location);
    }

    #[test]
    fn test_without_toggles_shrink_the_table() {
        let detector = EntityDetector::stanza().without_organization();
        let tokens = tags(&[("Acme", "ORG"), ("Jane", "PERSON")]);
        let spans = detector.detect("Acme e Jane.", &tokens, None).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, FilthKind::Name);
    }

    #[test]
    fn test_provenance_and_document_name() {
        let detector = EntityDetector::corenlp().with_locale("en_GB");
        let tokens = tags(&[("Jane", "PERSON")]);
        let spans = detector
            .detect("Jane chegou.", &tokens, Some("carta.txt"))
            .unwrap();
        assert_eq!(spans[0].detector_name, "corenlp");
        assert_eq!(spans[0].document_name.as_deref(), Some("carta.txt"));
        assert_eq!(spans[0].locale, "en_GB");
    }

    #[test]
    fn test_detect_with_annotator() {
        use crate::annotator::FixedAnnotator;

        let detector = EntityDetector::stanford();
        let annotator = FixedAnnotator::from_pairs(&[("Jane", "PERSON")]);
        let spans = detector
            .detect_with(&annotator, "Jane chegou.", None)
            .unwrap();
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_locale_split_and_support() {
        assert_eq!(locale_split("en_GB"), ("en", Some("GB")));
        assert_eq!(locale_split("en"), ("en", None));
        assert!(EntityDetector::supports_locale("en_US"));
        assert!(EntityDetector::supports_locale("en"));
        assert!(!EntityDetector::supports_locale("de_CH"));
    }
}
