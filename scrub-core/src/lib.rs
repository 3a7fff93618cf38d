//! # scrub-core — Reconstrução de Offsets de Entidades Nomeadas
//!
//! Este crate resolve um problema pequeno e traiçoeiro: um motor externo de
//! NER devolve pares (texto do token, categoria) **sem offsets** — a
//! tokenização descartou o espaçamento e o contexto originais. Para redigir ou
//! anotar o documento, precisamos de spans exatos no texto original. O crate
//! desfaz a tokenização e relocaliza cada entidade **por conteúdo**.
//!
//! ## Arquitetura do Pipeline
//!
//! Quatro componentes em linha reta, sem estado entre documentos:
//!
//! 1. **Agrupamento** ([`grouper`]): funde sequências contíguas de tokens de
//!    mesma categoria em strings candidatas ("National" + "Hospital" + "of" +
//!    "Neurology" → "National Hospital of Neurology"), respeitando a lista de
//!    palavras ignoradas ([`ignore`]).
//! 2. **Compilação** ([`matcher`]): deduplica as candidatas por categoria e
//!    compila cada uma em uma regex de palavra inteira, tolerante a qualquer
//!    espaçamento entre as palavras.
//! 3. **Localização** ([`locator`]): varre o texto original inteiro com cada
//!    matcher e produz toda ocorrência, com offsets de byte exatos.
//! 4. **Emissão** ([`emitter`]): mapeia cada ocorrência para um [`FilthSpan`]
//!    tipado, usando a tabela categoria → tipo da configuração.
//!
//! O orquestrador ([`detector`]) amarra os estágios e carrega a configuração
//! (tabela de categorias, palavras ignoradas, nome do detector, locale).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use scrub_core::{AnnotatedToken, EntityDetector};
//!
//! // Tags vindas do motor externo de NER, em ordem de documento.
//! let tags = vec![
//!     AnnotatedToken::new("Jane", "PERSON"),
//!     AnnotatedToken::new("National", "ORGANIZATION"),
//!     AnnotatedToken::new("Hospital", "ORGANIZATION"),
//! ];
//!
//! let text = "Jane works at the National Hospital.";
//! let detector = EntityDetector::stanford();
//! let mut spans = detector.detect(text, &tags, None).unwrap();
//! spans.sort_by_key(|s| s.start);
//!
//! assert_eq!(spans[0].text, "Jane");
//! assert_eq!(spans[1].text, "National Hospital");
//! assert_eq!(&text[spans[1].start..spans[1].end], "National Hospital");
//! ```
//!
//! ## O que este crate NÃO faz
//!
//! - Não roda NER: o motor (processo Java, serviço, modelo neural) é um
//!   colaborador externo, representado pelo trait [`TokenAnnotator`].
//! - Não baixa nem gerencia modelos.
//! - Não deduplica spans sobrepostos: a mesma região pode sair duas vezes sob
//!   categorias diferentes, e é responsabilidade do consumidor decidir.

pub mod annotator;
pub mod detector;
pub mod emitter;
pub mod filth;
pub mod grouper;
pub mod ignore;
pub mod locator;
pub mod matcher;

pub use annotator::{AnnotatedToken, FixedAnnotator, TokenAnnotator};
pub use detector::{locale_split, EntityDetector};
pub use filth::{FilthKind, FilthSpan};
pub use ignore::IgnoredWords;
pub use locator::LocatedMatch;
pub use matcher::{CompiledMatcher, PatternError};
