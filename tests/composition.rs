// Composition tests: verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   files -> Config -> Normalizer -> ClassificationInput -> Report -> JSON
// Input files are written to a scratch directory under the system temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use topicsim::config::{Config, NormalizerBackend, StopwordSource, TopicSource};
use topicsim::error::SimilarityError;
use topicsim::output::json::{to_json, write_report};
use topicsim::pipeline::classify::{build_normalizer, classify, load_words, ClassificationInput};
use topicsim::text::{Language, WordSet};

struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("topicsim-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn write(&self, file: &str, content: &str) -> PathBuf {
        let path = self.dir.join(file);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(&self, text: &str, normalizer: NormalizerBackend) -> Config {
        let topic = |name: &str, file: &str, keywords: &str| TopicSource {
            name: name.to_string(),
            path: self.write(file, keywords),
        };

        Config {
            text_path: self.write("text.txt", text),
            stopwords: StopwordSource::File(self.write("stopwords_ru.txt", "и в на это с по\n")),
            topics: vec![
                topic("science", "science_keywords.txt", "наука физика химия опыт учёный"),
                topic("sport", "sport_keywords.txt", "футбол матч команда гол"),
                topic("shopping", "shopping_keywords.txt", "магазин скидка покупка"),
                topic("news", "news_keywords.txt", "новость событие сегодня"),
            ],
            normalizer,
            lemma_dict: None,
            language: Language::Russian,
            normalize_keywords: true,
        }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.dir).ok();
    }
}

fn run(config: &Config) -> anyhow::Result<topicsim::pipeline::classify::ClassificationReport> {
    let normalizer = build_normalizer(config)?;
    let input = ClassificationInput::load(config, normalizer.as_ref())?;
    classify(&input)
}

// ============================================================
// Chain: files -> input -> report
// ============================================================

#[test]
fn science_text_ranks_science_first() {
    let fx = Fixture::new("science");
    let config = fx.config(
        "Наука и физика! Это наука, а физика — это опыт.",
        NormalizerBackend::Identity,
    );

    let report = run(&config).unwrap();
    let names: Vec<&str> = report.topics.iter().map(|t| t.topic.as_str()).collect();
    assert_eq!(names, vec!["science", "sport", "shopping", "news"]);

    let science = &report.topics[0];
    assert_eq!(science.overlap, 3);
    assert!(science.jaccard.intersection.contains("опыт"));
    assert!((science.cosine - 1.0).abs() < 1e-12);

    assert_eq!(report.topics[1].jaccard.coefficient, 0.0);
    assert_eq!(report.best_by_jaccard().unwrap().topic, "science");
    assert_eq!(report.best_by_cosine().unwrap().topic, "science");
}

#[test]
fn stopwords_do_not_reach_the_word_set() {
    let fx = Fixture::new("stopwords");
    let config = fx.config("и в на футбол", NormalizerBackend::Identity);
    let normalizer = build_normalizer(&config).unwrap();

    let words = load_words(&config, normalizer.as_ref()).unwrap();
    assert_eq!(words.len(), 1);
    assert!(words.contains("футбол"));
}

#[test]
fn snowball_matches_inflected_document_words() {
    let fx = Fixture::new("snowball");
    // Inflected forms only; keywords are in dictionary form
    let config = fx.config(
        "Команды сыграли матчи, футболом увлечены все.",
        NormalizerBackend::Snowball,
    );

    let report = run(&config).unwrap();
    let sport = &report.topics[1];
    assert_eq!(sport.topic, "sport");
    assert!(sport.overlap >= 3, "expected команда/матч/футбол to match, got {sport:?}");
    assert_eq!(report.best_by_cosine().unwrap().topic, "sport");
}

#[test]
fn raw_keywords_skip_normalization() {
    let fx = Fixture::new("raw");
    let mut config = fx.config("футболом", NormalizerBackend::Snowball);
    config.normalize_keywords = false;

    // Document word is stemmed to "футбол", keyword stays "футбол" too
    let report = run(&config).unwrap();
    assert_eq!(report.topics[1].overlap, 1);
}

#[test]
fn dictionary_normalizer_from_file() {
    let fx = Fixture::new("dictionary");
    let mut config = fx.config("Новости о скидках", NormalizerBackend::Dictionary);
    config.lemma_dict = Some(fx.write("lemmas.tsv", "новости\tновость\nскидках\tскидка\n"));

    let report = run(&config).unwrap();
    assert_eq!(report.topics[2].overlap, 1);
    assert_eq!(report.topics[3].overlap, 1);
    // "о" is not a stopword here, so the document has three words
    assert_eq!(report.document_words, 3);
}

#[test]
fn bundled_dictionary_reports_dictionary_words() {
    let fx = Fixture::new("bundled");
    let config = fx.config(
        "Наука и физика. Учёные провели опыты с новыми веществами.",
        NormalizerBackend::Dictionary,
    );
    assert!(config.lemma_dict.is_none());

    let report = run(&config).unwrap();
    let science = &report.topics[0];
    let expected: WordSet = ["наука", "опыт", "учёный", "физика"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(science.jaccard.intersection, expected);
    assert_eq!(science.overlap, 4);
    assert_eq!(report.best_by_jaccard().unwrap().topic, "science");
}

#[test]
fn zero_overlap_reports_zero_everywhere() {
    let fx = Fixture::new("zero");
    let config = fx.config("погода дождь ветер", NormalizerBackend::Identity);

    let report = run(&config).unwrap();
    for score in &report.topics {
        assert_eq!(score.jaccard.coefficient, 0.0);
        assert_eq!(score.cosine, 0.0);
    }
    assert!(report.best_by_cosine().is_none());
}

// ============================================================
// Failure paths
// ============================================================

fn root_cause(err: &anyhow::Error) -> Option<&SimilarityError> {
    err.chain().find_map(|e| e.downcast_ref::<SimilarityError>())
}

#[test]
fn missing_document_is_resource_error() {
    let fx = Fixture::new("missing-text");
    let mut config = fx.config("наука", NormalizerBackend::Identity);
    config.text_path = fx.dir.join("nope.txt");

    let err = run(&config).unwrap_err();
    assert!(matches!(root_cause(&err), Some(SimilarityError::Resource { .. })));
}

#[test]
fn missing_stopwords_is_resource_error() {
    let fx = Fixture::new("missing-stopwords");
    let mut config = fx.config("наука", NormalizerBackend::Identity);
    config.stopwords = StopwordSource::File(fx.dir.join("nope.txt"));

    let err = run(&config).unwrap_err();
    assert!(matches!(root_cause(&err), Some(SimilarityError::Resource { .. })));
}

#[test]
fn empty_keyword_file_is_rejected() {
    let fx = Fixture::new("empty-topic");
    let mut config = fx.config("наука", NormalizerBackend::Identity);
    config.topics[3].path = fx.write("news_keywords.txt", "   \n");

    let err = run(&config).unwrap_err();
    match root_cause(&err) {
        Some(SimilarityError::EmptyKeywords { topic }) => assert_eq!(topic, "news"),
        other => panic!("expected EmptyKeywords, got {other:?}"),
    }
}

#[test]
fn document_of_only_stopwords_is_rejected() {
    let fx = Fixture::new("only-stopwords");
    let config = fx.config("И в, на... это!", NormalizerBackend::Identity);

    let err = run(&config).unwrap_err();
    assert!(matches!(root_cause(&err), Some(SimilarityError::EmptyDocument)));
}

#[test]
fn dictionary_without_path_or_bundle_fails_before_loading() {
    let fx = Fixture::new("no-dict");
    let mut config = fx.config("science", NormalizerBackend::Dictionary);
    config.language = Language::English;
    assert!(build_normalizer(&config).is_err());
}

// ============================================================
// Report -> JSON
// ============================================================

#[test]
fn json_report_lists_topics_in_order() {
    let fx = Fixture::new("json");
    let config = fx.config("наука футбол магазин", NormalizerBackend::Identity);
    let report = run(&config).unwrap();

    let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
    let topics = json["topics"].as_array().unwrap();
    let names: Vec<&str> = topics.iter().map(|t| t["topic"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["science", "sport", "shopping", "news"]);
    assert_eq!(topics[0]["jaccard"]["intersection"][0], "наука");
    assert!(json["generated_at"].is_string());

    let out = fx.dir.join("reports").join("report.json");
    write_report(&report, &out).unwrap();
    assert!(Path::new(&out).exists());
}
