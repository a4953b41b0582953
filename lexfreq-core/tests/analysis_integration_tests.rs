// lexfreq-core/tests/analysis_integration_tests.rs
use lexfreq_core::{
    analyze, count_frequency, tokenize, AnalyzerConfig, EntropyBand, FrequencyEntry, ZipfVerdict,
};

const SAMPLE: &str = "the cat sat on the mat the cat ran";

fn entry(count: u64, token: &str) -> FrequencyEntry {
    FrequencyEntry { count, token: token.to_string() }
}

#[test_log::test]
fn test_end_to_end_sample_text() {
    let report = analyze(SAMPLE, &AnalyzerConfig::default());

    // Tie order among the count-1 entries is first occurrence in the text;
    // that order is documented as an implementation detail, not a promise.
    let expected = vec![
        entry(3, "the"),
        entry(2, "cat"),
        entry(1, "sat"),
        entry(1, "on"),
        entry(1, "mat"),
        entry(1, "ran"),
    ];
    assert_eq!(report.distribution, expected);

    assert_eq!(report.hapax_percent, Some(66));
    assert_eq!(report.word_count, 9);

    // Entropy is computed over the raw post-filter string, not the token
    // list, so it reflects character-level randomness.
    let entropy = report.entropy.expect("non-empty text has entropy");
    assert!(entropy > 0.0 && entropy < 8.0);
    assert_eq!(report.entropy_band, Some(EntropyBand::classify(entropy)));
}

#[test]
fn test_distribution_counts_cover_all_tokens() {
    let config = AnalyzerConfig::default();
    let tokens = tokenize(SAMPLE, &config);
    let distribution = count_frequency(&tokens);

    let non_empty = tokens.iter().filter(|t| !t.is_empty()).count() as u64;
    let total: u64 = distribution.iter().map(|e| e.count).sum();
    assert_eq!(total, non_empty);
}

#[test]
fn test_distribution_is_sorted_non_increasing() {
    let config = AnalyzerConfig::default();
    let tokens = tokenize("b b b a a c c c c d", &config);
    let distribution = count_frequency(&tokens);
    assert!(distribution.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_punctuation_never_merges_tokens() {
    // "cat,sat" must come apart into two tokens, not fuse into "catsat".
    let report = analyze("cat,sat", &AnalyzerConfig::default());
    assert_eq!(
        report.distribution,
        vec![entry(1, "cat"), entry(1, "sat")]
    );
}

#[test]
fn test_char_mode_space_removal_only_drops_space_tokens() {
    let text = "ab ba ab";
    let keep = AnalyzerConfig { word_split: false, ..Default::default() };
    let drop = AnalyzerConfig { word_split: false, remove_space: true, ..Default::default() };

    let with_spaces = tokenize(text, &keep);
    let without_spaces = tokenize(text, &drop);

    // Space removal deletes only the space tokens; everything else is
    // unchanged.
    let non_space: Vec<&String> =
        with_spaces.iter().filter(|t| t.as_str() != " ").collect();
    assert_eq!(non_space.len(), without_spaces.len());
    assert!(without_spaces.iter().all(|t| t != " "));
    assert!(with_spaces.len() >= without_spaces.len());
}

#[test]
fn test_case_sensitive_mode_keeps_variants_apart() {
    let config = AnalyzerConfig { ignore_case: false, ..Default::default() };
    let report = analyze("The the THE", &config);
    assert_eq!(report.distribution.len(), 3);
}

#[test]
fn test_zipfian_verdict_on_synthetic_corpus() {
    // 20 ranks on an exact Zipf curve: every comparison lands in the
    // excellent band and the verdict is a clear yes.
    let mut parts: Vec<String> = Vec::new();
    for rank in 1..=20usize {
        let word = format!("w{rank}");
        for _ in 0..(2000 / rank) {
            parts.push(word.clone());
        }
    }
    let corpus = parts.join(" ");

    let report = analyze(&corpus, &AnalyzerConfig::default());
    assert_eq!(report.zipf_verdict, Some(ZipfVerdict::Yes));
}
