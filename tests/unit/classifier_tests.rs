/*!
 * Tests for sentence-boundary classification
 */

use sastre::segmentation::{BoundaryStrength, assemble, classify};
use sastre::transcript::Token;

use crate::common::token;

fn classify_stream(texts: &[&str], position: usize) -> BoundaryStrength {
    let tokens: Vec<Token> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| token(t, i as f64 * 100.0, (i + 1) as f64 * 100.0))
        .collect();
    classify(&tokens, position)
}

#[test]
fn test_classify_decimalToken_shouldNotEndSentence() {
    assert_eq!(classify_stream(&["4.7"], 0), BoundaryStrength::None);
}

#[test]
fn test_classify_splitDecimal_shouldNotEndSentence() {
    // "4" "." "7" — the dot continues into a digit
    assert_eq!(classify_stream(&["4", ".", "7"], 1), BoundaryStrength::None);
}

#[test]
fn test_classify_abbreviation_shouldNotEndSentence() {
    // whether the dot is fused into the token or split out on its own
    assert_eq!(classify_stream(&["Mr", "."], 1), BoundaryStrength::None);
    assert_eq!(
        classify_stream(&[" Mr.", " Smith"], 0),
        BoundaryStrength::None
    );
}

#[test]
fn test_classify_dotAtStreamEnd_shouldEndSentence() {
    assert_eq!(classify_stream(&["end", "."], 1), BoundaryStrength::Strong);
}

#[test]
fn test_classify_domainStyleContinuation_shouldNotEndSentence() {
    // "Z" "." "ai" — lowercase continuation after the dot
    assert_eq!(classify_stream(&["Z", ".", "ai"], 1), BoundaryStrength::None);
}

#[test]
fn test_classify_thousandsSeparator_shouldSuppressComma() {
    assert_eq!(classify_stream(&["1,000,"], 0), BoundaryStrength::None);
}

#[test]
fn test_classify_proseComma_shouldBeWeak() {
    assert_eq!(
        classify_stream(&["word", ","], 1),
        BoundaryStrength::Weak
    );
}

#[test]
fn test_classify_numberThenSentenceDot_shouldEndSentence() {
    // trailing punctuation after a number is a boundary, an embedded
    // decimal point is not
    assert_eq!(classify_stream(&["2.71."], 0), BoundaryStrength::Strong);
}

#[test]
fn test_assemble_withNumericNoise_shouldNotFragmentSentence() {
    let tokens = vec![
        token("It", 0.0, 200.0),
        token(" costs", 200.0, 600.0),
        token(" 4.50,", 600.0, 1100.0),
        token(" about", 1100.0, 1500.0),
        token(" 1,000", 1500.0, 2000.0),
        token(" yen.", 2000.0, 2500.0),
    ];

    let sentences = assemble(&tokens).unwrap();

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text(), "It costs 4.50, about 1,000 yen.");
}

#[test]
fn test_assemble_withVersionNumbers_shouldNotFragmentSentence() {
    let tokens = vec![
        token("Update", 0.0, 400.0),
        token(" to", 400.0, 600.0),
        token(" v2.", 600.0, 1000.0),
        token(" fixed", 1000.0, 1400.0),
        token(" it.", 1400.0, 1800.0),
    ];

    let sentences = assemble(&tokens).unwrap();

    assert_eq!(sentences.len(), 1);
}
