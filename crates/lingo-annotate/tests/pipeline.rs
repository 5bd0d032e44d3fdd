use std::collections::BTreeSet;

use lingo_annotate::{Annotator, annotate_document, find_matches, reflow, strip_markup};
use lingo_config::annotation::AnnotationConfig;
use lingo_core::WordformRecord;
use proptest::prelude::*;

fn greek_records() -> Vec<WordformRecord> {
    vec![
        WordformRecord::new("καλημέρα", "καλημέρα").with_translations(["good morning"]),
        WordformRecord::new("είστε", "είμαι").with_translations(["you are"]),
    ]
}

#[test]
fn greek_greeting() {
    let text = "Καλημέρα σας! Πώς είστε;";
    let records = greek_records();

    let matches = find_matches(text, &records);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].text, "Καλημέρα");
    assert_eq!((matches[0].start, matches[0].end), (0, 8));
    assert_eq!(matches[1].text, "είστε");
    assert_eq!((matches[1].start, matches[1].end), (18, 23));

    let result = Annotator::default().annotate(text, &matches);
    assert_eq!(
        result.annotated_text,
        "<a class=\"word-link\" data-wordform=\"καλημέρα\" data-lemma=\"καλημέρα\" \
         data-translations=\"good morning\">Καλημέρα</a> σας! Πώς \
         <a class=\"word-link\" data-wordform=\"είστε\" data-lemma=\"είμαι\" \
         data-translations=\"you are\">είστε</a>;"
    );
    assert_eq!(
        result.found_wordforms,
        BTreeSet::from(["καλημέρα".to_string(), "είστε".to_string()])
    );
}

#[test]
fn every_casing_variant_is_linked() {
    let text = "ΚΑΛΗΜΕΡΑ καλημέρα ΚαΛηΜέΡα";
    let records = vec![WordformRecord::new("καλημέρα", "καλημέρα")];

    let matches = find_matches(text, &records);
    let shown: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(shown, vec!["ΚΑΛΗΜΕΡΑ", "καλημέρα", "ΚαΛηΜέΡα"]);

    let result = Annotator::default().annotate(text, &matches);
    for variant in shown {
        assert!(result.annotated_text.contains(&format!(">{variant}</a>")));
    }
    assert_eq!(result.found_wordforms.len(), 1);
}

#[test]
fn document_pipeline() {
    let text = "Καλημέρα σας! Πώς είστε;\n\nΕίστε καλά;";
    let config = AnnotationConfig {
        line_width: 12,
        ..AnnotationConfig::default()
    };

    let result = annotate_document(text, &greek_records(), &config);

    assert!(result.annotated_text.starts_with("<p><a class=\"word-link\""));
    assert_eq!(result.annotated_text.matches("<p>").count(), 2);
    assert!(result.annotated_text.contains("<br>"));
    assert!(result.annotated_text.contains(">Είστε</a>"));
    assert_eq!(strip_markup(&result.annotated_text), text);
    assert_eq!(result.found_wordforms.len(), 2);
}

#[test]
fn document_without_vocabulary() {
    let result = annotate_document("Plain words only.", &[], &AnnotationConfig::default());
    assert_eq!(result.annotated_text, "<p>Plain words only.</p>");
    assert!(result.found_wordforms.is_empty());
}

#[test]
fn decomposed_input_is_normalized() {
    let records = vec![WordformRecord::new("café", "café")];
    let result = annotate_document("un cafe\u{0301}", &records, &AnnotationConfig::default());
    assert!(result.annotated_text.contains(">café</a>"));
}

fn vocabulary() -> Vec<WordformRecord> {
    ["run", "running", "cat", "the cat", "ΚΑΛΗΜΕΡΑ", "είστε", "_x", "9"]
        .iter()
        .map(|s| WordformRecord::new(*s, *s))
        .collect()
}

fn document() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "run", "running", "Run", "cat", "the", "Cat", "καλημέρα", "Είστε", "σας", "x_x", "9",
        "ok!", "<b>", "a<b", "ผม",
    ]);
    let separator = prop::sample::select(vec![" ", "  ", "\n", "\n\n", "\n\n\n", ", ", "\t"]);
    (word.clone(), prop::collection::vec((separator, word), 0..30)).prop_map(|(first, rest)| {
        let mut text = first.to_string();
        for (sep, word) in rest {
            text.push_str(sep);
            text.push_str(word);
        }
        text
    })
}

proptest! {
    #[test]
    fn matches_never_overlap(text in document()) {
        let records = vocabulary();
        let matches = find_matches(&text, &records);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn matching_is_deterministic(text in document()) {
        let records = vocabulary();
        prop_assert_eq!(find_matches(&text, &records), find_matches(&text, &records));
    }

    #[test]
    fn annotate_without_matches_is_identity(text in "\\PC{0,60}") {
        let result = Annotator::default().annotate(&text, &[]);
        prop_assert_eq!(result.annotated_text, text);
        prop_assert!(result.found_wordforms.is_empty());
    }

    #[test]
    fn reflow_is_lossless(text in document(), width in 1usize..30) {
        let records = vocabulary()
            .into_iter()
            .filter(|r| !r.surface_form.contains('<'))
            .collect::<Vec<_>>();
        let text = text.replace('<', "‹");
        let matches = find_matches(&text, &records);
        let annotated = Annotator::default().annotate(&text, &matches);
        let html = reflow(&annotated.annotated_text, width);
        prop_assert_eq!(strip_markup(&html), text);
    }
}
