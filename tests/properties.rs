use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use unslop::cleanup::cleanup;
use unslop::normalize::normalize;
use unslop::segment::segment;
use unslop::{humanize_with, paraphrase_with, ProcessingSettings};

fn arb_sentence() -> impl Strategy<Value = String> {
    (prop::collection::vec("[a-z]{2,8}", 3..12), prop_oneof![Just("."), Just("!"), Just("?")]).prop_map(
        |(words, end)| {
            let sentence = words.join(" ");
            let first = sentence[..1].to_uppercase();
            format!("{first}{}{end}", &sentence[1..])
        },
    )
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_sentence(), 1..6).prop_map(|sentences| sentences.join(" "))
}

fn assert_tidy(out: &str) -> Result<(), TestCaseError> {
    prop_assert!(!out.is_empty());
    prop_assert!(!out.contains("  "), "double space in {:?}", out);
    for p in [" .", " ,", " !", " ?", " ;", " :"] {
        prop_assert!(!out.contains(p), "space before punctuation in {:?}", out);
    }
    prop_assert!(
        out.trim_end_matches(['"', '\'', ')']).ends_with(['.', '!', '?']),
        "no terminal punctuation in {:?}",
        out
    );
    Ok(())
}

proptest! {
    #[test]
    fn cleanup_is_idempotent(text in "[a-zA-Z .,!?;:]{0,80}") {
        let once = cleanup(&text);
        prop_assert_eq!(cleanup(&once), once);
    }

    #[test]
    fn segments_rejoin_to_normalized_text(text in "[a-zA-Z0-9 .!?\"'()\\[\\],]{0,120}") {
        let normalized = normalize(&text);
        prop_assert_eq!(segment(&normalized).join(" "), normalized);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn humanize_output_is_tidy(text in arb_text(), seed in any::<u64>()) {
        let out = humanize_with(&text, &ProcessingSettings::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_tidy(&out)?;
        prop_assert_eq!(cleanup(&out), out);
    }

    #[test]
    fn paraphrase_output_is_tidy(text in arb_text(), seed in any::<u64>()) {
        let out = paraphrase_with(&text, &ProcessingSettings::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_tidy(&out)?;
    }
}
