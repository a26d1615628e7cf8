use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use unslop::cleanup::cleanup;
use unslop::context::{detect_topic, formality_score};
use unslop::flow::reassemble;
use unslop::grammar::{correct, fix_articles};
use unslop::normalize::normalize;
use unslop::paraphrase::{detect_tense, passive_to_active, word_overlap, Tense};
use unslop::patterns::{FORMAL_CONNECTOR_TABLE, REDUNDANT_PHRASE_TABLE};
use unslop::pick::{chance, weight_for, weighted_index, weighted_pick};
use unslop::segment::{segment, split_at_breakpoint};
use unslop::signatures::remove_signatures;
use unslop::stats::change_ratio;
use unslop::strategies::Family;
use unslop::synonyms::{inflect_s, replace_synonyms};
use unslop::tables::{
    Register, CLAUSE_BREAKPOINTS, EXPERIENCE_PREFIXES, HEDGES, INTERJECTIONS, OPINION_TOUCHES, UNEXPECTED_TRANSITIONS,
};
use unslop::transform::{transform_sentences, RunState};
use unslop::{
    humanize, humanize_with, paraphrase, paraphrase_with, run, ContextSnapshot, HumanizeError, Mode, Pass, PassPlan,
    ProcessingSettings, Strategy, Topic,
};

const SLOPPY: &str = "Furthermore, it is important to note that the system utilizes a comprehensive methodology.";

const ESSAY: &str = "The system is very reliable. The team will deploy it next week, and the customers are \
                     waiting for the release. It is important to note that the data was collected by the \
                     analysts. Furthermore, the results demonstrate a significant impact on revenue. \
                     However, there are several risks that we must consider. The schedule is tight because \
                     the budget was approved late.";

fn patterns_only() -> ProcessingSettings {
    ProcessingSettings {
        patterns: true,
        ..ProcessingSettings::none()
    }
}

fn ends_with_terminal(text: &str) -> bool {
    text.trim_end_matches(['"', '\'', ')']).ends_with(['.', '!', '?'])
}

/// Run one strategy over `sentences` with every gate open.
fn run_single(strategy: Strategy, sentences: &[&str], seed: u64) -> Vec<String> {
    let mut out: Vec<String> = sentences.iter().map(|s| s.to_string()).collect();
    PassPlan::new(vec![Pass::new(strategy, 1.0, 1.0)]).run(
        &mut out,
        &ProcessingSettings::default(),
        &mut RunState::new(),
        &mut StdRng::seed_from_u64(seed),
    );
    out
}

fn starts_with_any(sentence: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| sentence.starts_with(m))
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn signature_heavy_sentence_is_cleaned() {
    let settings = ProcessingSettings::default();
    let runs = 200;
    let mut kept_utilizes = 0;
    for seed in 0..runs {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = humanize_with(SLOPPY, &settings, &mut rng).unwrap();
        let lower = out.to_lowercase();
        assert!(!out.contains("Furthermore,"), "seed {seed}: connector survived: {out}");
        assert!(
            !lower.contains("it is important to note that"),
            "seed {seed}: robotic starter survived: {out}"
        );
        assert!(ends_with_terminal(&out), "seed {seed}: no terminal punctuation: {out}");
        assert!(!out.ends_with(".."), "seed {seed}: doubled terminal: {out}");
        if lower.contains("utilizes") {
            kept_utilizes += 1;
        }
    }
    assert!(
        kept_utilizes * 2 < runs,
        "\"utilizes\" should be replaced in most runs, kept in {kept_utilizes}/{runs}"
    );
}

#[test]
fn empty_input_is_an_error() {
    let settings = ProcessingSettings::default();
    assert!(matches!(humanize("", &settings), Err(HumanizeError::EmptyInput)));
    assert!(matches!(humanize(" \n\t ", &settings), Err(HumanizeError::EmptyInput)));
    assert!(matches!(paraphrase(""), Err(HumanizeError::EmptyInput)));
}

#[test]
fn same_seed_same_output() {
    let settings = ProcessingSettings::default();
    for seed in [1u64, 42, 9000] {
        let a = humanize_with(ESSAY, &settings, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = humanize_with(ESSAY, &settings, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a, b, "seed {seed} should be reproducible");
    }
}

#[test]
fn humanize_output_is_tidy() {
    let settings = ProcessingSettings::default();
    for seed in 0..50 {
        let out = humanize_with(ESSAY, &settings, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(!out.is_empty(), "seed {seed}: empty output");
        assert!(!out.contains("  "), "seed {seed}: double space: {out}");
        for p in [" .", " ,", " !", " ?"] {
            assert!(!out.contains(p), "seed {seed}: space before punctuation: {out}");
        }
        assert!(ends_with_terminal(&out), "seed {seed}: no terminal punctuation: {out}");
        assert_eq!(cleanup(&out), out, "seed {seed}: output is not cleanup-stable");
    }
}

#[test]
fn everything_off_only_repairs_grammar() {
    let settings = ProcessingSettings::none();
    let text = "She have a idea. It is important to note that we dont know.";
    for seed in 0..20 {
        let out = humanize_with(text, &settings, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(
            out, "She has an idea. It is important to note that we don't know.",
            "seed {seed}: unexpected change"
        );
    }
}

#[test]
fn concurrent_runs_are_independent() {
    let settings = ProcessingSettings::default();
    let expected = humanize_with(ESSAY, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || humanize_with(ESSAY, &settings, &mut StdRng::seed_from_u64(7)).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for out in outputs {
        assert_eq!(out, expected, "threaded run diverged from sequential run");
    }
}

#[test]
fn run_report_describes_the_run() {
    let settings = ProcessingSettings::default();
    let report = run(ESSAY, Mode::Humanize, &settings, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(report.input_words, ESSAY.split_whitespace().count());
    assert_eq!(report.output_words, report.output.split_whitespace().count());
    assert!(
        (0.0..=0.95).contains(&report.change_ratio),
        "change ratio out of range: {}",
        report.change_ratio
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "humanize");
    assert!(json["context"]["topic"].is_string(), "topic should serialize as a string");
}

#[test]
fn swapped_synonyms_keep_article_agreement() {
    let settings = ProcessingSettings::default();
    let article = Regex::new(r"\b[Aa] (?P<word>[aeio]\w*)").unwrap();
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = humanize_with("The system utilizes a comprehensive methodology.", &settings, &mut rng).unwrap();
        for caps in article.captures_iter(&out) {
            let word = caps["word"].to_lowercase();
            assert!(
                word.starts_with("one") || word.starts_with("eu"),
                "seed {seed}: article does not fit {word:?}: {out}"
            );
        }
    }
}

#[test]
fn short_sentences_still_get_grammar() {
    let settings = ProcessingSettings::default();
    let snapshot = ContextSnapshot::analyze("I is");
    let out = transform_sentences(
        vec!["I is".to_string()],
        &settings,
        &snapshot,
        &mut RunState::new(),
        &mut StdRng::seed_from_u64(0),
    );
    assert_eq!(out, vec!["I am"], "short sentence skipped agreement fix");
}

// ---------------------------------------------------------------------------
// Paraphrase
// ---------------------------------------------------------------------------

#[test]
fn paraphrase_produces_tidy_text() {
    let settings = ProcessingSettings::default();
    for seed in 0..30 {
        let out = paraphrase_with(ESSAY, &settings, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert!(!out.is_empty(), "seed {seed}: empty output");
        assert!(!out.contains("  "), "seed {seed}: double space: {out}");
        assert!(ends_with_terminal(&out), "seed {seed}: no terminal punctuation: {out}");
    }
}

#[test]
fn passive_with_agent_becomes_active() {
    assert_eq!(
        passive_to_active("The report was written by the team.").as_deref(),
        Some("The team wrote the report.")
    );
    assert_eq!(
        passive_to_active("The samples were collected by two analysts.").as_deref(),
        Some("Two analysts collected the samples.")
    );
    assert_eq!(passive_to_active("The cat sat on the mat."), None);
}

#[test]
fn tense_detection() {
    assert_eq!(detect_tense("We will ship it."), Tense::Future);
    assert_eq!(detect_tense("It was late."), Tense::Past);
    assert_eq!(detect_tense("It is late."), Tense::Present);
}

#[test]
fn word_overlap_bounds() {
    assert_eq!(word_overlap("the cat sat", "The cat sat."), 1.0);
    assert_eq!(word_overlap("red apples", "blue sky"), 0.0);
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

#[test]
fn normalize_folds_typography() {
    assert_eq!(
        normalize("\u{201C}Hi\u{201D} \u{2014} it\u{2019}s   fine\u{2026}"),
        "\"Hi\" - it's fine..."
    );
    assert_eq!(normalize("It ended.Next one began."), "It ended. Next one began.");
    assert_eq!(normalize("a\u{00A0}b\u{200B}c"), "a bc");
}

#[test]
fn signatures_untouched_when_patterns_off() {
    let mut rng = StdRng::seed_from_u64(1);
    let settings = ProcessingSettings {
        patterns: false,
        ..ProcessingSettings::default()
    };
    assert_eq!(remove_signatures(SLOPPY, &settings, &mut rng), SLOPPY);
}

#[test]
fn redundant_phrase_is_shortened() {
    let settings = patterns_only();
    for seed in 0..20 {
        let out = remove_signatures("We did this in order to succeed.", &settings, &mut StdRng::seed_from_u64(seed));
        assert_eq!(out, "We did this to succeed.");
    }
}

#[test]
fn robotic_starter_never_survives() {
    let settings = patterns_only();
    for seed in 0..50 {
        let out = remove_signatures(
            "It is important to note that costs rose.",
            &settings,
            &mut StdRng::seed_from_u64(seed),
        );
        assert!(
            !out.to_lowercase().contains("important to note"),
            "seed {seed}: starter survived: {out}"
        );
        assert!(out.ends_with("costs rose."), "seed {seed}: sentence body lost: {out}");
    }
}

#[test]
fn formal_connector_gets_casual_alternative() {
    let settings = patterns_only();
    let allowed = ["But ", "Though ", "Yet ", "Still, ", "That said, ", "Mind you, "];
    for seed in 0..50 {
        let out = remove_signatures("However, the plan failed.", &settings, &mut StdRng::seed_from_u64(seed));
        assert!(
            allowed.iter().any(|a| out.starts_with(a)),
            "seed {seed}: unexpected connector: {out}"
        );
    }
}

#[test]
fn table_lookup() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        REDUNDANT_PHRASE_TABLE.lookup("due to the fact that", &mut rng).as_deref(),
        Some("because")
    );
    assert_eq!(FORMAL_CONNECTOR_TABLE.lookup("nothing to see here", &mut rng), None);
    assert!(REDUNDANT_PHRASE_TABLE.is_match("We left In Order To rest."));
    assert!(!FORMAL_CONNECTOR_TABLE.is_match("We paused, however, and left."));
    assert!(!FORMAL_CONNECTOR_TABLE.is_empty());
}

#[test]
fn segment_respects_quotes_parens_and_abbreviations() {
    assert_eq!(
        segment("He said \"Stop. Now.\" Then he left."),
        vec!["He said \"Stop. Now.\"", "Then he left."]
    );
    assert_eq!(
        segment("See the note (it is short. Really.) Then go."),
        vec!["See the note (it is short. Really.)", "Then go."]
    );
    assert_eq!(
        segment("Dr. Smith arrived at 3.5 hours. He sat down."),
        vec!["Dr. Smith arrived at 3.5 hours.", "He sat down."]
    );
    assert_eq!(segment("Wait... What? Fine!"), vec!["Wait...", "What?", "Fine!"]);
    assert!(segment("").is_empty());
}

#[test]
fn lone_capitals_as_words_end_sentences() {
    assert_eq!(
        segment("She got an A. Then she left."),
        vec!["She got an A.", "Then she left."],
        "a grade letter ends the sentence"
    );
    assert_eq!(
        segment("It was I. Then it ended."),
        vec!["It was I.", "Then it ended."],
        "the pronoun ends the sentence"
    );
    assert_eq!(
        segment("The memo was signed by J. Smith yesterday. He sat."),
        vec!["The memo was signed by J. Smith yesterday.", "He sat."],
        "an initial after a lowercase word is kept"
    );
    assert_eq!(
        segment("A. Lincoln spoke first. Then we ate."),
        vec!["A. Lincoln spoke first.", "Then we ate."],
        "an initial opening the text is kept"
    );
}

#[test]
fn segment_rejoins_to_normalized_input() {
    let normalized = normalize(ESSAY);
    assert_eq!(segment(&normalized).join(" "), normalized);
}

#[test]
fn breakpoint_split_keeps_short_heads() {
    let (head, tail) = split_at_breakpoint(
        "The rollout finished on schedule, which surprised most of the staff.",
        CLAUSE_BREAKPOINTS,
        20,
    )
    .unwrap();
    assert_eq!(head, "The rollout finished on schedule.");
    assert_eq!(tail, "This surprised most of the staff.");
    assert_eq!(split_at_breakpoint("Short, which is fine.", CLAUSE_BREAKPOINTS, 20), None);
}

#[test]
fn grammar_repairs() {
    assert_eq!(correct("he are late."), "he is late.");
    assert_eq!(correct("She have a plan."), "She has a plan.");
    assert_eq!(correct("They is here."), "They are here.");
    assert_eq!(correct("Does it have a name?"), "Does it have a name?");
    assert_eq!(
        correct("We waited a hour for an university bus."),
        "We waited an hour for a university bus."
    );
    assert_eq!(correct("I dont know."), "I don't know.");
    assert_eq!(correct("We can not go."), "We cannot go.");
    assert_eq!(correct("It was the the best."), "It was the best.");
    assert_eq!(correct("She said that that was fine."), "She said that that was fine.");
}

#[test]
fn inflection_of_candidates() {
    assert_eq!(inflect_s("work with"), "works with");
    assert_eq!(inflect_s("fix"), "fixes");
    assert_eq!(inflect_s("apply"), "applies");
    assert_eq!(inflect_s("play"), "plays");
}

#[test]
fn synonyms_keep_inflection() {
    let allowed = ["uses", "works with", "goes with", "picks", "grabs"];
    for seed in 0..30 {
        let out = replace_synonyms("It utilizes data.", Register::Casual, 1.0, &mut StdRng::seed_from_u64(seed));
        assert!(!out.contains("utiliz"), "seed {seed}: not replaced: {out}");
        assert!(
            allowed.iter().any(|a| out == format!("It {a} data.")),
            "seed {seed}: unexpected candidate: {out}"
        );
    }
}

#[test]
fn repeated_transitions_get_swapped() {
    let settings = ProcessingSettings::default();
    let sentences = || {
        vec![
            "Also the first point holds.".to_string(),
            "Also the second point holds.".to_string(),
        ]
    };
    let swapped = (0..50).any(|seed| {
        let mut state = RunState::new();
        let out = reassemble(sentences(), &settings, &mut state, &mut StdRng::seed_from_u64(seed));
        !out.contains("Also the second")
    });
    assert!(swapped, "a repeated opener should be swapped at least once");

    let plain = ProcessingSettings::none();
    let mut state = RunState::new();
    assert_eq!(
        reassemble(sentences(), &plain, &mut state, &mut StdRng::seed_from_u64(0)),
        "Also the first point holds. Also the second point holds."
    );
}

#[test]
fn cleanup_examples() {
    assert_eq!(cleanup("hello world"), "Hello world.");
    assert_eq!(cleanup("this is it ,right ?? yes"), "This is it, right? Yes.");
    assert_eq!(cleanup("Done;"), "Done.");
    assert_eq!(cleanup("   "), "");
    assert_eq!(cleanup("..."), "");
    for text in ["hello world", "this is it ,right ?? yes", "Done;", "a.b", "\"quoted\""] {
        let once = cleanup(text);
        assert_eq!(cleanup(&once), once, "cleanup not idempotent on {text:?}");
    }
}

// ---------------------------------------------------------------------------
// Context, selection, settings
// ---------------------------------------------------------------------------

#[test]
fn context_heuristics() {
    assert_eq!(detect_topic("The algorithm moves data across the platform."), Topic::Technology);
    assert_eq!(detect_topic("We went for a walk."), Topic::General);
    assert_eq!(formality_score(""), 0.5);

    let casual = ContextSnapshot::analyze("yeah this stuff is really pretty okay");
    assert_eq!(casual.register(&ProcessingSettings::default()), Register::Conversational);
    let technical = ProcessingSettings {
        technical: true,
        ..ProcessingSettings::default()
    };
    assert_eq!(casual.register(&technical), Register::Formal);
}

#[test]
fn weighted_selection_favors_early_entries() {
    assert_eq!(weight_for(0), 1.5);
    assert_eq!(weight_for(20), 0.3);

    let mut rng = StdRng::seed_from_u64(11);
    let mut counts = [0usize; 5];
    for _ in 0..10_000 {
        let i = weighted_index(5, &mut rng).unwrap();
        counts[i] += 1;
    }
    assert!(counts.iter().all(|&c| c > 0), "every entry should be reachable: {counts:?}");
    assert!(counts[0] > counts[4], "first entry should beat the last: {counts:?}");

    let empty: [&str; 0] = [];
    assert_eq!(weighted_pick(&empty, &mut rng), None);
}

#[test]
fn chance_clamps() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        assert!(!chance(&mut rng, 0.0));
        assert!(chance(&mut rng, 1.0));
        assert!(chance(&mut rng, 2.0));
        assert!(!chance(&mut rng, -1.0));
        assert!(!chance(&mut rng, f64::NAN));
    }
}

#[test]
fn settings_from_json() {
    let settings = ProcessingSettings::from_json_str(r#"{"technical": true, "patterns": false}"#).unwrap();
    assert!(settings.technical);
    assert!(!settings.patterns);
    assert!(settings.conversational, "missing fields should keep their defaults");

    assert!(matches!(
        ProcessingSettings::from_json_str("{not json"),
        Err(HumanizeError::Settings(_))
    ));
    assert!(matches!(
        ProcessingSettings::from_json_file("/nonexistent/unslop-settings.json"),
        Err(HumanizeError::Io(_))
    ));
}

#[test]
fn technical_flag_suppresses_imperfections() {
    let technical = ProcessingSettings {
        technical: true,
        ..ProcessingSettings::default()
    };
    for strategy in [
        Strategy::FalseStart,
        Strategy::ColloquialFiller,
        Strategy::TrailingThought,
        Strategy::RedundantClarification,
    ] {
        assert_eq!(strategy.family(), Family::Imperfection);
        assert!(!strategy.enabled(&technical), "{strategy:?} should be off in technical mode");
        assert!(strategy.enabled(&ProcessingSettings::default()));
    }
    assert!(Strategy::Hedge.enabled(&technical));
}

#[test]
fn disabled_plan_changes_nothing() {
    let original: Vec<String> = segment(&normalize(ESSAY));
    let mut sentences = original.clone();
    let mut state = RunState::new();
    PassPlan::humanize().run(
        &mut sentences,
        &ProcessingSettings::none(),
        &mut state,
        &mut StdRng::seed_from_u64(2),
    );
    assert_eq!(sentences, original);
}

#[test]
fn change_ratio_bounds() {
    assert_eq!(change_ratio("Same words here.", "Same words here."), 0.0);
    let ratio = change_ratio("One. Two.", "Entirely different words appear in this text.");
    assert!(ratio > 0.5 && ratio <= 0.95, "ratio out of range: {ratio}");
}

// ---------------------------------------------------------------------------
// Strategy passes
// ---------------------------------------------------------------------------

#[test]
fn articles_refit_after_a_swap() {
    assert_eq!(
        fix_articles("We ran a extensive review of a hour."),
        "We ran an extensive review of an hour."
    );
    assert_eq!(fix_articles("It was an thorough pass."), "It was a thorough pass.");
    assert_eq!(fix_articles("She got an A grade."), "She got an A grade.", "acronyms and grades are kept");
}

#[test]
fn rhetorical_questions_stay_interior() {
    let originals = [
        "The rollout went fine.",
        "The staging cluster lagged behind.",
        "Nobody noticed until Monday.",
        "The fix took an hour.",
    ];
    for seed in 0..20 {
        let out = run_single(Strategy::RhetoricalQuestion, &originals, seed);
        assert!(out.len() > originals.len(), "seed {seed}: no question inserted: {out:?}");
        assert_eq!(out[0], originals[0], "seed {seed}");
        assert_eq!(out[1], originals[1], "seed {seed}: question after the first sentence: {out:?}");
        assert_eq!(out.last().map(String::as_str), Some(originals[3]), "seed {seed}: {out:?}");
        for pair in out.windows(2) {
            let inserted = |s: &String| !originals.contains(&s.as_str());
            assert!(!(inserted(&pair[0]) && inserted(&pair[1])), "seed {seed}: back-to-back questions: {out:?}");
        }
    }
    let short = ["One thing happened.", "Then another."];
    assert_eq!(run_single(Strategy::RhetoricalQuestion, &short, 0), short, "two sentences get no question");
}

#[test]
fn personal_experience_only_opens_the_text() {
    let originals = [
        "The build takes a while.",
        "The tests run in parallel.",
        "The report lands by noon.",
    ];
    for seed in 0..20 {
        let out = run_single(Strategy::PersonalExperience, &originals, seed);
        assert!(starts_with_any(&out[0], EXPERIENCE_PREFIXES), "seed {seed}: {:?}", out[0]);
        assert_eq!(&out[1..], &originals[1..], "seed {seed}: later sentences touched");
    }
}

#[test]
fn hedges_need_an_absolute_claim() {
    let originals = [
        "Every test passes on the first try.",
        "The build takes a while.",
        "We never skip the review.",
    ];
    for seed in 0..20 {
        let out = run_single(Strategy::Hedge, &originals, seed);
        assert!(starts_with_any(&out[0], HEDGES), "seed {seed}: {:?}", out[0]);
        assert_eq!(out[1], originals[1], "seed {seed}: hedged a sentence with no absolute word");
        assert!(starts_with_any(&out[2], HEDGES), "seed {seed}: {:?}", out[2]);
    }
}

#[test]
fn marked_sentences_get_no_second_prefix() {
    let marked = [
        "In my experience, all tests always pass.",
        "Plot twist: every release slipped a week.",
        "Here's the thing: nobody checked the logs.",
    ];
    for strategy in [
        Strategy::Hedge,
        Strategy::PersonalExperience,
        Strategy::UnexpectedTransition,
        Strategy::FalseStart,
        Strategy::ConversationalBridge,
        Strategy::LightTransition,
    ] {
        for seed in 0..10 {
            assert_eq!(run_single(strategy, &marked, seed), marked, "{strategy:?} seed {seed} stacked a prefix");
        }
    }
}

#[test]
fn unexpected_transitions_skip_the_first_sentence() {
    let originals = ["The cache was cold.", "The build was slow.", "The deploy was late."];
    for seed in 0..20 {
        let out = run_single(Strategy::UnexpectedTransition, &originals, seed);
        assert_eq!(out[0], originals[0], "seed {seed}");
        for (sentence, original) in out[1..].iter().zip(&originals[1..]) {
            assert!(starts_with_any(sentence, UNEXPECTED_TRANSITIONS), "seed {seed}: {sentence:?}");
            assert!(sentence.ends_with(&original.to_lowercase()), "seed {seed}: body changed: {sentence:?}");
        }
    }
}

#[test]
fn interjection_follows_a_copula_once() {
    for seed in 0..20 {
        let out = run_single(
            Strategy::CasualInterjection,
            &["The rollout was slower than the test run was.", "Nobody ran the tests.", "It was basically fine."],
            seed,
        );
        assert!(
            INTERJECTIONS.iter().any(|w| out[0] == format!("The rollout was {w} slower than the test run was.")),
            "seed {seed}: {:?}",
            out[0]
        );
        assert_eq!(out[1], "Nobody ran the tests.", "seed {seed}: no copula to follow");
        assert_eq!(out[2], "It was basically fine.", "seed {seed}: filler already present");
    }
}

#[test]
fn personal_touch_goes_before_the_final_period() {
    let long = "The migration finished two days ahead of schedule.";
    for seed in 0..20 {
        let out = run_single(Strategy::PersonalTouch, &[long], seed);
        let (body, touch) = out[0].split_at(long.len() - 1);
        assert_eq!(body, &long[..long.len() - 1], "seed {seed}");
        assert!(
            OPINION_TOUCHES.iter().any(|t| touch == format!("{t}.")),
            "seed {seed}: unexpected touch {touch:?}"
        );
    }
    assert_eq!(run_single(Strategy::PersonalTouch, &["Done."], 0), ["Done."], "short sentence untouched");

    let many = [long, "The second batch also shipped without trouble.", "Support saw fewer tickets that week."];
    for seed in 0..20 {
        let out = run_single(Strategy::PersonalTouch, &many, seed);
        let changed = out.iter().zip(&many).filter(|(a, b)| a.as_str() != **b).count();
        assert_eq!(changed, 1, "seed {seed}: {out:?}");
    }
}

#[test]
fn perplexity_and_touch_passes_follow_conversational() {
    let quiet = ProcessingSettings {
        conversational: false,
        ..ProcessingSettings::default()
    };
    for strategy in [Strategy::UnexpectedTransition, Strategy::CasualInterjection, Strategy::PersonalTouch] {
        assert_eq!(strategy.family(), Family::Conversational);
        assert!(strategy.enabled(&ProcessingSettings::default()), "{strategy:?}");
        assert!(!strategy.enabled(&quiet), "{strategy:?} should follow the conversational flag");
        assert!(
            PassPlan::humanize().passes.iter().any(|p| p.strategy == strategy),
            "{strategy:?} missing from the humanize plan"
        );
    }
}
