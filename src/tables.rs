//! Static phrase and word tables.
//!
//! Pure data, no behavior beyond trivial accessors. Every rewriting stage
//! reads from here; nothing writes. Order inside each slice matters: earlier
//! candidates carry more weight in [`crate::pick::weighted_pick`], and pattern
//! entries are applied top to bottom.

use serde::Serialize;

use crate::context::Topic;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Stylistic bucket a synonym candidate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Casual,
    Formal,
    Conversational,
}

/// What a matched trigger turns into.
#[derive(Debug)]
pub enum Replacement {
    /// Always the same text ("in order to" -> "to").
    Fixed(&'static str),
    /// Weighted-random pick from a non-empty candidate list.
    Pick(&'static [&'static str]),
    /// Drop the match entirely.
    Delete,
}

/// A trigger (literal phrase or regex source, depending on the table) and its
/// replacement. Regex triggers may name a `target` group; only that group is
/// rewritten and the rest of the match is kept.
#[derive(Debug)]
pub struct PatternEntry {
    pub trigger: &'static str,
    pub replacement: Replacement,
}

#[derive(Debug)]
pub struct SynonymEntry {
    pub word: &'static str,
    /// Verbs also match their "-s" form and get the candidate inflected.
    pub inflects: bool,
    pub casual: &'static [&'static str],
    pub formal: &'static [&'static str],
    pub conversational: &'static [&'static str],
}

impl SynonymEntry {
    pub fn candidates(&self, register: Register) -> &'static [&'static str] {
        match register {
            Register::Casual => self.casual,
            Register::Formal => self.formal,
            Register::Conversational => self.conversational,
        }
    }
}

/// A clause boundary a long sentence may be cut at. The text after the
/// marker becomes a new sentence opened by `continuation`.
#[derive(Debug)]
pub struct Breakpoint {
    pub marker: &'static str,
    pub continuation: &'static str,
}

/// Sentence length band (in words) used for burstiness.
#[derive(Debug)]
pub struct LengthTarget {
    pub min: usize,
    pub max: usize,
    pub weight: f64,
}

#[derive(Debug)]
pub struct TransitionAlternatives {
    pub word: &'static str,
    pub alternatives: &'static [&'static str],
}

/// A word whose replacement depends on which sense it is used in.
#[derive(Debug)]
pub struct SenseEntry {
    pub word: &'static str,
    pub senses: &'static [&'static [&'static str]],
}

// ---------------------------------------------------------------------------
// AI-signature tables
// ---------------------------------------------------------------------------

/// Sentence-initial formal connectors. Regex triggers; the connector and its
/// comma form the `target` group.
pub static FORMAL_CONNECTORS: &[PatternEntry] = &[
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>however,)",
        replacement: Replacement::Pick(&["But", "Though", "Yet", "Still,", "That said,", "Mind you,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>therefore,)",
        replacement: Replacement::Pick(&["So", "Thus", "As a result,", "This means", "Because of this,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>furthermore,)",
        replacement: Replacement::Pick(&["Also", "Plus", "What's more,", "On top of that,", "Besides,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>moreover,)",
        replacement: Replacement::Pick(&["Also", "Plus", "What's more,", "In addition,", "Besides that,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>nevertheless,)",
        replacement: Replacement::Pick(&["But still", "Even so,", "Yet", "All the same,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>nonetheless,)",
        replacement: Replacement::Pick(&["Even so,", "Still,", "But still", "All the same,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>consequently,)",
        replacement: Replacement::Pick(&["So", "As a result,", "Because of this,", "Which meant"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>subsequently,)",
        replacement: Replacement::Pick(&["Then", "After that,", "Next,", "Later,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>additionally,)",
        replacement: Replacement::Pick(&["Also", "Plus", "What's more,", "On top of that,"]),
    },
    PatternEntry {
        trigger: r"(?i)(?:^|[.!?]\s+)(?P<target>alternatively,)",
        replacement: Replacement::Pick(&["Or", "Instead,", "On the other hand,", "Another option:"]),
    },
];

/// Robotic sentence openers and formulaic framing phrases. Literal phrases,
/// matched case-insensitively on word boundaries. Longer phrases come before
/// any shorter phrase they contain.
pub static ROBOTIC_STARTERS: &[PatternEntry] = &[
    PatternEntry {
        trigger: "it is important to note that",
        replacement: Replacement::Pick(&["keep in mind that", "notably,", "worth mentioning,"]),
    },
    PatternEntry {
        trigger: "it is important to understand that",
        replacement: Replacement::Pick(&["what's key here is that", "keep in mind that"]),
    },
    PatternEntry {
        trigger: "it is crucial to understand that",
        replacement: Replacement::Pick(&["the key thing is that", "keep in mind that"]),
    },
    PatternEntry {
        trigger: "it is essential to recognize that",
        replacement: Replacement::Pick(&["you have to remember that", "keep in mind that"]),
    },
    PatternEntry {
        trigger: "it should be noted that",
        replacement: Replacement::Pick(&["keep in mind that", "note that"]),
    },
    PatternEntry {
        trigger: "it is worth mentioning that",
        replacement: Replacement::Pick(&["by the way,", "also,"]),
    },
    PatternEntry {
        trigger: "it is worth noting that",
        replacement: Replacement::Pick(&["by the way,", "also,"]),
    },
    PatternEntry {
        trigger: "it is evident that",
        replacement: Replacement::Pick(&["clearly,", "it's clear that", "obviously,"]),
    },
    PatternEntry {
        trigger: "it is clear that",
        replacement: Replacement::Pick(&["clearly,", "it's pretty clear that", "obviously,"]),
    },
    PatternEntry {
        trigger: "it can be observed that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "it can be seen that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "it can be argued that",
        replacement: Replacement::Pick(&["some might say that", "you could argue that"]),
    },
    PatternEntry {
        trigger: "one must consider that",
        replacement: Replacement::Pick(&["keep in mind that", "think about how"]),
    },
    PatternEntry {
        trigger: "one must consider",
        replacement: Replacement::Pick(&["you should think about", "consider"]),
    },
    PatternEntry {
        trigger: "research has shown that",
        replacement: Replacement::Pick(&["studies suggest", "we've found that", "evidence suggests"]),
    },
    PatternEntry {
        trigger: "studies have shown that",
        replacement: Replacement::Pick(&["studies suggest", "we've found that", "evidence suggests"]),
    },
    PatternEntry {
        trigger: "studies indicate that",
        replacement: Replacement::Pick(&["research suggests", "data shows", "findings reveal"]),
    },
    PatternEntry {
        trigger: "research indicates that",
        replacement: Replacement::Pick(&["research suggests", "data shows", "findings reveal"]),
    },
    PatternEntry {
        trigger: "experts suggest that",
        replacement: Replacement::Pick(&["professionals believe", "specialists think"]),
    },
    PatternEntry {
        trigger: "data suggests that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "data reveals that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "analysis shows that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "analysis reveals that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "evidence suggests that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "findings demonstrate that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "results indicate that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "observations reveal that",
        replacement: Replacement::Delete,
    },
    PatternEntry {
        trigger: "it is important to",
        replacement: Replacement::Pick(&["you need to", "you'll want to", "make sure to"]),
    },
    PatternEntry {
        trigger: "one should",
        replacement: Replacement::Fixed("you should"),
    },
    PatternEntry {
        trigger: "it is possible that",
        replacement: Replacement::Pick(&["maybe", "it's possible that", "there's a chance"]),
    },
];

/// Inflated adjective + generic noun collocations. Regex triggers; only the
/// adjective (`target`) is swapped.
pub static STOCK_COLLOCATIONS: &[PatternEntry] = &[
    PatternEntry {
        trigger: r"(?i)\b(?P<target>comprehensive|extensive|in-depth)\s+(?:analysis|examination|review|study|assessment|overview)\b",
        replacement: Replacement::Pick(&["thorough", "complete", "detailed", "close"]),
    },
    PatternEntry {
        trigger: r"(?i)\b(?P<target>significant|substantial|considerable|remarkable)\s+(?:impact|influence|effect|difference|change)\b",
        replacement: Replacement::Pick(&["major", "big", "real", "serious"]),
    },
    PatternEntry {
        trigger: r"(?i)\b(?P<target>effective|efficient|optimal|ideal)\s+(?:approach|method|strategy|solution|technique)\b",
        replacement: Replacement::Pick(&["good", "solid", "smart", "workable"]),
    },
    PatternEntry {
        trigger: r"(?i)\b(?P<target>various|numerous|multiple)\s+(?:factors|elements|aspects|components|considerations)\b",
        replacement: Replacement::Pick(&["a few", "several", "lots of", "different"]),
    },
    PatternEntry {
        trigger: r"(?i)\b(?P<target>a wide range of|a broad spectrum of|a diverse array of|an extensive variety of)",
        replacement: Replacement::Pick(&["lots of", "all sorts of", "plenty of", "a bunch of"]),
    },
];

/// Wordy phrases with a plain equivalent. Applied unconditionally.
pub static REDUNDANT_PHRASES: &[PatternEntry] = &[
    PatternEntry { trigger: "in spite of the fact that", replacement: Replacement::Fixed("although") },
    PatternEntry { trigger: "due to the fact that", replacement: Replacement::Fixed("because") },
    PatternEntry { trigger: "owing to the fact that", replacement: Replacement::Fixed("because") },
    PatternEntry { trigger: "in order to", replacement: Replacement::Fixed("to") },
    PatternEntry { trigger: "for the purpose of", replacement: Replacement::Fixed("for") },
    PatternEntry { trigger: "with the intention of", replacement: Replacement::Fixed("to") },
    PatternEntry { trigger: "in the process of", replacement: Replacement::Fixed("while") },
    PatternEntry { trigger: "during the course of", replacement: Replacement::Fixed("during") },
    PatternEntry { trigger: "in the event that", replacement: Replacement::Fixed("if") },
    PatternEntry { trigger: "until such time as", replacement: Replacement::Fixed("until") },
    PatternEntry { trigger: "with regard to", replacement: Replacement::Fixed("about") },
    PatternEntry { trigger: "with respect to", replacement: Replacement::Fixed("about") },
    PatternEntry { trigger: "in relation to", replacement: Replacement::Fixed("about") },
    PatternEntry { trigger: "at this point in time", replacement: Replacement::Fixed("now") },
    PatternEntry { trigger: "in today's modern world", replacement: Replacement::Fixed("today") },
    PatternEntry { trigger: "in today's society", replacement: Replacement::Fixed("today") },
    PatternEntry { trigger: "first and foremost", replacement: Replacement::Fixed("first") },
    PatternEntry { trigger: "each and every", replacement: Replacement::Fixed("every") },
    PatternEntry { trigger: "null and void", replacement: Replacement::Fixed("void") },
    PatternEntry { trigger: "a large number of", replacement: Replacement::Fixed("many") },
    PatternEntry { trigger: "has the ability to", replacement: Replacement::Fixed("can") },
    PatternEntry { trigger: "have the ability to", replacement: Replacement::Fixed("can") },
];

// ---------------------------------------------------------------------------
// Synonyms
// ---------------------------------------------------------------------------

pub static SYNONYMS: &[SynonymEntry] = &[
    // Verbs
    SynonymEntry {
        word: "demonstrate",
        inflects: true,
        casual: &["show", "prove", "reveal", "make clear", "point out"],
        formal: &["illustrate", "exhibit", "manifest", "exemplify", "elucidate"],
        conversational: &["lay out", "spell out", "break down", "walk through"],
    },
    SynonymEntry {
        word: "utilize",
        inflects: true,
        casual: &["use", "work with", "go with", "pick", "grab"],
        formal: &["employ", "apply", "implement", "deploy", "leverage"],
        conversational: &["take", "try", "run with", "make use of"],
    },
    SynonymEntry {
        word: "facilitate",
        inflects: true,
        casual: &["help", "make easier", "smooth out", "speed up", "assist"],
        formal: &["enable", "support", "promote", "advance", "foster"],
        conversational: &["give a hand with", "pitch in on", "lend support to", "boost"],
    },
    SynonymEntry {
        word: "implement",
        inflects: true,
        casual: &["put in place", "set up", "start", "roll out", "begin"],
        formal: &["establish", "institute", "execute", "deploy", "operationalize"],
        conversational: &["get going", "kick off", "fire up", "launch"],
    },
    SynonymEntry {
        word: "analyze",
        inflects: true,
        casual: &["look at", "check out", "examine", "study", "review"],
        formal: &["evaluate", "assess", "investigate", "scrutinize", "dissect"],
        conversational: &["break down", "dig into", "take apart", "go through"],
    },
    SynonymEntry {
        word: "commence",
        inflects: true,
        casual: &["start", "begin", "kick off", "open"],
        formal: &["begin", "initiate", "launch"],
        conversational: &["get going", "kick off", "get rolling"],
    },
    // Adjectives
    SynonymEntry {
        word: "significant",
        inflects: false,
        casual: &["big", "major", "huge", "important", "key"],
        formal: &["substantial", "considerable", "notable", "meaningful", "pronounced"],
        conversational: &["pretty big", "serious", "real", "hefty"],
    },
    SynonymEntry {
        word: "comprehensive",
        inflects: false,
        casual: &["complete", "full", "total", "whole", "entire"],
        formal: &["thorough", "extensive", "exhaustive", "all-encompassing", "wide-ranging"],
        conversational: &["soup-to-nuts", "full-package", "wall-to-wall", "everything-included"],
    },
    SynonymEntry {
        word: "optimal",
        inflects: false,
        casual: &["best", "perfect", "ideal", "top", "great"],
        formal: &["superior", "premium", "prime", "ultimate", "exemplary"],
        conversational: &["spot-on", "just-right", "bang-on", "on-point"],
    },
    SynonymEntry {
        word: "robust",
        inflects: false,
        casual: &["strong", "solid", "tough", "sturdy", "reliable"],
        formal: &["resilient", "durable", "stable", "sound", "substantial"],
        conversational: &["rock-solid", "bulletproof", "built-to-last", "ironclad"],
    },
    SynonymEntry {
        word: "numerous",
        inflects: false,
        casual: &["many", "lots of", "plenty of", "a bunch of"],
        formal: &["many", "several", "multiple"],
        conversational: &["tons of", "loads of", "a ton of"],
    },
    SynonymEntry {
        word: "sufficient",
        inflects: false,
        casual: &["enough", "plenty", "adequate"],
        formal: &["adequate", "ample", "satisfactory"],
        conversational: &["plenty", "more than enough", "good enough"],
    },
    SynonymEntry {
        word: "approximately",
        inflects: false,
        casual: &["about", "around", "roughly", "nearly"],
        formal: &["roughly", "nearly", "about"],
        conversational: &["about", "more or less", "somewhere around"],
    },
    // Adverbs
    SynonymEntry {
        word: "furthermore",
        inflects: false,
        casual: &["also", "plus", "too", "as well", "and"],
        formal: &["additionally", "besides", "likewise", "similarly"],
        conversational: &["on top of that", "what's more", "and another thing", "not to mention"],
    },
    SynonymEntry {
        word: "however",
        inflects: false,
        casual: &["but", "though", "still", "yet", "anyway"],
        formal: &["nevertheless", "nonetheless", "conversely", "still"],
        conversational: &["that said", "mind you", "having said that", "then again", "even so"],
    },
    SynonymEntry {
        word: "therefore",
        inflects: false,
        casual: &["so", "thus", "hence", "then", "which means"],
        formal: &["consequently", "accordingly", "as a result", "thus"],
        conversational: &["because of that", "that's why", "so naturally", "this means"],
    },
    SynonymEntry {
        word: "subsequently",
        inflects: false,
        casual: &["then", "next", "after", "later"],
        formal: &["thereafter", "afterwards", "following this"],
        conversational: &["after that", "next up", "later on"],
    },
];

// ---------------------------------------------------------------------------
// Context markers
// ---------------------------------------------------------------------------

pub static FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "however",
    "furthermore",
    "moreover",
    "consequently",
    "utilize",
    "utilizes",
    "demonstrate",
    "demonstrates",
    "implement",
    "facilitate",
    "comprehensive",
    "significant",
    "substantial",
    "optimal",
    "robust",
    "sophisticated",
];

pub static INFORMAL_MARKERS: &[&str] = &[
    "yeah",
    "okay",
    "stuff",
    "things",
    "pretty",
    "really",
    "quite",
    "basically",
    "actually",
    "honestly",
    "anyway",
    "like",
    "you know",
];

pub static TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Academic, &["research", "study", "analysis", "theory", "methodology", "findings"]),
    (Topic::Business, &["strategy", "market", "revenue", "profit", "customer", "growth"]),
    (Topic::Technology, &["system", "algorithm", "data", "software", "digital", "platform"]),
    (Topic::Creative, &["design", "art", "creative", "aesthetic", "inspiration", "innovation"]),
];

// ---------------------------------------------------------------------------
// Grammar
// ---------------------------------------------------------------------------

/// Subject/verb agreement fixes. Regex triggers with a `subject` group kept
/// as written and the verb replaced.
pub static AGREEMENT_FIXES: &[(&str, &str)] = &[
    (r"(?i)\b(?P<subject>he|she|it)\s+are\b", "is"),
    (r"\b(?P<subject>I)\s+are\b", "am"),
    (r"\b(?P<subject>I)\s+is\b", "am"),
    (r"(?i)\b(?P<subject>they|we|you)\s+is\b", "are"),
    (r"(?i)\b(?P<subject>he|she|it)\s+have\b", "has"),
    (r"(?i)\b(?P<subject>they|we|you)\s+has\b", "have"),
    (r"\b(?P<subject>I)\s+has\b", "have"),
];

/// Vowel-initial words that take "a" ("a university").
pub static CONSONANT_SOUND_PREFIXES: &[&str] = &["uni", "use", "usu", "uti", "eu", "one", "once", "ewe", "ure"];

/// Consonant-initial words that take "an" ("an hour").
pub static VOWEL_SOUND_PREFIXES: &[&str] = &["hour", "honest", "honor", "honour", "heir"];

pub static MALFORMED_CONTRACTIONS: &[PatternEntry] = &[
    PatternEntry { trigger: "can not", replacement: Replacement::Fixed("cannot") },
    PatternEntry { trigger: "dont", replacement: Replacement::Fixed("don't") },
    PatternEntry { trigger: "doesnt", replacement: Replacement::Fixed("doesn't") },
    PatternEntry { trigger: "didnt", replacement: Replacement::Fixed("didn't") },
    PatternEntry { trigger: "isnt", replacement: Replacement::Fixed("isn't") },
    PatternEntry { trigger: "arent", replacement: Replacement::Fixed("aren't") },
    PatternEntry { trigger: "wasnt", replacement: Replacement::Fixed("wasn't") },
    PatternEntry { trigger: "werent", replacement: Replacement::Fixed("weren't") },
    PatternEntry { trigger: "hasnt", replacement: Replacement::Fixed("hasn't") },
    PatternEntry { trigger: "havent", replacement: Replacement::Fixed("haven't") },
    PatternEntry { trigger: "couldnt", replacement: Replacement::Fixed("couldn't") },
    PatternEntry { trigger: "shouldnt", replacement: Replacement::Fixed("shouldn't") },
    PatternEntry { trigger: "wouldnt", replacement: Replacement::Fixed("wouldn't") },
];

/// Accidentally doubled words.
pub static STUTTERS: &[&str] = &["the", "a", "an", "this", "it", "to", "is", "and", "of"];

/// Expanded form -> contraction, applied stochastically during reassembly.
pub static CONTRACTIONS: &[PatternEntry] = &[
    PatternEntry { trigger: "will not", replacement: Replacement::Fixed("won't") },
    PatternEntry { trigger: "cannot", replacement: Replacement::Fixed("can't") },
    PatternEntry { trigger: "do not", replacement: Replacement::Fixed("don't") },
    PatternEntry { trigger: "does not", replacement: Replacement::Fixed("doesn't") },
    PatternEntry { trigger: "did not", replacement: Replacement::Fixed("didn't") },
    PatternEntry { trigger: "has not", replacement: Replacement::Fixed("hasn't") },
    PatternEntry { trigger: "have not", replacement: Replacement::Fixed("haven't") },
    PatternEntry { trigger: "had not", replacement: Replacement::Fixed("hadn't") },
    PatternEntry { trigger: "is not", replacement: Replacement::Fixed("isn't") },
    PatternEntry { trigger: "are not", replacement: Replacement::Fixed("aren't") },
    PatternEntry { trigger: "was not", replacement: Replacement::Fixed("wasn't") },
    PatternEntry { trigger: "were not", replacement: Replacement::Fixed("weren't") },
    PatternEntry { trigger: "would not", replacement: Replacement::Fixed("wouldn't") },
    PatternEntry { trigger: "could not", replacement: Replacement::Fixed("couldn't") },
    PatternEntry { trigger: "should not", replacement: Replacement::Fixed("shouldn't") },
];

// ---------------------------------------------------------------------------
// Sentence shape
// ---------------------------------------------------------------------------

/// Clause boundaries for long sentences. First matching marker wins.
pub static CLAUSE_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { marker: ", which ", continuation: "This" },
    Breakpoint { marker: ", that ", continuation: "That" },
    Breakpoint { marker: ", and ", continuation: "Plus," },
    Breakpoint { marker: ", but ", continuation: "But" },
    Breakpoint { marker: ", so ", continuation: "So" },
    Breakpoint { marker: ", because ", continuation: "That's because" },
];

pub static PARAPHRASE_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { marker: ", which ", continuation: "This" },
    Breakpoint { marker: ", and ", continuation: "Also," },
    Breakpoint { marker: ", but ", continuation: "Still," },
    Breakpoint { marker: ", so ", continuation: "As a result," },
    Breakpoint { marker: ", because ", continuation: "This is because" },
];

/// Words that make a poor start for the second half of a comma split.
pub static CONNECTIVE_WORDS: &[&str] = &[
    "which", "that", "who", "whom", "whose", "and", "but", "or", "nor", "so", "because", "while", "where", "when",
];

/// Target sentence lengths in words, weighted by how often each band appears
/// in casual prose.
pub static LENGTH_TARGETS: &[LengthTarget] = &[
    LengthTarget { min: 3, max: 8, weight: 0.20 },
    LengthTarget { min: 9, max: 15, weight: 0.30 },
    LengthTarget { min: 16, max: 25, weight: 0.30 },
    LengthTarget { min: 26, max: 40, weight: 0.15 },
    LengthTarget { min: 41, max: 60, weight: 0.05 },
];

/// Abbreviations whose trailing period never ends a sentence.
pub static ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "mt", "fig", "approx", "dept",
];

/// Rewrites for a repeated "The X is Y" opening.
pub static COPULA_OPENING_REWRITES: &[&str] = &[
    "What you'll find is that the {subject} {verb} {rest}",
    "You'll notice the {subject} {verb} {rest}",
    "Turns out the {subject} {verb} {rest}",
];

/// Rewrites for a repeated "This X shows Y" opening.
pub static EVIDENCE_OPENING_REWRITES: &[&str] = &[
    "What this means is {rest}",
    "This {subject} points to {rest}",
    "You can see from this that {rest}",
];

// ---------------------------------------------------------------------------
// Conversational material
// ---------------------------------------------------------------------------

pub static ENGAGING_OPENERS: &[&str] = &[
    "Here's the thing:",
    "Here's something interesting:",
    "What's interesting is",
    "From what I've seen,",
    "The way I see it,",
    "If you ask me,",
    "What strikes me is",
    "I've found that",
    "What I've noticed is",
    "You know what's fascinating?",
    "Something I've been thinking about:",
    "From my perspective,",
];

pub static CASUAL_TRANSITIONS: &[&str] = &[
    "That said,",
    "Mind you,",
    "Having said that,",
    "At the same time,",
    "On the flip side,",
    "Then again,",
    "Even so,",
    "Either way,",
    "Now,",
    "Look,",
    "The thing is,",
    "Anyway,",
];

pub static HEDGES: &[&str] = &[
    "I think",
    "From what I can tell,",
    "As far as I know,",
    "It seems like",
    "Chances are",
    "My guess is",
    "In most cases,",
    "Probably",
];

/// Words that mark a sweeping, absolute claim worth hedging.
pub static ABSOLUTE_WORDS: &[&str] = &[
    "always",
    "never",
    "all",
    "every",
    "everyone",
    "everything",
    "nobody",
    "none",
    "completely",
    "entirely",
    "totally",
    "absolutely",
    "certainly",
    "definitely",
    "undoubtedly",
];

pub static RHETORICAL_QUESTIONS: &[&str] = &[
    "Why does this matter?",
    "What does this mean?",
    "How so?",
    "You might wonder why.",
    "What's the point?",
    "Why bring this up?",
    "So what's the deal?",
    "Makes you wonder, doesn't it?",
];

pub static DIRECT_ADDRESSES: &[&str] = &[
    "you see",
    "you know",
    "as you can imagine",
    "as you'd expect",
    "you'll notice",
    "as you've probably guessed",
];

pub static EXPERIENCE_PREFIXES: &[&str] = &[
    "In my experience,",
    "From what I've seen,",
    "Based on what I know,",
    "From my perspective,",
    "As far as I can tell,",
    "The way I see it,",
    "In my view,",
    "From where I sit,",
    "Speaking from experience,",
];

pub static ASIDES: &[&str] = &[
    "(at least in my experience)",
    "(from what I've seen)",
    "(which is interesting)",
    "(surprisingly enough)",
    "(worth keeping in mind)",
    "(just my two cents)",
    "(funny enough)",
    "(oddly enough)",
    "(believe it or not)",
];

pub static CLARIFIERS: &[&str] = &[
    ", if you know what I mean,",
    ", you get the idea,",
    ", more or less,",
    ", so to speak,",
    ", basically,",
    ", in other words,",
];

pub static FALSE_STARTS: &[&str] = &[
    "Well, I mean,",
    "You know what,",
    "Actually,",
    "Look,",
    "Hmm,",
    "So basically,",
    "To be honest,",
    "Now that I think about it,",
    "Come to think of it,",
];

pub static TRAILING_THOUGHTS: &[&str] = &[
    ", at least that's how I see it",
    ", well, most of the time anyway",
    ", or maybe I'm wrong about that",
    ", but who knows, really",
    ", though I could be mistaken",
    ", or so it seems",
    ", just my take on it",
];

pub static FILLERS: &[&str] = &[
    "kind of",
    "sort of",
    "pretty much",
    "more or less",
    "basically",
    "essentially",
    "actually",
    "really",
    "fairly",
];

/// Verbs a filler may follow ("is kind of slow").
pub static FILLER_VERBS: &[&str] = &["is", "are", "was", "were", "can", "could", "will", "would"];

/// Words a filler must never precede.
pub static FILLER_BLOCKERS: &[&str] = &["not", "a", "an", "the", "to", "be", "been", "being", "that", "this", "it"];

/// Surprise openers for a later sentence ("Plot twist: the cache was cold.").
pub static UNEXPECTED_TRANSITIONS: &[&str] = &[
    "Funny thing is,",
    "Here's what's wild:",
    "Plot twist:",
    "Here's the kicker:",
    "Get this:",
    "Turns out,",
    "Go figure,",
    "Oddly enough,",
    "Here's something weird:",
];

/// Sentence adverbs dropped in after a copula ("was honestly slower").
pub static INTERJECTIONS: &[&str] = &[
    "honestly",
    "frankly",
    "seriously",
    "genuinely",
    "apparently",
    "surprisingly",
    "clearly",
    "truly",
];

/// Closing opinions placed before a sentence's final period.
pub static OPINION_TOUCHES: &[&str] = &[
    " (at least that's my take)",
    " (from my experience)",
    " (or so it seems to me)",
];

pub static BRIDGES: &[&str] = &[
    "Here's the thing though:",
    "What's interesting is this:",
    "Now here's where it gets interesting:",
    "Speaking of which,",
    "That reminds me:",
    "On a related note,",
    "Which brings me to this:",
];

pub static EMPHASIS_WORDS: &[&str] = &[
    "really",
    "quite",
    "pretty",
    "rather",
    "fairly",
    "incredibly",
    "extremely",
    "particularly",
    "especially",
];

/// Gradable adjectives that can take an intensifier.
pub static GRADABLE_ADJECTIVES: &[&str] = &[
    "important", "good", "bad", "interesting", "difficult", "easy", "useful", "simple", "clear", "hard", "common",
];

/// Words that already intensify; an adjective after one of these is left alone.
pub static INTENSIFIERS: &[&str] = &[
    "very", "so", "too", "more", "most", "less", "least", "really", "quite", "pretty", "rather", "fairly",
    "incredibly", "extremely", "particularly", "especially", "super",
];

pub static FUSION_CONNECTORS: &[&str] = &["and", "but", "so", "plus", "while"];

/// Subordinators whose clause can be moved to the front of the sentence.
pub static FRONTABLE_SUBORDINATORS: &[&str] = &["because", "when", "if", "since", "although", "while", "once"];

pub static PERSONAL_STARTERS: &[&str] = &["Personally,", "In my view,", "From what I can tell,"];

pub static CASUAL_INTENSIFIERS: &[&str] = &["pretty", "quite", "really"];

pub static LIGHT_TRANSITIONS: &[&str] = &["Also,", "Plus,", "What's more,", "On top of that,"];

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// Transition words tracked by the reassembler and what to swap in when one
/// repeats.
pub static TRANSITION_ALTERNATIVES: &[TransitionAlternatives] = &[
    TransitionAlternatives { word: "also", alternatives: &["Plus,", "What's more,", "On top of that,", "Besides,"] },
    TransitionAlternatives { word: "plus", alternatives: &["Also,", "What's more,", "On top of that,", "Besides,"] },
    TransitionAlternatives { word: "but", alternatives: &["Though,", "That said,", "Mind you,", "Still,"] },
    TransitionAlternatives { word: "however", alternatives: &["But", "That said,", "On the other hand,", "Still,"] },
    TransitionAlternatives { word: "so", alternatives: &["Thus,", "As a result,", "Because of this,", "Which means"] },
    TransitionAlternatives { word: "then", alternatives: &["After that,", "Next,", "Later,", "From there,"] },
    TransitionAlternatives { word: "still", alternatives: &["Even so,", "That said,", "All the same,"] },
    TransitionAlternatives { word: "now", alternatives: &["Anyway,", "So,", "Right,"] },
    TransitionAlternatives { word: "anyway", alternatives: &["Either way,", "In any case,", "Now,"] },
];

/// Used when a repeated transition has no entry of its own.
pub static FALLBACK_TRANSITIONS: &[&str] = &["Also,", "Plus,", "What's more,"];

// ---------------------------------------------------------------------------
// Paraphrase tables
// ---------------------------------------------------------------------------

pub static PHRASE_PARAPHRASES: &[PatternEntry] = &[
    PatternEntry {
        trigger: "very important",
        replacement: Replacement::Pick(&["crucial", "vital", "essential", "critical", "key"]),
    },
    PatternEntry {
        trigger: "very good",
        replacement: Replacement::Pick(&["excellent", "outstanding", "superb", "impressive"]),
    },
    PatternEntry {
        trigger: "very bad",
        replacement: Replacement::Pick(&["terrible", "awful", "dreadful", "horrible"]),
    },
    PatternEntry {
        trigger: "a lot of",
        replacement: Replacement::Pick(&["many", "plenty of", "loads of", "countless"]),
    },
    PatternEntry {
        trigger: "because of",
        replacement: Replacement::Pick(&["due to", "owing to", "as a result of", "thanks to"]),
    },
    PatternEntry {
        trigger: "in spite of",
        replacement: Replacement::Pick(&["despite", "regardless of"]),
    },
    PatternEntry {
        trigger: "at the same time",
        replacement: Replacement::Pick(&["simultaneously", "meanwhile", "concurrently"]),
    },
    PatternEntry {
        trigger: "for example",
        replacement: Replacement::Pick(&["for instance", "say", "to give one example"]),
    },
    PatternEntry {
        trigger: "in conclusion",
        replacement: Replacement::Pick(&["to sum up", "all in all", "ultimately", "finally"]),
    },
];

pub static TRANSITIONAL_PARAPHRASES: &[PatternEntry] = &[
    PatternEntry {
        trigger: "first of all",
        replacement: Replacement::Pick(&["to begin with", "first off", "to start"]),
    },
    PatternEntry {
        trigger: "in addition",
        replacement: Replacement::Pick(&["also", "what's more", "besides"]),
    },
    PatternEntry {
        trigger: "on the other hand",
        replacement: Replacement::Pick(&["then again", "alternatively", "in contrast"]),
    },
    PatternEntry {
        trigger: "as a result",
        replacement: Replacement::Pick(&["because of this", "so", "which means"]),
    },
    PatternEntry {
        trigger: "in other words",
        replacement: Replacement::Pick(&["put simply", "that is", "simply put"]),
    },
];

pub static CONTEXTUAL_SENSES: &[SenseEntry] = &[
    SenseEntry {
        word: "show",
        senses: &[
            &["reveal", "display", "present", "illustrate"],
            &["suggest", "point to", "signal", "hint at"],
            &["confirm", "verify", "establish"],
        ],
    },
    SenseEntry {
        word: "make",
        senses: &[&["build", "create", "develop", "produce"], &["cause", "trigger", "lead to", "bring about"]],
    },
    SenseEntry {
        word: "get",
        senses: &[&["obtain", "gain", "secure", "acquire"], &["receive", "collect", "pick up"], &["grasp", "understand"]],
    },
];

pub static FORMAL_TO_CASUAL: &[PatternEntry] = &[
    PatternEntry { trigger: "utilize", replacement: Replacement::Fixed("use") },
    PatternEntry { trigger: "demonstrate", replacement: Replacement::Fixed("show") },
    PatternEntry { trigger: "facilitate", replacement: Replacement::Fixed("help") },
    PatternEntry { trigger: "implement", replacement: Replacement::Fixed("put in place") },
    PatternEntry { trigger: "analyze", replacement: Replacement::Fixed("look at") },
    PatternEntry { trigger: "evaluate", replacement: Replacement::Fixed("check") },
    PatternEntry { trigger: "comprehend", replacement: Replacement::Fixed("understand") },
    PatternEntry { trigger: "acquire", replacement: Replacement::Fixed("get") },
    PatternEntry { trigger: "subsequently", replacement: Replacement::Fixed("then") },
    PatternEntry { trigger: "approximately", replacement: Replacement::Fixed("about") },
    PatternEntry { trigger: "sufficient", replacement: Replacement::Fixed("enough") },
    PatternEntry { trigger: "numerous", replacement: Replacement::Fixed("many") },
];

/// Past participle -> simple past, for turning "was written by X" around.
pub static PAST_FORMS: &[(&str, &str)] = &[
    ("written", "wrote"),
    ("made", "made"),
    ("built", "built"),
    ("taken", "took"),
    ("given", "gave"),
    ("done", "did"),
    ("seen", "saw"),
    ("chosen", "chose"),
    ("known", "knew"),
    ("found", "found"),
    ("led", "led"),
    ("run", "ran"),
    ("sent", "sent"),
    ("won", "won"),
];

pub static LOGICAL_TRANSITIONS_CONTRAST: &[&str] = &["That said,", "On the other hand,", "Even so,", "In contrast,"];
pub static LOGICAL_TRANSITIONS_ADDITION: &[&str] = &["Also,", "On top of that,", "Plus,", "What's more,"];
pub static LOGICAL_TRANSITIONS_CAUSE: &[&str] = &["So", "As a result,", "Because of that,", "That's why"];
pub static LOGICAL_TRANSITIONS_SEQUENCE: &[&str] = &["Then,", "Next,", "After that,", "From there,"];

/// Transition openers that mean a sentence already links to the previous one.
pub static LINKING_OPENERS: &[&str] = &[
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "additionally",
    "consequently",
    "also",
    "plus",
    "but",
    "so",
    "then",
    "still",
];
