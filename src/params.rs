// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

/// Every probability and threshold the pipeline uses. Per-strategy chances
/// for the optional passes live in [`crate::strategies::PassPlan`].
pub(crate) struct Hyperparameters {
    // Weighted selection
    pub weight_base: f64,
    pub weight_step: f64,
    pub weight_floor: f64,

    // Register selection
    pub formal_register_min: f64,
    pub conversational_register_max: f64,
    pub topic_bias_academic: f64,
    pub topic_bias_business: f64,
    pub topic_bias_creative: f64,

    // Segmentation
    pub long_sentence_chars: usize,
    pub long_sentence_min_clause: usize,
    pub short_sentence_chars: usize,

    // Per-sentence transformer
    pub synonym_swap: f64,
    pub engaging_opener: f64,
    pub repeated_opening_rewrite: f64,
    pub midpoint_split: f64,
    pub midpoint_split_min_chars: usize,
    pub midpoint_split_min_clause: usize,
    pub casual_transition: f64,

    // Flow
    pub transition_swap: f64,
    pub contraction: f64,

    // Paraphrase
    pub restructure: f64,
    pub passive_to_active: f64,
    pub phrase_paraphrase: f64,
    pub transitional_paraphrase: f64,
    pub contextual_sense: f64,
    pub formal_to_casual: f64,
    pub combine_short: f64,
    pub combine_max_chars: usize,
    pub split_long: f64,
    pub split_min_chars: usize,
    pub split_min_clause: usize,
    pub tense_consistency: f64,
    pub logical_transition: f64,
    pub topic_shift_similarity: f64,

    // Change ratio
    pub sentence_delta_weight: f64,
    pub change_ratio_cap: f64,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    weight_base: 1.5,
    weight_step: 0.2,
    weight_floor: 0.3,

    formal_register_min: 0.7,
    conversational_register_max: 0.3,
    topic_bias_academic: 0.05,
    topic_bias_business: 0.05,
    topic_bias_creative: -0.05,

    long_sentence_chars: 150,
    long_sentence_min_clause: 60,
    short_sentence_chars: 5,

    synonym_swap: 0.65,
    engaging_opener: 0.3,
    repeated_opening_rewrite: 0.7,
    midpoint_split: 0.4,
    midpoint_split_min_chars: 100,
    midpoint_split_min_clause: 20,
    casual_transition: 0.15,

    transition_swap: 0.7,
    contraction: 0.7,

    restructure: 0.6,
    passive_to_active: 0.4,
    phrase_paraphrase: 0.7,
    transitional_paraphrase: 0.8,
    contextual_sense: 0.5,
    formal_to_casual: 0.6,
    combine_short: 0.3,
    combine_max_chars: 40,
    split_long: 0.4,
    split_min_chars: 80,
    split_min_clause: 20,
    tense_consistency: 0.3,
    logical_transition: 0.2,
    topic_shift_similarity: 0.3,

    sentence_delta_weight: 3.0,
    change_ratio_cap: 0.95,
};
