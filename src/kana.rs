use log::debug;

/// The four phonetic rule categories, in their fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Dakuten: か → が.
    Voice,
    /// Handakuten: ば → ぱ.
    SemiVoice,
    /// Small form: つ → っ.
    Smallify,
    /// Back to the base form: が → か.
    Revert,
}

/// One rule: two equal-length character sequences with positional
/// correspondence. Index i of `pre` maps to index i of `post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRule {
    kind: RuleKind,
    pre: Vec<char>,
    post: Vec<char>,
}

impl TransformRule {
    /// Builds a rule from two character sequences.
    ///
    /// Panics if the sequences differ in length; a mismatched table is a
    /// construction bug, not a recoverable condition.
    pub fn new(kind: RuleKind, pre: &str, post: &str) -> Self {
        let pre: Vec<char> = pre.chars().collect();
        let post: Vec<char> = post.chars().collect();
        assert_eq!(
            pre.len(),
            post.len(),
            "transform rule {kind:?}: pre/post sequence lengths differ"
        );
        TransformRule { kind, pre, post }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The positional counterpart of `ch`, or `None` when this rule does
    /// not cover it.
    pub fn apply(&self, ch: char) -> Option<char> {
        self.pre.iter().position(|&p| p == ch).map(|i| self.post[i])
    }
}

/// The table-driven phonetic transformer.
///
/// Each character sits on at most one modify-cycle: か→が→か, は→ば→ぱ→は,
/// あ→ぁ→あ, つ→っ→づ→つ. Everything outside the tables is a fixed point.
/// The only cross-category duplicate in the standard tables is っ (voiced
/// and revert); rule priority sends it to づ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaTransformer {
    rules: Vec<TransformRule>,
}

impl Default for KanaTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl KanaTransformer {
    /// The standard tables. The voiced pre-sequence deliberately carries
    /// っ rather than つ, which is what closes the つ→っ→づ→つ cycle.
    pub fn new() -> Self {
        Self::from_rules(vec![
            TransformRule::new(
                RuleKind::Voice,
                "かきくけこさしすせそたちってとはひふへほ",
                "がぎぐげござじずぜぞだぢづでどばびぶべぼ",
            ),
            TransformRule::new(RuleKind::SemiVoice, "ばびぶべぼ", "ぱぴぷぺぽ"),
            TransformRule::new(RuleKind::Smallify, "あいうえおつやゆよ", "ぁぃぅぇぉっゃゅょ"),
            TransformRule::new(
                RuleKind::Revert,
                "がぎぐげござじずぜぞだぢづでどぱぴぷぺぽぁぃぅぇぉっゃゅょ",
                "かきくけこさしすせそたちつてとはひふへほあいうえおつやゆよ",
            ),
        ])
    }

    /// Custom tables; the slice order is the priority order.
    pub fn from_rules(rules: Vec<TransformRule>) -> Self {
        KanaTransformer { rules }
    }

    /// Transforms `ch` by the first rule whose pre-sequence contains it.
    /// `None` means no rule applies and the caller keeps `ch` as is.
    pub fn transform(&self, ch: char) -> Option<char> {
        for rule in &self.rules {
            if let Some(out) = rule.apply(ch) {
                debug!("transform {:?}: {ch} -> {out}", rule.kind);
                return Some(out);
            }
        }
        None
    }

    /// Follows a single named edge of the transform graph, ignoring
    /// priority. Identity (`None`) when the edge is undefined.
    pub fn apply(&self, kind: RuleKind, ch: char) -> Option<char> {
        self.rules
            .iter()
            .find(|r| r.kind == kind)
            .and_then(|r| r.apply(ch))
    }
}
