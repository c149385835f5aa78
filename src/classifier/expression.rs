/// Expression label vocabulary produced by the face classifier.
///
/// Labels outside this vocabulary reduce to `Neutral` at the boundary; the
/// game core never sees raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expression {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
}

impl Expression {
    /// Parse a classifier label. Returns `None` for labels outside the
    /// vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "neutral" => Some(Self::Neutral),
            "happy" => Some(Self::Happy),
            "sad" => Some(Self::Sad),
            "angry" => Some(Self::Angry),
            "fearful" => Some(Self::Fearful),
            "disgusted" => Some(Self::Disgusted),
            "surprised" => Some(Self::Surprised),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Fearful => "fearful",
            Self::Disgusted => "disgusted",
            Self::Surprised => "surprised",
        }
    }
}

/// One frame's classification result: (label, confidence) pairs in the
/// order the classifier emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionScores {
    entries: Vec<(String, f32)>,
}

impl ExpressionScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, score: f32) {
        self.entries.push((label.into(), score));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label with the strictly highest score. The running max starts at 0.0,
    /// so an entry must score above zero to be selected at all, and ties go
    /// to the first-seen entry.
    pub fn dominant_label(&self) -> Option<&str> {
        let mut max_score = 0.0f32;
        let mut dominant = None;
        for (label, score) in &self.entries {
            if *score > max_score {
                max_score = *score;
                dominant = Some(label.as_str());
            }
        }
        dominant
    }

    /// Reduce to a single expression: the dominant label, or `Neutral` when
    /// nothing scored above zero or the label is out of vocabulary.
    pub fn dominant(&self) -> Expression {
        self.dominant_label()
            .and_then(Expression::from_label)
            .unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for ExpressionScores {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, score)| (label.into(), score))
                .collect(),
        }
    }
}
