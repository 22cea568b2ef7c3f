use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Identifier shared by a prediction and its reference answer.
///
/// Submissions in the wild carry both string and numeric ids, so both are
/// accepted and keyed by their text. Integral floats key like integers, so
/// `1.0` and `1` name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "Value")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// None for anything that is neither a string nor a number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::new(s.as_str())),
            Value::Number(n) => Some(Self::new(number_key(n))),
            _ => None,
        }
    }
}

// Below 2^53 every integral f64 is exact as an i64.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

fn number_key(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < EXACT_INT_LIMIT => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

impl TryFrom<Value> for ItemId {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
            .ok_or_else(|| format!("item id must be a string or number, got {value}"))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Question category of an understanding-track item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    YesOrNo,
    What,
    How,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::YesOrNo,
        QuestionType::What,
        QuestionType::How,
    ];

    /// Exact match on the wire label; anything else is not a scored category.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "yes-or-no" => Some(QuestionType::YesOrNo),
            "what" => Some(QuestionType::What),
            "how" => Some(QuestionType::How),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            QuestionType::YesOrNo => 0,
            QuestionType::What => 1,
            QuestionType::How => 2,
        }
    }

    /// Contribution of this category to the understanding score.
    pub fn weight(self) -> f64 {
        match self {
            QuestionType::YesOrNo => 0.2,
            QuestionType::What => 0.3,
            QuestionType::How => 0.5,
        }
    }
}

/// One submitted answer. Every field is optional and loosely typed; the
/// evaluators decide what is usable, so a malformed item never rejects the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionItem {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub precision: Option<Value>,
    #[serde(default)]
    pub perception: Option<Value>,
    #[serde(default)]
    pub knowledge: Option<Value>,
}

impl PredictionItem {
    /// Key used to look up the reference answer. An unusable id matches nothing.
    pub fn item_id(&self) -> Option<ItemId> {
        self.id.as_ref().and_then(ItemId::from_value)
    }
}

/// Reference answer. Same shape as a prediction, but the id is mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundTruthItem {
    pub id: ItemId,
    #[serde(default, rename = "type")]
    pub question_type: Option<Value>,
    #[serde(default)]
    pub precision: Option<Value>,
    #[serde(default)]
    pub perception: Option<Value>,
    #[serde(default)]
    pub knowledge: Option<Value>,
}

impl GroundTruthItem {
    /// None for a missing, non-string or unknown label.
    pub fn category(&self) -> Option<QuestionType> {
        self.question_type
            .as_ref()
            .and_then(Value::as_str)
            .and_then(QuestionType::parse)
    }
}

/// Canonical form of a multiple-choice answer: trimmed and upper-cased.
/// A missing answer normalises to the empty string.
pub fn normalize_answer(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_uppercase(),
        Some(Value::Bool(true)) => "TRUE".to_string(),
        Some(Value::Bool(false)) => "FALSE".to_string(),
        Some(other) => other.to_string().trim().to_uppercase(),
    }
}

/// Lenient numeric reading used for quality scores. Numbers, numeric strings and
/// booleans are accepted. A "nan" string reads as NaN and leaves the
/// correlations of its dimension undefined.
pub fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/items.rs"]
mod tests;
