//! Loaders: rules files and answer sheets.
//!
//! Wire structs mirror the JSON documents (string-keyed maps); conversion
//! into the typed core domain rejects unknown trait/elective keys and
//! malformed question ids, then `ScoringRules::validate()` enforces the
//! table invariants. Nothing is silently defaulted except what the model
//! itself defaults (importance 1.0, absent synergy lists, trait weights
//! not listed for an elective).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use ep_core::{
    Answer, AnswerSheet, Elective, ElectiveTable, ScoringRules, SurveyQuestion, SynergyRule,
    TraitCode, TraitWeights,
};

use crate::{IoError, IoResult};

// ----------------------------- Wire-facing types -----------------------------

#[derive(Debug, Deserialize)]
struct QuestionWire {
    id: u8,
    text: String,
    #[serde(rename = "trait")]
    trait_code: String,
}

#[derive(Debug, Deserialize)]
struct SynergyWire {
    traits: [String; 2],
    bonus: f64,
}

/// Model constants; any field may be omitted to keep the reference value.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConstantsWire {
    direct_scale: f64,
    trait_share: f64,
    direct_share: f64,
    synergy_threshold: f64,
    synergy_ceiling: f64,
    near_tie_margin: u32,
    tiebreak_bonus: u32,
    confidence_base: f64,
    confidence_slope: f64,
}

impl Default for ConstantsWire {
    fn default() -> Self {
        let reference = ScoringRules::default();
        ConstantsWire {
            direct_scale: reference.direct_scale,
            trait_share: reference.trait_share,
            direct_share: reference.direct_share,
            synergy_threshold: reference.synergy_threshold,
            synergy_ceiling: reference.synergy_ceiling,
            near_tie_margin: reference.near_tie_margin,
            tiebreak_bonus: reference.tiebreak_bonus,
            confidence_base: reference.confidence_base,
            confidence_slope: reference.confidence_slope,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RulesWire {
    questions: Vec<QuestionWire>,
    trait_weights: BTreeMap<String, BTreeMap<String, f64>>,
    direct_mapping: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    importance: BTreeMap<String, f64>,
    #[serde(default)]
    synergies: BTreeMap<String, Vec<SynergyWire>>,
    #[serde(default)]
    constants: ConstantsWire,
}

// ----------------------------- Conversion -----------------------------

fn parse_trait(code: &str, context: &str) -> IoResult<TraitCode> {
    code.parse::<TraitCode>()
        .map_err(|_| IoError::Domain(format!("{context}: unknown trait code {code:?}")))
}

fn parse_elective(code: &str, context: &str) -> IoResult<Elective> {
    code.parse::<Elective>()
        .map_err(|_| IoError::Domain(format!("{context}: unknown elective code {code:?}")))
}

fn parse_question_id(key: &str, context: &str) -> IoResult<u8> {
    key.parse::<u8>()
        .map_err(|_| IoError::Domain(format!("{context}: question id {key:?} is not an integer")))
}

/// Per-elective weight vector from a string-keyed map; traits not listed
/// weigh 0, unknown keys are rejected.
fn convert_weights(map: &BTreeMap<String, f64>, context: &str) -> IoResult<TraitWeights> {
    let mut weights = [0.0f64; 6];
    for (code, &weight) in map {
        let trait_code = parse_trait(code, context)?;
        weights[trait_code.index()] = weight;
    }
    Ok(TraitWeights::new(
        weights[0], weights[1], weights[2], weights[3], weights[4], weights[5],
    ))
}

fn convert(wire: RulesWire) -> IoResult<ScoringRules> {
    let questions = wire
        .questions
        .into_iter()
        .map(|q| {
            let trait_code = parse_trait(&q.trait_code, &format!("question {}", q.id))?;
            Ok(SurveyQuestion { id: q.id, text: q.text, trait_code })
        })
        .collect::<IoResult<Vec<_>>>()?;

    let mut per_elective_weights: [Option<TraitWeights>; 3] = [None; 3];
    for (code, weights) in &wire.trait_weights {
        let elective = parse_elective(code, "trait_weights")?;
        per_elective_weights[elective.index()] =
            Some(convert_weights(weights, &format!("trait_weights.{code}"))?);
    }
    let zero = TraitWeights::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let [mmgd_w, itba_w, mobile_w] = per_elective_weights.map(|w| w.unwrap_or(zero));
    let trait_weights = ElectiveTable::new(mmgd_w, itba_w, mobile_w);

    let mut direct_mapping = BTreeMap::new();
    for (key, row) in &wire.direct_mapping {
        let id = parse_question_id(key, "direct_mapping")?;
        let mut table = [0.0f64; 3];
        for (code, &weight) in row {
            let elective = parse_elective(code, &format!("direct_mapping.{key}"))?;
            table[elective.index()] = weight;
        }
        direct_mapping.insert(id, ElectiveTable::new(table[0], table[1], table[2]));
    }

    let mut importance = BTreeMap::new();
    for (key, &multiplier) in &wire.importance {
        importance.insert(parse_question_id(key, "importance")?, multiplier);
    }

    let mut per_elective_synergies: [Vec<SynergyRule>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (code, rules) in &wire.synergies {
        let elective = parse_elective(code, "synergies")?;
        let converted = rules
            .iter()
            .map(|rule| {
                let context = format!("synergies.{code}");
                Ok(SynergyRule {
                    pair: (
                        parse_trait(&rule.traits[0], &context)?,
                        parse_trait(&rule.traits[1], &context)?,
                    ),
                    bonus: rule.bonus,
                })
            })
            .collect::<IoResult<Vec<_>>>()?;
        per_elective_synergies[elective.index()] = converted;
    }
    let [mmgd_s, itba_s, mobile_s] = per_elective_synergies;
    let synergies = ElectiveTable::new(mmgd_s, itba_s, mobile_s);

    let c = wire.constants;
    let rules = ScoringRules {
        questions,
        trait_weights,
        direct_mapping,
        importance,
        synergies,
        direct_scale: c.direct_scale,
        trait_share: c.trait_share,
        direct_share: c.direct_share,
        synergy_threshold: c.synergy_threshold,
        synergy_ceiling: c.synergy_ceiling,
        near_tie_margin: c.near_tie_margin,
        tiebreak_bonus: c.tiebreak_bonus,
        confidence_base: c.confidence_base,
        confidence_slope: c.confidence_slope,
    };
    rules.validate()?;
    Ok(rules)
}

// ----------------------------- Public API -----------------------------

/// Load and validate an alternate rule set from a JSON file.
pub fn load_rules(path: &Path) -> IoResult<ScoringRules> {
    let bytes = fs::read(path)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let wire: RulesWire = serde_json::from_slice(&bytes)?;
    convert(wire)
}

/// Load an answer sheet: a JSON array of 21 integers 1..=5, with `null`
/// for unanswered slots. Unanswered slots take `fill` (the neutral default
/// at the CLI); range and length violations fail fast.
pub fn load_answers(path: &Path, fill: Answer) -> IoResult<AnswerSheet> {
    let bytes = fs::read(path)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let slots: Vec<Option<u8>> = serde_json::from_slice(&bytes)?;
    Ok(AnswerSheet::from_partial(&slots, fill)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(value: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        file
    }

    /// The built-in rule set, re-encoded in the wire format.
    fn default_rules_json() -> serde_json::Value {
        let rules = ScoringRules::default();
        let questions: Vec<_> = rules
            .questions
            .iter()
            .map(|q| json!({ "id": q.id, "text": q.text, "trait": q.trait_code.letter() }))
            .collect();
        let trait_weights: serde_json::Map<String, serde_json::Value> = rules
            .trait_weights
            .iter()
            .map(|(e, weights)| {
                let row: serde_json::Map<String, serde_json::Value> = weights
                    .iter()
                    .map(|(t, w)| (t.letter().to_string(), json!(w)))
                    .collect();
                (e.code().to_string(), serde_json::Value::Object(row))
            })
            .collect();
        let direct_mapping: serde_json::Map<String, serde_json::Value> = rules
            .direct_mapping
            .iter()
            .map(|(id, table)| {
                let row: serde_json::Map<String, serde_json::Value> = table
                    .iter()
                    .map(|(e, w)| (e.code().to_string(), json!(w)))
                    .collect();
                (id.to_string(), serde_json::Value::Object(row))
            })
            .collect();
        let importance: serde_json::Map<String, serde_json::Value> =
            rules.importance.iter().map(|(id, m)| (id.to_string(), json!(m))).collect();
        let synergies: serde_json::Map<String, serde_json::Value> = rules
            .synergies
            .iter()
            .map(|(e, list)| {
                let rows: Vec<_> = list
                    .iter()
                    .map(|r| {
                        json!({
                            "traits": [r.pair.0.letter(), r.pair.1.letter()],
                            "bonus": r.bonus,
                        })
                    })
                    .collect();
                (e.code().to_string(), json!(rows))
            })
            .collect();
        json!({
            "questions": questions,
            "trait_weights": trait_weights,
            "direct_mapping": direct_mapping,
            "importance": importance,
            "synergies": synergies,
        })
    }

    #[test]
    fn roundtrips_the_reference_rule_set() {
        let file = write_temp(&default_rules_json());
        let loaded = load_rules(file.path()).unwrap();
        assert_eq!(loaded, ScoringRules::default());
    }

    #[test]
    fn rejects_unknown_trait_code() {
        let mut doc = default_rules_json();
        doc["questions"][0]["trait"] = json!("Q");
        let file = write_temp(&doc);
        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Domain(_)), "{err}");
    }

    #[test]
    fn rejects_missing_question() {
        let mut doc = default_rules_json();
        doc["questions"].as_array_mut().unwrap().pop();
        // Keep the tables consistent with the shorter list.
        doc["direct_mapping"].as_object_mut().unwrap().remove("21");
        doc["importance"].as_object_mut().unwrap().remove("21");
        let file = write_temp(&doc);
        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, IoError::Domain(_)), "{err}");
    }

    #[test]
    fn loads_answers_with_neutral_fill() {
        let mut slots = vec![json!(5); 21];
        slots[2] = json!(null);
        let file = write_temp(&json!(slots));
        let sheet = load_answers(file.path(), Answer::NEUTRAL).unwrap();
        assert_eq!(sheet.get(2), Answer::NEUTRAL);
        assert_eq!(sheet.get(0), Answer::MAX);
    }

    #[test]
    fn rejects_short_answer_arrays() {
        let file = write_temp(&json!([3, 3, 3]));
        let err = load_answers(file.path(), Answer::NEUTRAL).unwrap_err();
        assert!(matches!(err, IoError::Domain(_)), "{err}");
    }

    #[test]
    fn rejects_out_of_range_answers() {
        let mut slots = vec![json!(3); 21];
        slots[10] = json!(6);
        let file = write_temp(&json!(slots));
        let err = load_answers(file.path(), Answer::NEUTRAL).unwrap_err();
        assert!(matches!(err, IoError::Domain(_)), "{err}");
    }
}
