//! Human decisions: menus of named options answered with raw text.

use std::collections::VecDeque;

/// One entry of a menu presented to a human.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub detail: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Answers menus on behalf of a human player.
///
/// Implementations return the raw answer; interpretation (parsing and
/// clamping) happens in [`resolve_choice`] so every frontend behaves alike.
pub trait InputProvider {
    fn choose(&mut self, prompt: &str, options: &[Choice]) -> String;
}

/// Turns a raw menu answer into a zero-based index.
///
/// Answers are one-based. Unparseable input selects the first option, and
/// numbers outside `1..=count` clamp to the nearest bound, however many
/// digits they have. Returns `None` only for an empty menu.
pub fn resolve_choice(raw: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let answer = raw.trim();
    let picked = match answer.parse::<i64>() {
        Ok(n) => n,
        Err(_) => match overflow_sign(answer) {
            Some(true) => i64::MAX,
            Some(false) => i64::MIN,
            None => 1,
        },
    };
    let clamped = picked.clamp(1, count as i64);
    Some(clamped as usize - 1)
}

/// Sign of an integer literal too wide for `i64`: `Some(true)` when
/// positive, `None` when the text is not an integer at all.
fn overflow_sign(answer: &str) -> Option<bool> {
    let (positive, digits) = match answer.as_bytes().first()? {
        b'-' => (false, &answer[1..]),
        b'+' => (true, &answer[1..]),
        _ => (true, answer),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(positive)
}

/// Replays queued answers. An exhausted queue answers "1".
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts that were asked, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputProvider for ScriptedInput {
    fn choose(&mut self, prompt: &str, _options: &[Choice]) -> String {
        self.prompts.push(prompt.to_owned());
        self.answers.pop_front().unwrap_or_else(|| "1".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_clamp_into_the_menu() {
        assert_eq!(resolve_choice("2", 3), Some(1));
        assert_eq!(resolve_choice(" 3 ", 3), Some(2));
        assert_eq!(resolve_choice("9", 3), Some(2));
        assert_eq!(resolve_choice("0", 3), Some(0));
        assert_eq!(resolve_choice("-4", 3), Some(0));
    }

    #[test]
    fn oversized_numbers_clamp_by_sign() {
        assert_eq!(resolve_choice("99999999999999999999", 3), Some(2));
        assert_eq!(resolve_choice("+99999999999999999999", 3), Some(2));
        assert_eq!(resolve_choice("-99999999999999999999", 3), Some(0));
        assert_eq!(resolve_choice("9999999999999999999x", 3), Some(0));
        assert_eq!(resolve_choice("-", 3), Some(0));
    }

    #[test]
    fn garbage_selects_the_first_option() {
        assert_eq!(resolve_choice("fight", 4), Some(0));
        assert_eq!(resolve_choice("", 4), Some(0));
    }

    #[test]
    fn empty_menu_has_no_answer() {
        assert_eq!(resolve_choice("1", 0), None);
    }

    #[test]
    fn scripted_input_defaults_to_first() {
        let mut input = ScriptedInput::new(["3"]);
        assert_eq!(input.choose("action", &[]), "3");
        assert_eq!(input.choose("target", &[]), "1");
        assert_eq!(input.prompts(), ["action", "target"]);
    }
}
