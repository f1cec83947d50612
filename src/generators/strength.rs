// src/generators/strength.rs
use std::collections::HashSet;

use crate::models::CharacterClass;

/// Score a password from 0 to 100.
///
/// Bonuses and penalties are summed as signed integers and only clamped at the end,
/// so intermediate totals may leave the 0..=100 range.
pub fn score_strength(password: &str) -> u8 {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len() as i64;

    let count = |class: CharacterClass| chars.iter().filter(|&&c| class.matches(c)).count();
    let uppercase = count(CharacterClass::Uppercase);
    let lowercase = count(CharacterClass::Lowercase);
    let digits = count(CharacterClass::Digit);
    let symbols = count(CharacterClass::Symbol);

    let mut score: i64 = (length * 2).min(25);

    if uppercase > 0 {
        score += 20;
    }
    if lowercase > 0 {
        score += 20;
    }
    if digits > 0 {
        score += 20;
    }
    if symbols > 0 {
        score += 25;
    }
    if length >= 12 {
        score += 10;
    }
    if uppercase >= 2 {
        score += 5;
    }
    if symbols >= 2 {
        score += 5;
    }

    score -= repeated_characters(&chars) as i64 * 5;

    if has_digit_run(&chars) {
        score -= 10;
    }
    if has_letter_run(&chars) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Number of characters beyond the first occurrence of each distinct character.
fn repeated_characters(chars: &[char]) -> usize {
    let distinct: HashSet<&char> = chars.iter().collect();
    chars.len() - distinct.len()
}

// "012" through "789"
fn has_digit_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        w.iter().all(char::is_ascii_digit) && ascending(w[0], w[1]) && ascending(w[1], w[2])
    })
}

// "abc" through "xyz", either case
fn has_letter_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let w: Vec<char> = w.iter().map(char::to_ascii_lowercase).collect();
        w.iter().all(char::is_ascii_lowercase) && ascending(w[0], w[1]) && ascending(w[1], w[2])
    })
}

fn ascending(a: char, b: char) -> bool {
    b as u32 == a as u32 + 1
}

/// Suggestions for improving a password, ordered from most to least important.
pub fn strength_feedback(password: &str) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    let mut feedback = Vec::new();

    if chars.len() < 12 {
        feedback.push("Increase password length to at least 12 characters".to_string());
    }
    for (class, hint) in [
        (CharacterClass::Uppercase, "Add uppercase letters"),
        (CharacterClass::Lowercase, "Add lowercase letters"),
        (CharacterClass::Digit, "Add numbers"),
        (CharacterClass::Symbol, "Add symbols"),
    ] {
        if !class.is_present_in(&chars) {
            feedback.push(hint.to_string());
        }
    }
    let repeats = repeated_characters(&chars);
    if repeats > 0 {
        feedback.push(format!("Avoid repeated characters ({} repeated)", repeats));
    }
    if has_digit_run(&chars) {
        feedback.push("Avoid sequential numbers (e.g., '123')".to_string());
    }
    if has_letter_run(&chars) {
        feedback.push("Avoid sequential letters (e.g., 'abc')".to_string());
    }

    feedback
}
