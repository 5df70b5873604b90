//! Interactive field collection with dialoguer.
//!
//! Required fields re-prompt while blank; Ctrl-C is a clean cancel, not an
//! error.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AdvancedDetails, AppError, BusinessProfile, Tone};

/// Collect a complete business profile from the terminal.
///
/// Returns `Ok(None)` when the user cancels. The returned profile always
/// passes `validate()` for its required fields.
pub fn collect() -> Result<Option<BusinessProfile>, AppError> {
    println!("Describe your business. Required fields re-prompt until filled.");

    let Some(company) = ask_required("Company name")? else { return Ok(None) };
    let Some(product) = ask_required("Product or service description")? else { return Ok(None) };
    let Some(target_audience) = ask_required("Target audience")? else { return Ok(None) };
    let Some(top_problems) = ask_required("Top problems solved")? else { return Ok(None) };
    let Some(value_proposition) = ask_required("Value proposition")? else { return Ok(None) };

    let tone = match ask_tone()? {
        ToneAnswer::Cancelled => return Ok(None),
        ToneAnswer::Skipped => None,
        ToneAnswer::Chosen(tone) => Some(tone),
    };

    let advanced = match ask_advanced()? {
        AdvancedAnswer::Cancelled => return Ok(None),
        AdvancedAnswer::Skipped => None,
        AdvancedAnswer::Details(details) => Some(details),
    };

    Ok(Some(BusinessProfile {
        company,
        product,
        target_audience,
        top_problems,
        value_proposition,
        tone,
        advanced,
    }))
}

enum ToneAnswer {
    Chosen(Tone),
    Skipped,
    Cancelled,
}

enum AdvancedAnswer {
    Details(AdvancedDetails),
    Skipped,
    Cancelled,
}

/// Prompt until a non-blank value arrives; `None` means the user cancelled.
fn ask_required(prompt: &str) -> Result<Option<String>, AppError> {
    loop {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) if value.trim().is_empty() => {
                eprintln!("This field is required.");
            }
            Ok(value) => return Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(None);
            }
            Err(err) => return Err(AppError::Input(format!("Failed to read input: {}", err))),
        }
    }
}

/// Optional free-text slot; blank leaves it unset.
fn ask_optional(prompt: &str) -> Result<Option<Option<String>>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) if value.trim().is_empty() => Ok(Some(None)),
        Ok(value) => Ok(Some(Some(value))),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input(format!("Failed to read input: {}", err))),
    }
}

fn ask_tone() -> Result<ToneAnswer, AppError> {
    let mut items: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
    items.push("Skip");

    match Select::new().with_prompt("Preferred tone").items(&items).default(0).interact() {
        Ok(index) if index < Tone::ALL.len() => Ok(ToneAnswer::Chosen(Tone::ALL[index])),
        Ok(_) => Ok(ToneAnswer::Skipped),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Ok(ToneAnswer::Cancelled)
        }
        Err(err) => Err(AppError::Input(format!("Failed to read tone: {}", err))),
    }
}

fn ask_advanced() -> Result<AdvancedAnswer, AppError> {
    let wanted = match Confirm::new()
        .with_prompt("Add advanced details?")
        .default(false)
        .interact()
    {
        Ok(wanted) => wanted,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            return Ok(AdvancedAnswer::Cancelled);
        }
        Err(err) => return Err(AppError::Input(format!("Failed to read input: {}", err))),
    };

    if !wanted {
        return Ok(AdvancedAnswer::Skipped);
    }

    let mut details = AdvancedDetails::default();
    let slots: [(&str, fn(&mut AdvancedDetails, Option<String>)); 9] = [
        ("Desired customer action", |d, v| d.desired_action = v),
        ("Top objection heard", |d, v| d.top_objection = v),
        ("Customer quote", |d, v| d.customer_quote = v),
        ("Delivery method", |d, v| d.delivery_method = v),
        ("Business model (B2B/B2C)", |d, v| d.business_model = v),
        ("Sales cycle length", |d, v| d.sales_cycle = v),
        ("Competitive edge", |d, v| d.competitive_edge = v),
        ("Fallback rebuttal", |d, v| d.fallback_rebuttal = v),
        ("Conversation style", |d, v| d.conversation_style = v),
    ];

    for (prompt, set) in slots {
        match ask_optional(prompt)? {
            Some(value) => set(&mut details, value),
            None => return Ok(AdvancedAnswer::Cancelled),
        }
    }

    details.comfort_level = match ask_comfort_level()? {
        Some(level) => level,
        None => return Ok(AdvancedAnswer::Cancelled),
    };

    Ok(AdvancedAnswer::Details(details))
}

/// Comfort level on a 0-10 scale; blank leaves it unset.
fn ask_comfort_level() -> Result<Option<Option<u8>>, AppError> {
    loop {
        match ask_optional("Comfort level (0-10)")? {
            None => return Ok(None),
            Some(None) => return Ok(Some(None)),
            Some(Some(raw)) => match raw.trim().parse::<u8>() {
                Ok(level) if level <= 10 => return Ok(Some(Some(level))),
                _ => eprintln!("Enter a number between 0 and 10, or leave blank to skip."),
            },
        }
    }
}
