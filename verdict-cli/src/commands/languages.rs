//! Language listing

use colored::*;
use verdict_core::domain::language::Language;

/// Print the supported languages and their backend ids
pub fn list_languages() {
    println!("{}", "Supported languages:".bold());
    for language in Language::ALL {
        println!(
            "  {} {:<8} {}",
            "▸".cyan(),
            language.as_str(),
            format!("(id {})", language.backend_id()).dimmed()
        );
    }
}
