//! Interactive menu over the catalog and crafting services.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use crate::catalog::CatalogService;
use crate::crafting::find_craftable;
use crate::models::IngredientKey;

/// Runs the menu loop until the user exits or stdin closes.
pub fn run(catalog: &CatalogService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Wizard World Potion Crafter!");

    loop {
        print_menu()?;

        let choice = match next_line(&mut lines)? {
            Some(line) => line,
            None => break,
        };

        match choice.trim() {
            "1" => list_ingredients(catalog),
            "2" => list_elixirs(catalog),
            "3" => find_craftable_elixirs(catalog, &mut lines)?,
            "4" => {
                println!("Exiting Potion Crafter. Goodbye!");
                break;
            }
            other => println!("Invalid choice '{}'. Please enter a number between 1 and 4.", other),
        }
    }

    Ok(())
}

fn print_menu() -> io::Result<()> {
    println!("\n--- Menu ---");
    println!("1. List All Ingredients");
    println!("2. List All Elixirs");
    println!("3. Find Craftable Elixirs by Ingredients");
    println!("4. Exit");
    print!("Enter your choice: ");
    io::stdout().flush()
}

fn next_line<I>(lines: &mut I) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines.next().transpose()
}

fn list_ingredients(catalog: &CatalogService) {
    println!("\n--- All Ingredients ---");

    match catalog.list_ingredients() {
        Ok(ingredients) if ingredients.is_empty() => println!("No ingredients found."),
        Ok(ingredients) => {
            println!("Found {} ingredients:", ingredients.len());
            for ingredient in &ingredients {
                println!("{}", ingredient);
            }
        }
        Err(e) => {
            log::error!("Failed to list ingredients: {}", e);
            eprintln!("Error: {}", e);
        }
    }
}

fn list_elixirs(catalog: &CatalogService) {
    println!("\n--- All Elixirs ---");

    match catalog.list_elixirs() {
        Ok(elixirs) if elixirs.is_empty() => println!("No elixirs found."),
        Ok(elixirs) => {
            println!("Found {} elixirs:", elixirs.len());
            for elixir in &elixirs {
                println!("{}", elixir);
            }
        }
        Err(e) => {
            log::error!("Failed to list elixirs: {}", e);
            eprintln!("Error: {}", e);
        }
    }
}

fn find_craftable_elixirs<I>(catalog: &CatalogService, lines: &mut I) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let available = read_available_ingredients(catalog, lines)?;
    if available.is_empty() {
        return Ok(());
    }

    match find_craftable(catalog, &available) {
        Ok(craftable) if craftable.is_empty() => println!("\n--- No elixirs found. ---"),
        Ok(craftable) => {
            println!("\n--- Craftable Elixirs ---");
            for elixir in &craftable {
                println!("{}", elixir);
            }
        }
        Err(e) => {
            log::error!("Craftability query failed: {}", e);
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

/// Reads one comma-separated line of ingredient names. Entries are
/// trimmed, deduplicated case-insensitively and validated against the
/// catalog; any empty or unknown entry aborts with an empty set.
fn read_available_ingredients<I>(
    catalog: &CatalogService,
    lines: &mut I,
) -> io::Result<HashSet<IngredientKey>>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("\n--- Enter Available Ingredients ---");
    println!("Enter the ingredients you have, separated by commas.");
    print!("Your ingredients: ");
    io::stdout().flush()?;

    let line = match next_line(lines)? {
        Some(line) => line,
        None => return Ok(HashSet::new()),
    };

    if line.trim().is_empty() {
        eprintln!("No ingredients entered.");
        return Ok(HashSet::new());
    }

    let entries = match parse_ingredient_entries(&line) {
        Some(entries) => entries,
        None => {
            eprintln!("Empty ingredient name found.");
            return Ok(HashSet::new());
        }
    };

    let mut available = HashSet::new();

    for entry in &entries {
        match catalog.ingredient_exists(entry) {
            Ok(true) => {
                available.insert(IngredientKey::new(entry));
            }
            Ok(false) => {
                eprintln!("Invalid ingredient name: {}", entry);
                return Ok(HashSet::new());
            }
            Err(e) => {
                log::error!("Failed to validate ingredient '{}': {}", entry, e);
                eprintln!("Error: {}", e);
                return Ok(HashSet::new());
            }
        }
    }

    Ok(available)
}

/// Splits a comma-separated line into trimmed entries, deduplicated
/// case-insensitively while keeping the first spelling. Returns `None`
/// when any entry is empty.
fn parse_ingredient_entries(line: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for entry in line.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        if seen.insert(IngredientKey::new(entry)) {
            entries.push(entry.to_string());
        }
    }

    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::parse_ingredient_entries;

    #[test]
    fn entries_are_trimmed_and_deduplicated_case_insensitively() {
        let entries =
            parse_ingredient_entries(" Unicorn Hair , wolfsbane, UNICORN HAIR ,Moonstone").unwrap();

        assert_eq!(entries, vec!["Unicorn Hair", "wolfsbane", "Moonstone"]);
    }

    #[test]
    fn empty_entry_aborts_parsing() {
        assert!(parse_ingredient_entries("Unicorn Hair,,Wolfsbane").is_none());
        assert!(parse_ingredient_entries("Unicorn Hair, ").is_none());
    }

    #[test]
    fn single_entry_round_trips() {
        let entries = parse_ingredient_entries("Moonstone").unwrap();
        assert_eq!(entries, vec!["Moonstone"]);
    }
}
