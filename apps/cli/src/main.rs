//! # Butik Console Application
//!
//! The interactive menu controller: everything here is console glue over
//! butik-core and butik-store.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Session Flow                                  │
//! │                                                                     │
//! │  startup ──► load store ──► seed stock customers                    │
//! │                   │                                                 │
//! │                   ▼                                                 │
//! │  ┌──────── Main menu ────────┐                                      │
//! │  │ 1 Register  2 Log in      │◄──────────────┐                      │
//! │  │ 3 Exit (save once, quit)  │               │                      │
//! │  └────────────┬──────────────┘               │                      │
//! │               ▼                              │                      │
//! │  ┌────── Customer menu ──────┐               │                      │
//! │  │ 1 Shop      2 View cart   │── checkout ───┤                      │
//! │  │ 3 Checkout  4 Log out     │── log out ────┘                      │
//! │  └───────────────────────────┘                                      │
//! │                                                                     │
//! │  • Single thread, blocking stdin reads, no timeouts                 │
//! │  • The registry is saved exactly once, on the explicit exit action  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod menu;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use butik_core::{convert, default_catalog, Customer, CustomerRegistry, CustomerTier};
use butik_store::CustomerStore;

use crate::menu::{CustomerChoice, MainChoice};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let store = CustomerStore::new(store_path());
    // Load must complete before any menu interaction begins
    let mut registry = store.load()?;
    seed_stock_customers(&mut registry);
    info!(count = registry.len(), path = %store.path().display(), "Registry ready");

    loop {
        println!("Välkommen till min smink butik!");
        println!("1. Registrera ny kund");
        println!("2. Logga in");
        println!("3. Avsluta");

        // EOF on stdin ends the session without a save, like any other
        // abnormal termination
        let Some(choice) = read_line()? else {
            return Ok(());
        };

        match menu::parse_main_choice(&choice) {
            Some(MainChoice::Register) => register_customer(&mut registry)?,
            Some(MainChoice::Login) => {
                if let Some(name) = login(&mut registry)? {
                    customer_menu(&mut registry, &name)?;
                }
            }
            Some(MainChoice::Exit) => {
                if let Err(err) = store.save(&registry) {
                    error!(%err, "Could not save customer store");
                    eprintln!("Kunde inte spara kundregistret: {err}");
                    return Err(err.into());
                }
                return Ok(());
            }
            None => {} // unrecognized input: show the menu again
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (store load/save details)
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // Keep log lines off the interactive stdout
        .with_writer(io::stderr)
        .init();
}

/// Determines the customer store path.
///
/// `BUTIK_STORE_PATH` overrides the default `customers.txt` in the
/// working directory.
fn store_path() -> PathBuf {
    match env::var("BUTIK_STORE_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("customers.txt"),
    }
}

/// Adds the three stock customers unless their names are already taken.
///
/// Seeding is idempotent across runs so the store does not accumulate
/// duplicate stock entries.
fn seed_stock_customers(registry: &mut CustomerRegistry) {
    for (name, password, tier) in [
        ("Knatte", "123", CustomerTier::Gold),
        ("Fnatte", "321", CustomerTier::Silver),
        ("Tjatte", "213", CustomerTier::Bronze),
    ] {
        if !registry.contains(name) {
            registry.add(Customer::new(name, password, tier));
        }
    }
}

/// Registration: name, password, tier choice (invalid tier → Bronze with
/// a warning). Duplicate names are permitted; the first match wins on
/// login.
fn register_customer(registry: &mut CustomerRegistry) -> io::Result<()> {
    let Some(name) = prompt("Ange namn: ")? else {
        return Ok(());
    };
    let Some(password) = prompt("Ange lösenord: ")? else {
        return Ok(());
    };

    println!("Välj kundnivå: 1. Gold, 2. Silver, 3. Bronze");
    let choice = read_line()?.unwrap_or_default();
    let tier = menu::tier_for_choice(&choice).unwrap_or_else(|| {
        println!("Felaktigt val, sätter kundnivå till Bronze.");
        CustomerTier::Bronze
    });

    let customer = Customer::new(name, password, tier);
    println!(
        "Kund {} registrerad som {}!",
        customer.name(),
        customer.tier().tag()
    );
    info!(name = customer.name(), tier = %customer.tier(), "Registered customer");
    registry.add(customer);
    Ok(())
}

/// Login: first match by name wins. An unknown name offers inline
/// registration; a wrong password is a soft failure back to the main
/// menu. Returns the logged-in customer name on success.
fn login(registry: &mut CustomerRegistry) -> io::Result<Option<String>> {
    let Some(name) = prompt("Ange namn: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt("Ange lösenord: ")? else {
        return Ok(None);
    };

    let Some(customer) = registry.find(&name) else {
        println!("Kunden finns inte. Vill du registrera en ny kund? (j/n)");
        if let Some(answer) = read_line()? {
            if answer.trim().eq_ignore_ascii_case("j") {
                register_customer(registry)?;
            }
        }
        return Ok(None);
    };

    if !customer.verify_password(&password) {
        println!("Fel lösenord, försök igen.");
        return Ok(None);
    }

    println!("Välkommen {}!", customer.name());
    Ok(Some(name))
}

/// The post-login menu loop for one customer.
fn customer_menu(registry: &mut CustomerRegistry, name: &str) -> io::Result<()> {
    loop {
        println!("1. Handla");
        println!("2. Se kundvagn");
        println!("3. Gå till kassan");
        println!("4. Logga ut");

        let Some(choice) = read_line()? else {
            return Ok(());
        };
        let Some(customer) = registry.find_mut(name) else {
            return Ok(());
        };

        match menu::parse_customer_choice(&choice) {
            Some(CustomerChoice::Shop) => shop(customer)?,
            Some(CustomerChoice::ViewCart) => println!("{}", customer.summary()),
            Some(CustomerChoice::Checkout) => {
                checkout(customer)?;
                return Ok(());
            }
            Some(CustomerChoice::Logout) => return Ok(()),
            None => {} // unrecognized input: show the menu again
        }
    }
}

/// Lists the fixed catalog and adds the chosen product to the cart.
fn shop(customer: &mut Customer) -> io::Result<()> {
    let catalog = default_catalog();

    println!("Tillgängliga produkter:");
    for (index, product) in catalog.iter().enumerate() {
        println!("{}. {}", index + 1, product);
    }

    let Some(choice) = prompt("Välj en produkt att lägga till i kundvagnen: ")? else {
        return Ok(());
    };
    match menu::product_index(&choice, catalog.len()) {
        Some(index) => {
            let product = catalog[index].clone();
            println!("{} tillagd i kundvagnen.", product.name);
            customer.add_to_cart(product);
        }
        None => println!("Felaktigt val."),
    }
    Ok(())
}

/// Checkout: choose a display currency and print the converted
/// discounted total. Display-only; the cart stays as-is for the rest of
/// the session and nothing is persisted here.
fn checkout(customer: &Customer) -> io::Result<()> {
    println!("Välj valuta: 1. SEK, 2. USD, 3. EUR");
    let choice = read_line()?.unwrap_or_default();
    let currency = menu::currency_for_choice(&choice);

    let total = convert(customer.total_cart_price(), currency);
    println!("Totalpris i {currency}: {total} {currency}");
    Ok(())
}

/// Reads one line from stdin, stripping the trailing newline only (a
/// password may legitimately contain leading or trailing spaces).
///
/// Returns `None` on end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prints a prompt label without a newline, then reads the answer.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line()
}

// =============================================================================
// Unit Tests
// =============================================================================
