use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamehub_catalog::{CosmicClient, CredentialSource, Credentials, Game, ObjectQuery};

use super::fetch_spinner;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        let head: String = s.chars().take(2).collect();
        format!("{}****", head)
    }
}

/// Show current credentials and their sources.
pub(crate) fn run_config_show() {
    let path = gamehub_catalog::config_path();
    let sources = gamehub_catalog::credential_sources();

    println!(
        "{}",
        "Cosmic Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    // Config file status
    match &path {
        Some(p) if p.exists() => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            println!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            println!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    println!();

    // Resolve values per-field (Credentials::load() would fail if required fields are missing)
    let creds = Credentials::load().ok();

    let get_value =
        |source: &CredentialSource, from_creds: Option<String>, is_secret: bool| -> Option<String> {
            match source {
                CredentialSource::Missing => None,
                CredentialSource::EnvVar(var) => {
                    let v = std::env::var(var).ok()?;
                    Some(if is_secret { mask_value(&v) } else { v })
                }
                CredentialSource::ConfigFile => {
                    from_creds.map(|v| if is_secret { mask_value(&v) } else { v })
                }
            }
        };

    let fields: &[(&str, &CredentialSource, Option<String>)] = &[
        (
            "bucket_slug",
            &sources.bucket_slug,
            get_value(
                &sources.bucket_slug,
                creds.as_ref().map(|c| c.bucket_slug.clone()),
                false,
            ),
        ),
        (
            "read_key",
            &sources.read_key,
            get_value(
                &sources.read_key,
                creds.as_ref().map(|c| c.read_key.clone()),
                true,
            ),
        ),
        (
            "write_key",
            &sources.write_key,
            get_value(
                &sources.write_key,
                creds.as_ref().and_then(|c| c.write_key.clone()),
                true,
            ),
        ),
    ];

    for (name, source, value) in fields {
        let source_str = format!("({})", source);
        match value {
            Some(v) => {
                println!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    v,
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            None => {
                println!(
                    "  {} {} {}",
                    format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
                    "not set".if_supports_color(Stdout, |t| t.yellow()),
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }
}

/// Interactively set up credentials.
pub(crate) fn run_config_setup() {
    println!(
        "{}",
        "Cosmic Credential Setup".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    // Load existing config as defaults
    let existing = Credentials::load().ok();

    let read_line = |prompt: &str, default: Option<&str>, required: bool| -> Option<String> {
        loop {
            if let Some(def) = default {
                print!("  {} [{}]: ", prompt, def);
            } else {
                print!("  {}: ", prompt);
            }
            std::io::stdout().flush().unwrap();

            let mut input = String::new();
            std::io::stdin().read_line(&mut input).unwrap();
            let trimmed = input.trim().to_string();

            if trimmed.is_empty() {
                if let Some(def) = default {
                    return Some(def.to_string());
                }
                if required {
                    println!(
                        "    {}",
                        "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
                    );
                    continue;
                }
                return None;
            }
            return Some(trimmed);
        }
    };

    println!(
        "  {}",
        "Bucket credentials (required):".if_supports_color(Stdout, |t| t.dimmed()),
    );
    let bucket_slug = read_line(
        "bucket_slug",
        existing.as_ref().map(|c| c.bucket_slug.as_str()),
        true,
    )
    .unwrap();
    let read_key = read_line(
        "read_key",
        existing.as_ref().map(|c| c.read_key.as_str()),
        true,
    )
    .unwrap();

    println!();
    println!(
        "  {}",
        "Write key (optional, press Enter to skip):".if_supports_color(Stdout, |t| t.dimmed()),
    );
    let write_key = read_line(
        "write_key",
        existing.as_ref().and_then(|c| c.write_key.as_deref()),
        false,
    );

    let creds = Credentials {
        bucket_slug,
        read_key,
        write_key,
    };

    match gamehub_catalog::save_to_file(&creds) {
        Ok(path) => {
            println!();
            println!(
                "{} Credentials saved to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        Err(e) => {
            eprintln!();
            eprintln!(
                "{} Failed to save credentials: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}

/// Test credentials against the Cosmic API.
pub(crate) fn run_config_test(quiet: bool) {
    let creds = match Credentials::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{} Failed to load credentials: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            eprintln!();
            eprintln!("Run 'gamehub config setup' to configure credentials.");
            return;
        }
    };

    println!("Testing credentials against the Cosmic API...");

    let bucket = creds.bucket_slug.clone();
    let client = match CosmicClient::new(creds) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{} Failed to build HTTP client: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return;
        }
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let pb = fetch_spinner(quiet, "Connecting...");

        // A one-object probe; the page envelope still reports the full count.
        let query = ObjectQuery::new("games").limit(1);
        match client.find::<Game>(query).await {
            Ok(page) => {
                pb.finish_and_clear();
                println!(
                    "{} Credentials are valid!",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                );
                println!();
                println!("  Bucket: {}", bucket);
                println!("  Games:  {}", page.total);
            }
            // An empty bucket 404s; the credentials still reached it.
            Err(e) if e.is_not_found() => {
                pb.finish_and_clear();
                println!(
                    "{} Credentials are valid!",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                );
                println!();
                println!("  Bucket: {}", bucket);
                println!("  Games:  0");
            }
            Err(e) => {
                pb.finish_and_clear();
                eprintln!(
                    "{} Credential validation failed: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                );
            }
        }
    });
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    match gamehub_catalog::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Could not determine config directory");
            std::process::exit(1);
        }
    }
}
