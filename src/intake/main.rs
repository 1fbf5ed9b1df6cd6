use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use intake::api::{CmdMessage, CmdResult, IntakeApi, MessageLevel};
use intake::auth::{Gate, StaticCredentials};
use intake::config::IntakeConfig;
use intake::error::{IntakeError, Result};
use intake::model::{ContactView, Service, Status};
use intake::store::sqlite::SqliteStore;
use intake::validate::{ContactDraft, ContactEditDraft};
use intake::view::{Page, SortKey, SortOrder, ViewState};
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, NoteCommands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        if let IntakeError::Sql(ref inner) = e {
            log::error!("storage failure: {}", inner);
            eprintln!("Error: something went wrong, please try again later");
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

struct AppContext {
    api: IntakeApi<SqliteStore>,
    gate: Gate,
    config: IntakeConfig,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Submit {
            name,
            email,
            phone,
            service,
            message,
        } => handle_submit(&mut ctx, name, email, phone, service, message),
        Commands::Ref { code } => {
            ctx.gate.remember_referral(&code)?;
            println!("Referral code saved");
            Ok(())
        }
        Commands::Login { email, password } => {
            let check = StaticCredentials {
                email: ctx.config.admin_email.clone(),
                password: ctx.config.admin_password.clone(),
            };
            ctx.gate.login(&check, &email, &password)?;
            println!("{}", "Signed in".green());
            Ok(())
        }
        Commands::Logout => {
            ctx.gate.logout()?;
            println!("Signed out");
            Ok(())
        }
        Commands::List {
            search,
            service,
            status,
            sort,
            asc,
            page,
            per_page,
        } => handle_list(&mut ctx, search, service, status, sort, asc, page, per_page),
        Commands::Show { id } => handle_show(&mut ctx, id),
        Commands::Edit {
            id,
            name,
            email,
            phone,
            service,
            message,
            status,
            referral,
        } => {
            ctx.gate.require_session()?;
            let draft = ContactEditDraft {
                name,
                email,
                phone,
                service,
                message,
                status,
                referral_code: referral,
            };
            let result = ctx.api.edit(&id, &draft)?;
            print_outcome(&ctx, &result)
        }
        Commands::Status { id, status } => {
            ctx.gate.require_session()?;
            let result = ctx.api.set_status(&id, &status)?;
            print_outcome(&ctx, &result)
        }
        Commands::Delete { ids } => {
            ctx.gate.require_session()?;
            let result = ctx.api.delete(&ids)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Note(note) => {
            ctx.gate.require_session()?;
            let result = match note {
                NoteCommands::Add {
                    contact_id,
                    content,
                } => ctx.api.add_note(&contact_id, &content)?,
                NoteCommands::Rm { note_id } => ctx.api.remove_note(&note_id)?,
            };
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Seed { count } => {
            ctx.gate.require_session()?;
            let result = ctx.api.seed(count)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Reset { yes } => {
            ctx.gate.require_session()?;
            if !yes {
                return Err(IntakeError::Api(
                    "Refusing to wipe the store without --yes".to_string(),
                ));
            }
            ctx.api.reset()?;
            println!("Store wiped");
            Ok(())
        }
    }
}

fn data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("INTAKE_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "intake", "intake")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".intake"))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir();
    let config = IntakeConfig::load(&dir)?;
    let store = SqliteStore::open(dir.join("intake.db"))?;
    Ok(AppContext {
        api: IntakeApi::new(store),
        gate: Gate::new(&dir),
        config,
        json: cli.json,
    })
}

fn handle_submit(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    service: String,
    message: String,
) -> Result<()> {
    let draft = ContactDraft {
        name,
        email,
        phone,
        service,
        message,
    };
    let referral = ctx.gate.referral();
    let result = ctx.api.submit(&draft, referral)?;
    print_outcome(ctx, &result)
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    service: Option<String>,
    status: Option<String>,
    sort: String,
    asc: bool,
    page: usize,
    per_page: usize,
) -> Result<()> {
    ctx.gate.require_session()?;

    let mut view = ViewState::default();
    if let Some(term) = search {
        view.set_search(term);
    }
    if let Some(raw) = service {
        let parsed = Service::from_str(&raw).map_err(IntakeError::Api)?;
        view.set_service(Some(parsed));
    }
    if let Some(raw) = status {
        let parsed = Status::from_str(&raw).map_err(IntakeError::Api)?;
        view.set_status(Some(parsed));
    }
    view.sort_by = match sort.as_str() {
        "created" => SortKey::CreatedAt,
        "updated" => SortKey::UpdatedAt,
        other => return Err(IntakeError::Api(format!("Unknown sort key: {}", other))),
    };
    view.sort_order = if asc { SortOrder::Asc } else { SortOrder::Desc };
    view.set_page_size(per_page);
    view.page = page;

    let result = ctx.api.list(&view)?;
    let page = result.page.as_ref().expect("list always returns a page");

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        print_page(page);
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: String) -> Result<()> {
    ctx.gate.require_session()?;
    let result = ctx.api.show(&id)?;

    if ctx.json {
        match &result.contact {
            Some(view) => println!("{}", serde_json::to_string_pretty(view)?),
            None => println!("{}", serde_json::json!({ "error": "not found" })),
        }
        return Ok(());
    }

    match &result.contact {
        Some(view) => print_contact(view),
        None => print_messages(&result.messages),
    }
    Ok(())
}

/// Render a create/edit outcome: field errors per field, or the success
/// marker. In JSON mode this emits the wire shapes
/// `{"success":true}` / `{"error":{field:[messages]}}`.
fn print_outcome(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        match &result.field_errors {
            Some(errors) => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "error": errors }))?
            ),
            None => println!("{}", serde_json::json!({ "success": true })),
        }
        return Ok(());
    }

    if let Some(errors) = &result.field_errors {
        for (field, messages) in errors.fields() {
            for message in messages {
                println!("{} {}", format!("{}:", field).red().bold(), message.red());
            }
        }
        return Ok(());
    }

    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_COL: usize = 22;
const EMAIL_COL: usize = 28;
const TIME_COL: usize = 14;

fn print_page(page: &Page) {
    if page.items.is_empty() {
        println!("No contacts found.");
        return;
    }

    for contact in &page.items {
        let id = format!("#{:<5}", contact.id);
        let name = pad_to_width(&contact.name, NAME_COL);
        let email = pad_to_width(&contact.email, EMAIL_COL);
        let status = status_badge(contact.status);
        let service = format!("{:<15}", contact.service.as_str());
        let created = format_time_ago(contact.created_at);
        let updated = format_time_ago(contact.updated_at);

        println!(
            "{} {} {} {} {} {} {}",
            id.dimmed(),
            name,
            email.dimmed(),
            status,
            service,
            created.dimmed(),
            updated.dimmed()
        );
    }

    let shown_from = page.start_index + 1;
    let shown_to = page.start_index + page.items.len();
    println!(
        "{}",
        format!(
            "Showing {} to {} of {} results (page {} of {})",
            shown_from,
            shown_to,
            page.filtered_count,
            page.page,
            page.page_count.max(1)
        )
        .dimmed()
    );
}

fn print_contact(view: &ContactView) {
    let contact = &view.contact;
    println!(
        "{} {}",
        format!("#{}", contact.id).yellow(),
        contact.name.bold()
    );
    println!("--------------------------------");
    println!("Email:    {}", contact.email);
    println!("Phone:    {}", contact.phone);
    println!("Service:  {}", contact.service);
    println!("Status:   {}", status_badge(contact.status));
    if let Some(code) = &contact.referral_code {
        println!("Referral: {}", code);
    }
    println!("Created:  {}", format_time_ago(contact.created_at).trim());
    println!("Updated:  {}", format_time_ago(contact.updated_at).trim());
    println!();
    println!("{}", contact.message);

    println!();
    println!("{}", format!("Notes ({})", view.notes.len()).bold());
    let mut notes = view.notes.clone();
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for note in &notes {
        println!(
            "  {} {} {}",
            format!("n{}", note.id).yellow(),
            format_time_ago(note.created_at).trim().dimmed(),
            note.content
        );
    }
}

fn status_badge(status: Status) -> ColoredString {
    let label = format!("{:<10}", status.as_str());
    match status {
        Status::New => label.yellow(),
        Status::Todo => label.cyan(),
        Status::Inprogress => label.blue(),
        Status::Completed => label.green(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_COL)
}
