//! Command implementations. Output goes to stdout; diagnostics go through
//! tracing.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use futures::future::join_all;
use tracing::{info, warn};

use hospitality_core::ai::AiClient;
use hospitality_core::auth::{self, CredentialStore};
use hospitality_core::board::{tasks_by_status, upcoming_events};
use hospitality_core::hotel::{folio_balance, occupancy_rate, vip_residents};
use hospitality_core::models::{HousekeepingStatus, Shift, TaskStatus};
use hospitality_core::payroll::{payroll_totals, PayPeriod};
use hospitality_core::pos::{kitchen_queue, outstanding, revenue};
use hospitality_core::procurement::SuggestionReason;
use hospitality_core::sector::business_ids_for_sector;
use hospitality_core::store::Collection;
use hospitality_core::utils::{format_currency, format_hours, format_percent, truncate_string};
use hospitality_core::{Config, SectorView, Workspace};

use crate::args::Command;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_workspace(config: &Config) -> Result<Workspace> {
    Workspace::open(config.data_dir()?)
}

/// Explicit sector, else the configured default.
fn resolve_sector(ws: &Workspace, config: &Config, sector: Option<String>) -> Result<String> {
    let sector = sector
        .or_else(|| config.active_sector.clone())
        .ok_or_else(|| anyhow!("No sector selected. Pass one or run `hospitality use <sector>`."))?;
    if ws.data.sector(&sector).is_none() {
        bail!("Unknown sector: {}", sector);
    }
    Ok(sector)
}

fn ai_client(config: &Config) -> Result<AiClient> {
    let key = auth::resolve_ai_key().ok_or_else(|| {
        anyhow!(
            "No AI key. Set {} or run `hospitality set-key`.",
            auth::AI_KEY_ENV
        )
    })?;
    Ok(AiClient::new(&config.ai)?.with_key(key))
}

pub async fn run(command: Command, mut config: Config) -> Result<()> {
    match command {
        Command::InitDemo => init_demo(&config),
        Command::Status => status(&config),
        Command::Sectors => sectors(&config),
        Command::Use { sector } => {
            let ws = open_workspace(&config)?;
            let sector = resolve_sector(&ws, &config, Some(sector))?;
            config.active_sector = Some(sector.clone());
            config.save()?;
            println!("Active sector: {}", sector);
            Ok(())
        }
        Command::Sector { sector } => sector_summary(&config, sector),
        Command::Payroll { sector, from, to } => payroll(&config, sector, from, to),
        Command::Procurement { sector, accept } => procurement(&config, sector, accept),
        Command::Kitchen { sector } => kitchen(&config, sector),
        Command::Board { sector } => board(&config, sector),
        Command::Hotel { sector } => hotel(&config, sector),
        Command::Agenda { topic } => agenda(&config, &topic.join(" ")).await,
        Command::Insights { file } => insights(&config, &file).await,
        Command::SuggestShifts { sector, week, apply } => {
            suggest_shifts(&config, sector, week, apply).await
        }
        Command::SetKey => set_key(),
        Command::ClearKey => {
            CredentialStore::delete_ai_key()?;
            println!("AI key removed from the system keychain.");
            Ok(())
        }
    }
}

fn init_demo(config: &Config) -> Result<()> {
    let mut ws = open_workspace(config)?;
    ws.seed_demo(today())?;
    println!(
        "Demo data written to {} ({} sectors, {} businesses)",
        ws.store().data_dir().display(),
        ws.data.sectors.len(),
        ws.data.businesses.len()
    );
    Ok(())
}

fn status(config: &Config) -> Result<()> {
    let ws = open_workspace(config)?;
    println!("Data directory: {}", ws.store().data_dir().display());
    if let Some(ref sector) = config.active_sector {
        println!("Active sector:  {}", sector);
    }
    println!();
    for (collection, age) in ws.store().saved_ages() {
        println!(
            "{:<14} {:>6}  {}",
            collection.key(),
            ws.data.len_of(collection),
            age.unwrap_or_else(|| "never".to_string())
        );
    }
    Ok(())
}

fn sectors(config: &Config) -> Result<()> {
    let ws = open_workspace(config)?;
    if ws.data.sectors.is_empty() {
        println!("No sectors. Run `hospitality init-demo` to load demo data.");
        return Ok(());
    }
    for sector in &ws.data.sectors {
        let marker = if config.active_sector.as_deref() == Some(sector.id.as_str()) { "*" } else { " " };
        println!("{} {} - {} ({})", marker, sector.id, sector.name, sector.kind);
        let ids = business_ids_for_sector(&ws.data.businesses, &sector.id);
        for business in ws.data.businesses.iter().filter(|b| ids.contains(&b.id)) {
            println!("    {} - {}", business.id, business.name);
        }
    }
    Ok(())
}

fn load_view(config: &Config, sector: Option<String>) -> Result<(Workspace, SectorView)> {
    let ws = open_workspace(config)?;
    let sector = resolve_sector(&ws, config, sector)?;
    let view = ws.sector_view(&sector);
    Ok((ws, view))
}

fn sector_summary(config: &Config, sector: Option<String>) -> Result<()> {
    let (ws, view) = load_view(config, sector)?;
    let today = today();
    let name = ws
        .data
        .sector(&view.sector_id)
        .map(|s| s.name.clone())
        .unwrap_or_default();

    println!("{} ({})", name, view.sector_id);
    println!("  Businesses:     {}", view.business_ids.len());
    println!("  Team:           {}", view.members.len());
    println!("  Shifts:         {}", view.shifts.len());
    println!(
        "  Open tasks:     {}",
        view.tasks.iter().filter(|t| t.status != TaskStatus::Done).count()
    );
    println!("  Overdue tasks:  {}", view.tasks.iter().filter(|t| t.is_overdue(today)).count());
    println!("  Events ahead:   {}", upcoming_events(&view.events, today).len());
    println!("  Kitchen queue:  {}", kitchen_queue(&view.orders).len());
    println!("  Revenue (paid): {}", format_currency(revenue(&view.orders)));
    println!("  Open tabs:      {}", format_currency(outstanding(&view.orders)));
    if !view.rooms.is_empty() {
        println!("  Occupancy:      {}", format_percent(occupancy_rate(&view.rooms)));
    }
    Ok(())
}

fn payroll(
    config: &Config,
    sector: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let (_ws, view) = load_view(config, sector)?;
    let period = match (from, to) {
        (None, None) => None,
        (from, to) => {
            let start = from.unwrap_or(NaiveDate::MIN);
            let end = to.unwrap_or(NaiveDate::MAX);
            if start > end {
                bail!("--from must not be after --to");
            }
            Some(PayPeriod::new(start, end))
        }
    };

    let records = view.payroll(period.as_ref());
    println!(
        "{:<22} {:>8} {:>8} {:>8} {:>12} {:>12} {:>12}",
        "Member", "Hours", "Std", "OT", "Gross", "Deductions", "Net"
    );
    for r in &records {
        println!(
            "{:<22} {:>8} {:>8} {:>8} {:>12} {:>12} {:>12}",
            truncate_string(&r.member_name, 22),
            format_hours(r.total_hours),
            format_hours(r.standard_hours),
            format_hours(r.overtime_hours),
            format_currency(r.gross_pay),
            format_currency(r.deductions),
            format_currency(r.net_pay),
        );
    }
    let totals = payroll_totals(&records);
    println!(
        "{:<22} {:>8} {:>8} {:>8} {:>12} {:>12} {:>12}",
        "TOTAL",
        format_hours(totals.hours),
        "",
        format_hours(totals.overtime_hours),
        format_currency(totals.gross_pay),
        format_currency(totals.deductions),
        format_currency(totals.net_pay),
    );
    Ok(())
}

fn procurement(config: &Config, sector: Option<String>, accept: bool) -> Result<()> {
    let mut ws = open_workspace(config)?;
    let sector = resolve_sector(&ws, config, sector)?;
    let today = today();
    let suggestions = ws.procurement_suggestions(&sector, today, &config.procurement);

    if suggestions.is_empty() {
        println!("Nothing to reorder.");
        return Ok(());
    }

    for s in &suggestions {
        let why = match &s.reason {
            SuggestionReason::LowStock => "low stock".to_string(),
            SuggestionReason::UpcomingEvent { event_name } => format!("upcoming: {}", event_name),
        };
        println!("{} / {} ({})", s.context, s.supplier, why);
        for line in &s.lines {
            println!("    {:>4} {:<8} {}", line.quantity, line.unit, line.name);
        }
    }

    if accept {
        let count = suggestions.len();
        for s in suggestions {
            let order = ws.accept_suggestion(s, today)?;
            info!(order = %order.id, supplier = %order.supplier, "Procurement order placed");
            println!(
                "Ordered {} unit(s) from {} for {}",
                order.total_units(),
                order.supplier,
                order.context
            );
        }
        println!("Placed {} order(s).", count);
    }
    Ok(())
}

fn kitchen(config: &Config, sector: Option<String>) -> Result<()> {
    let (_ws, view) = load_view(config, sector)?;
    let queue = kitchen_queue(&view.orders);
    if queue.is_empty() {
        println!("Kitchen is clear.");
        return Ok(());
    }
    for order in queue {
        let table = order.table.as_deref().unwrap_or("-");
        println!(
            "[{}] table {:<4} {:<10} {}",
            order.created_at.with_timezone(&Local).format("%H:%M"),
            table,
            order.status.to_string(),
            order.context
        );
        for item in &order.items {
            println!("      {} x {}", item.quantity, item.name);
        }
    }
    Ok(())
}

fn board(config: &Config, sector: Option<String>) -> Result<()> {
    let (ws, view) = load_view(config, sector)?;
    let today = today();
    for (status, tasks) in tasks_by_status(&view.tasks) {
        println!("== {} ({})", status, tasks.len());
        for t in tasks {
            let who = t
                .assignee_id
                .as_deref()
                .and_then(|id| ws.data.member(id))
                .map(|m| m.name.as_str())
                .unwrap_or("unassigned");
            let overdue = if t.is_overdue(today) { " OVERDUE" } else { "" };
            println!("   {:?} {} [{}]{}", t.priority, t.title, who, overdue);
        }
    }
    Ok(())
}

fn hotel(config: &Config, sector: Option<String>) -> Result<()> {
    let (_ws, view) = load_view(config, sector)?;
    if view.rooms.is_empty() {
        println!("No rooms in this sector.");
        return Ok(());
    }
    println!("Occupancy {}", format_percent(occupancy_rate(&view.rooms)));
    for room in &view.rooms {
        println!(
            "  {:<5} {:<10} {:<12} {}",
            room.number,
            room.room_type,
            room.status.to_string(),
            format_currency(room.nightly_rate)
        );
    }

    let vips = vip_residents(&view.bookings);
    if !vips.is_empty() {
        println!("VIP residents:");
        for b in vips {
            println!(
                "  {} (until {}, balance {})",
                b.guest_name,
                b.check_out,
                format_currency(folio_balance(&view.ledger, &b.id))
            );
        }
    }

    let open: Vec<_> = view
        .housekeeping
        .iter()
        .filter(|t| t.status != HousekeepingStatus::Done)
        .collect();
    if !open.is_empty() {
        println!("Housekeeping:");
        for t in open {
            println!("  room {} {:?}", t.room_id, t.status);
        }
    }
    Ok(())
}

async fn agenda(config: &Config, topic: &str) -> Result<()> {
    let client = ai_client(config)?;
    let attendees = match config.active_sector.as_deref() {
        Some(sector) => {
            let ws = open_workspace(config)?;
            ws.sector_view(sector).members
        }
        None => Vec::new(),
    };

    match client.meeting_agenda(topic, &attendees).await {
        Some(agenda) => {
            println!("{}", agenda.title);
            if !agenda.objective.is_empty() {
                println!("{}", agenda.objective);
            }
            for item in &agenda.items {
                let owner = item.owner.as_deref().unwrap_or("");
                println!("  {:>3} min  {}  {}", item.duration_minutes, item.topic, owner);
            }
            println!("Total: {} min", agenda.total_minutes());
        }
        None => println!("Agenda pending - the AI service produced nothing."),
    }
    Ok(())
}

async fn insights(config: &Config, file: &std::path::Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read posts from {}", file.display()))?;
    let posts: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if posts.is_empty() {
        bail!("{} has no posts", file.display());
    }

    let client = ai_client(config)?;
    match client.social_insights(&posts).await {
        Some(insights) => {
            println!("Sentiment: {:?}", insights.sentiment);
            println!("{}", insights.summary);
            if !insights.themes.is_empty() {
                println!("Themes: {}", insights.themes.join(", "));
            }
            for rec in &insights.recommendations {
                println!("  - {}", rec);
            }
        }
        None => println!("Insights pending - the AI service produced nothing."),
    }
    Ok(())
}

/// Monday of the week after `today`.
fn next_week_start(today: NaiveDate) -> NaiveDate {
    let days_to_monday = 7 - i64::from(today.weekday().num_days_from_monday());
    today + Duration::days(days_to_monday)
}

async fn suggest_shifts(
    config: &Config,
    sector: Option<String>,
    week: Option<NaiveDate>,
    apply: bool,
) -> Result<()> {
    let mut ws = open_workspace(config)?;
    let sector = resolve_sector(&ws, config, sector)?;
    let view = ws.sector_view(&sector);
    let week_start = week.unwrap_or_else(|| next_week_start(today()));
    let client = ai_client(config)?;

    // One request per business, run concurrently.
    let requests = view.business_ids.iter().map(|business| {
        let members: Vec<_> = view
            .members
            .iter()
            .filter(|m| &m.context == business)
            .cloned()
            .collect();
        let events: Vec<_> = view
            .events
            .iter()
            .filter(|e| &e.context == business)
            .cloned()
            .collect();
        let client = client.clone();
        async move {
            let suggestions = if members.is_empty() {
                Vec::new()
            } else {
                client.shift_suggestions(&members, &events, week_start).await
            };
            (business.clone(), suggestions)
        }
    });
    let results = join_all(requests).await;

    let mut planned: Vec<Shift> = Vec::new();
    for (business, suggestions) in results {
        println!("== {} ({} shifts)", business, suggestions.len());
        for s in &suggestions {
            println!(
                "   {} {} {}-{} {}",
                s.date,
                s.member_id,
                s.start_time,
                s.end_time,
                s.reason.as_deref().unwrap_or("")
            );
            match s.to_shift(&business) {
                Some(shift) => planned.push(shift),
                None => warn!(member = %s.member_id, "Skipping suggestion with unreadable times"),
            }
        }
    }

    if apply && !planned.is_empty() {
        let planned_count = planned.len();
        let added = ws.add_shifts(planned)?;
        println!(
            "Added {} shift(s) to the schedule ({} already scheduled).",
            added,
            planned_count - added
        );
        info!(added, collection = Collection::Shifts.key(), "Shift suggestions applied");
    }
    Ok(())
}

fn set_key() -> Result<()> {
    let key = rpassword::prompt_password("AI service key: ")?;
    let key = key.trim();
    if key.is_empty() {
        bail!("Empty key, nothing stored");
    }
    CredentialStore::store_ai_key(key)?;
    println!("Key stored in the system keychain.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_week_start_is_following_monday() {
        // 2026-10-16 is a Friday
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(next_week_start(friday), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(next_week_start(monday), NaiveDate::from_ymd_opt(2026, 10, 26).unwrap());
    }

    #[test]
    fn test_resolve_sector_prefers_argument() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ws = Workspace::open(dir.path().to_path_buf()).expect("open");
        ws.seed_demo(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()).expect("seed");
        let config = Config {
            active_sector: Some("hotel".to_string()),
            ..Config::default()
        };

        assert_eq!(resolve_sector(&ws, &config, None).unwrap(), "hotel");
        assert_eq!(
            resolve_sector(&ws, &config, Some("restaurants".to_string())).unwrap(),
            "restaurants"
        );
        assert!(resolve_sector(&ws, &config, Some("nowhere".to_string())).is_err());
        assert!(resolve_sector(&ws, &Config::default(), None).is_err());
    }
}
