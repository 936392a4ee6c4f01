use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::date::parse_period;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        notes: full_notes,
    } = cmd
    {
        let db = LogsDatabase::open(&cfg.database)?;

        let bounds = match period {
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p)?),
            None => None,
        };

        let events: Vec<Event> = db
            .get_all()?
            .into_iter()
            .filter(|ev| match bounds {
                Some((start, end)) => {
                    let d = ev.date().date();
                    d >= start && d <= end
                }
                None => true,
            })
            .collect();

        if events.is_empty() {
            println!("No logs recorded.");
            return Ok(());
        }

        let show_notes = if *full_notes {
            "Full"
        } else {
            cfg.show_notes.as_str()
        };

        println!("📋 Recorded logs:\n");

        let mut table = Table::new(&["ID", "Date", "Time", "Title", "Notes"]);
        for ev in &events {
            let notes = match show_notes {
                "None" => String::new(),
                "Full" => ev.description.clone(),
                _ => truncate(&ev.description, 40),
            };
            table.add_row(vec![
                ev.id().map(|i| i.to_string()).unwrap_or_default(),
                ev.date_part(),
                ev.time_part(),
                ev.name.clone(),
                notes,
            ]);
        }
        print!("{}", table.render());

        let sep_ch = cfg.separator_char.chars().next().unwrap_or('-');
        println!("{}", sep_ch.to_string().repeat(20));
        println!("Total: {} log(s)", events.len());
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
