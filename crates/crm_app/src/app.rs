use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use crm_core::{
    calendar::{self, relative_label},
    format_currency, format_phone, resolve_config,
    follow_up::DigestEntry,
    lookup::{ActivityType, FollowUpStatus, LeadPriority, LeadStage},
    display_label, DisplayConfig, Export, FollowUpDigest, LeadBoard, Lookup, Temperature,
    Urgency,
};
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub(crate) input: Option<PathBuf>,
    pub(crate) today: Option<NaiveDate>,
    pub(crate) upcoming_limit: usize,
    pub(crate) display: DisplayConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            display: DisplayConfig::from_env(),
            ..Self::default()
        };
        if let Ok(path) = std::env::var("CRM_INPUT") {
            if !path.trim().is_empty() {
                config.input = Some(PathBuf::from(path));
            }
        }
        if let Ok(raw) = std::env::var("CRM_TODAY") {
            let today = calendar::parse_temporal_target(&raw)
                .with_context(|| format!("CRM_TODAY `{raw}` is not a date"))?;
            config.today = Some(today);
        }
        if let Ok(limit) = std::env::var("CRM_UPCOMING_LIMIT") {
            if let Ok(value) = limit.trim().parse::<usize>() {
                config.upcoming_limit = value;
            }
        }
        Ok(config)
    }

    /// The first positional argument, when present, names the export file.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        if let Some(path) = args.into_iter().find(|arg| !arg.starts_with('-')) {
            self.input = Some(PathBuf::from(path));
        }
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(calendar::today)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            today: None,
            upcoming_limit: 10,
            display: DisplayConfig::default(),
        }
    }
}

pub fn run(config: AppConfig) -> Result<()> {
    let input = config
        .input
        .as_deref()
        .ok_or_else(|| anyhow!("no export given; pass a path or set CRM_INPUT"))?;
    let export = load_export(input)?;
    let today = config.today();
    info!(
        follow_ups = export.follow_ups.len(),
        leads = export.leads.len(),
        %today,
        "export loaded"
    );
    print!("{}", render_report(&export, today, &config));
    Ok(())
}

pub fn load_export(path: &Path) -> Result<Export> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Export::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing export {}", path.display()))
}

pub fn render_report(export: &Export, today: NaiveDate, config: &AppConfig) -> String {
    let digest = FollowUpDigest::build(&export.follow_ups, &today);
    let board = LeadBoard::build(&export.leads, &today);
    debug!(
        open = digest.open_count(),
        attention = digest.needs_attention(),
        active_leads = board.active.len(),
        "report built"
    );

    let mut out = String::new();
    render_digest(&mut out, &digest, config);
    out.push('\n');
    render_board(&mut out, &board, config);
    out
}

fn render_digest(out: &mut String, digest: &FollowUpDigest, config: &AppConfig) {
    let _ = writeln!(
        out,
        "Follow-ups as of {}",
        digest.today.format("%A, %B %d, %Y")
    );
    for urgency in Urgency::ALL {
        let bucket = digest.bucket(urgency);
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(out, "  {} ({})", urgency.label(), bucket.len());
        let shown = if urgency == Urgency::Upcoming {
            config.upcoming_limit.min(bucket.len())
        } else {
            bucket.len()
        };
        for entry in &bucket[..shown] {
            let _ = writeln!(out, "    - {}", describe_entry(entry, digest.today));
        }
        if shown < bucket.len() {
            let _ = writeln!(out, "    … {} more", bucket.len() - shown);
        }
    }
    if !digest.unscheduled.is_empty() {
        let _ = writeln!(out, "  Unscheduled ({})", digest.unscheduled.len());
        for item in &digest.unscheduled {
            let _ = writeln!(
                out,
                "    - {} · {}",
                item.lead_name,
                display_label::<FollowUpStatus>(&item.status)
            );
        }
    }
    let _ = writeln!(out, "  Closed: {}", digest.closed);
}

fn describe_entry(entry: &DigestEntry, today: NaiveDate) -> String {
    let activity = entry
        .follow_up
        .activity_type
        .as_deref()
        .map(display_label::<ActivityType>)
        .unwrap_or_else(|| "Follow-up".to_string());
    format!(
        "{} · {} · {} ({})",
        entry.follow_up.lead_name,
        activity,
        relative_label(entry.date, today),
        entry.date
    )
}

fn render_board(out: &mut String, board: &LeadBoard, config: &AppConfig) {
    let _ = writeln!(out, "Leads");
    let counts = Temperature::ALL
        .iter()
        .map(|t| format!("{} {}", t.label(), board.count(*t)))
        .collect::<Vec<_>>()
        .join(" · ");
    let _ = writeln!(out, "  {} · Closed {}", counts, board.closed);
    let _ = writeln!(
        out,
        "  Pipeline {}",
        format_currency(Some(board.pipeline_value), &config.display.currency)
    );

    for entry in &board.active {
        let lead = &entry.lead;
        let mut parts = vec![format!(
            "[{} {}] {}",
            entry.temperature.label(),
            lead.score,
            lead.name
        )];
        parts.push(
            resolve_config::<LeadStage>(Some(&lead.stage))
                .map(|stage| stage.label.to_string())
                .unwrap_or_else(|| lead.stage.clone()),
        );
        match (lead.entity(), lead.entity_type.as_deref()) {
            (Some(entity), _) => parts.push(entity.descriptor().abbreviation.to_string()),
            (None, Some(raw)) if !raw.trim().is_empty() => parts.push(raw.to_string()),
            _ => {}
        }
        if let Some(raw) = lead.priority.as_deref() {
            parts.push(
                resolve_config::<LeadPriority>(Some(raw))
                    .map(|priority| priority.label.to_string())
                    .unwrap_or_else(|| raw.to_string()),
            );
        }
        if let Some(phone) = lead.phone.as_deref() {
            parts.push(format_phone(phone, &config.display.phone));
        }
        if let Some(urgency) = entry.follow_up {
            parts.push(format!("follow-up {}", urgency.label()));
        }
        let _ = writeln!(out, "    - {}", parts.join(" · "));
    }
}
