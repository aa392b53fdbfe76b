//! # job-portal
//!
//! Interactive terminal front end. Each command drives one of the view
//! controllers and prints what the screen would show. Type `help` for the
//! command list.

use clap::Parser;
use job_portal::config::PortalConfig;
use job_portal::lifecycle::{setup_tracing, PortalSystem};
use job_portal::model::{ApplicationId, ApplicationStatus, JobStatus, Role};
use job_portal::routes::{resolve, Resolution, View};
use job_portal::views::dashboard::JobSeekerScreen;
use job_portal::views::jobs::ApplyOutcome;
use job_portal::views::{
    footer, EmployerDashboardView, HomeView, JobDetailsView, JobManagementView, JobSeekerDashboardView,
    JobsView, LoginView, Navigation, NavbarView, PortalContext, ProfileView, SignupView,
};
use job_portal::PortalError;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Terminal client for the job portal.
///
/// Flags override the matching `JOBPORTAL_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "job-portal", version)]
struct Args {
    /// Base URL of the portal backend [env: JOBPORTAL_API_URL]
    #[arg(long)]
    api_url: Option<String>,

    /// File holding the bearer token between runs [env: JOBPORTAL_TOKEN_FILE]
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// Request timeout in seconds [env: JOBPORTAL_REQUEST_TIMEOUT]
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to open on startup.
    #[arg(default_value = "/")]
    path: String,
}

impl Args {
    /// The flag standing in for an environment variable, if it was given.
    fn flag(&self, name: &str) -> Option<String> {
        match name {
            "JOBPORTAL_API_URL" => self.api_url.clone(),
            "JOBPORTAL_TOKEN_FILE" => self.token_file.as_ref().map(|p| p.display().to_string()),
            "JOBPORTAL_REQUEST_TIMEOUT" => self.timeout.map(|secs| secs.to_string()),
            _ => None,
        }
    }
}

const HELP: &str = "\
open <path>                                   go to a page (/, /apply/job, /jobs, /jobs/:id, /dashboard, /profile, ...)
login <email> <password>                      sign in
signup <name> <email> <password> [role]       create an account (role: Applicant or Recruiter)
logout                                        sign out
search [term]                                 filter listings by title or company
category [name]                               filter listings by category
apply <job id>                                apply to a listing
post <title>|<company>|<location>|<salary>|<description>
edit <job id> <title>|<company>|<location>|<salary>|<description>|<Open|Closed>
delete <job id>                               remove a listing
profile [field=value ...]                     show the profile, or edit and save it
review <application id> <pending|accepted|rejected>
dark                                          toggle dark mode
help                                          this list
quit                                          exit";

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    dotenvy::dotenv().ok();
    setup_tracing();
    let args = Args::parse();

    let config = PortalConfig::from_lookup(|name| args.flag(name).or_else(|| std::env::var(name).ok()))?;

    let system = PortalSystem::new(config)?;
    {
        let mut shell = Shell::new(system.context()).await?;
        shell.ctx.session.restore().await?;
        shell.open(&args.path).await;
        shell.run().await?;
    }
    system.shutdown().await
}

struct Shell {
    ctx: PortalContext,
    navbar: NavbarView,
    jobs: JobsView,
    management: JobManagementView,
    profile: ProfileView,
}

impl Shell {
    async fn new(ctx: PortalContext) -> Result<Self, PortalError> {
        Ok(Self {
            navbar: NavbarView::new(&ctx).await?,
            jobs: JobsView::new(&ctx),
            management: JobManagementView::new(&ctx),
            profile: ProfileView::new(&ctx),
            ctx,
        })
    }

    async fn run(&mut self) -> Result<(), PortalError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("Type `help` for commands.");
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
            let rest = rest.trim();
            match command {
                "quit" | "exit" => break,
                "help" => println!("{HELP}"),
                "open" => self.open(if rest.is_empty() { "/" } else { rest }).await,
                "login" => self.login(rest).await,
                "signup" => self.signup(rest).await,
                "logout" => {
                    let navigation = self.navbar.logout().await;
                    self.follow(navigation).await;
                }
                "search" => {
                    self.jobs.search_term = rest.to_string();
                    self.print_listings();
                }
                "category" => {
                    self.jobs.selected_category = rest.to_string();
                    self.print_listings();
                }
                "apply" => self.apply(rest).await,
                "post" => self.post(rest).await,
                "edit" => self.edit(rest).await,
                "delete" => {
                    if self.management.delete(rest).await {
                        println!("Deleted {rest}.");
                    }
                    self.print_management();
                }
                "profile" => self.edit_profile(rest).await,
                "review" => self.review(rest).await,
                "dark" => match self.navbar.toggle_dark_mode().await {
                    Ok(()) => println!("Dark mode toggled."),
                    Err(e) => println!("{e}"),
                },
                other => println!("Unknown command `{other}`. Type `help`."),
            }
            if self.navbar.sync() {
                self.print_navbar();
            }
        }
        info!("Input closed");
        Ok(())
    }

    async fn follow(&mut self, navigation: Navigation) {
        if !navigation.delay.is_zero() {
            tokio::time::sleep(navigation.delay).await;
        }
        self.open(&navigation.to).await;
    }

    /// Resolves a path through the guards, following redirects.
    async fn open(&mut self, path: &str) {
        let mut path = path.to_string();
        for _ in 0..5 {
            let state = match self.ctx.session.state().await {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "Session store unavailable");
                    return;
                }
            };
            match resolve(&path, &state) {
                Resolution::Redirect(to) => {
                    println!("-> {to}");
                    path = to;
                }
                Resolution::Render(view) => {
                    println!("== {path} ==");
                    self.render(view).await;
                    return;
                }
            }
        }
    }

    async fn render(&mut self, view: View) {
        match view {
            View::Home => {
                if let Ok(screen) = HomeView::new(&self.ctx).render().await {
                    if screen.show_public_nav {
                        println!("JobPortal  [Explore More -> /jobs]");
                    }
                    println!("Find Your Dream Job Today\nFeatured Jobs:");
                    for job in screen.featured {
                        println!("  {} at {} ({}) - {}", job.title, job.company, job.location, job.description);
                    }
                }
                println!("{}", footer::copyright());
            }
            View::Jobs => {
                self.jobs.load().await;
                if let Some(error) = self.jobs.error() {
                    println!("{error}");
                }
                self.print_listings();
            }
            View::JobDetails(id) => match JobDetailsView::new(&self.ctx, id).load().await {
                Ok(screen) => {
                    let job = &screen.job;
                    println!("{} - {} ({})", job.title, job.company, job.location);
                    if let Some(posted) = &job.posted_date {
                        println!("Posted {posted}");
                    }
                    println!("{}", job.description);
                    if screen.can_apply {
                        println!("[apply {}]", job.id);
                    }
                }
                Err(message) => println!("{message}"),
            },
            View::JobManagement => {
                if let Some(navigation) = self.management.mount().await {
                    Box::pin(self.follow(navigation)).await;
                    return;
                }
                self.print_management();
            }
            View::JobSeekerDashboard => match JobSeekerDashboardView::new(&self.ctx).load().await {
                Ok(JobSeekerScreen::AccessDenied) => {
                    println!("{}", job_portal::views::dashboard::ACCESS_DENIED)
                }
                Ok(JobSeekerScreen::Applications { greeting, rows }) => {
                    println!("Applicant Dashboard\n{greeting}\nYour Applications");
                    if rows.is_empty() {
                        println!("  {}", job_portal::views::dashboard::NO_APPLICATIONS);
                    }
                    for row in rows {
                        println!(
                            "  {} | {} | {} | {} | {}",
                            row.title, row.company, row.location, row.status, row.applied_date
                        );
                    }
                }
                Err(message) => println!("{message}"),
            },
            View::EmployerDashboard => match EmployerDashboardView::new(&self.ctx).load().await {
                Ok(screen) => {
                    let stats = screen.stats;
                    println!("Employer Dashboard\n{}", screen.greeting);
                    println!(
                        "Active Jobs: {}  Total Applications: {}  Pending Review: {}  Hired: {}",
                        stats.active_jobs, stats.total_applications, stats.pending_review, stats.hired
                    );
                    for (category, count) in &screen.categories {
                        println!("  {category}: {count}");
                    }
                    println!("Recent Applications");
                    for app in &screen.recent {
                        println!(
                            "  {} | {} | {} | {} | {}",
                            app.application_id, app.job_title, app.applicant, app.applied_date, app.status
                        );
                    }
                }
                Err(message) => println!("{message}"),
            },
            View::Login => println!("Log in with: login <email> <password>"),
            View::Signup => println!("Sign up with: signup <name> <email> <password> [role]"),
            View::Profile => {
                self.profile.load().await;
                self.print_profile();
            }
        }
    }

    async fn login(&mut self, rest: &str) {
        let mut parts = rest.split_whitespace();
        let mut view = LoginView::new(&self.ctx);
        view.email = parts.next().unwrap_or_default().to_string();
        view.password = parts.next().unwrap_or_default().to_string();
        match view.submit().await {
            Some(navigation) => self.follow(navigation).await,
            None => println!("{}", view.error().unwrap_or_default()),
        }
    }

    async fn signup(&mut self, rest: &str) {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let mut view = SignupView::new(&self.ctx);
        view.name = parts.first().copied().unwrap_or_default().to_string();
        view.email = parts.get(1).copied().unwrap_or_default().to_string();
        view.password = parts.get(2).copied().unwrap_or_default().to_string();
        if let Some(role) = parts.get(3) {
            match role.parse::<Role>() {
                Ok(role) => view.role = role,
                Err(e) => {
                    println!("{e}");
                    return;
                }
            }
        }
        match view.submit().await {
            Some(navigation) => {
                println!("{}", view.notice().unwrap_or_default());
                self.follow(navigation).await;
            }
            None => println!("{}", view.error().unwrap_or_default()),
        }
    }

    async fn apply(&mut self, job_id: &str) {
        match self.jobs.apply(job_id).await {
            ApplyOutcome::LoginRequired(navigation) => self.follow(navigation).await,
            _ => println!("{}", self.jobs.message().unwrap_or_default()),
        }
    }

    async fn post(&mut self, rest: &str) {
        let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
        self.management.cancel_edit();
        let form = &mut self.management.form;
        form.title = fields.first().copied().unwrap_or_default().to_string();
        form.company = fields.get(1).copied().unwrap_or_default().to_string();
        form.location = fields.get(2).copied().unwrap_or_default().to_string();
        form.salary = fields.get(3).copied().unwrap_or_default().to_string();
        form.description = fields.get(4).copied().unwrap_or_default().to_string();
        self.management.submit().await;
        self.print_management();
    }

    async fn edit(&mut self, rest: &str) {
        let (id, fields) = rest.split_once(' ').unwrap_or((rest, ""));
        if !self.management.edit(id) {
            println!("No listing with id {id}. Open /jobs first.");
            return;
        }
        let fields: Vec<&str> = fields.split('|').map(str::trim).collect();
        let form = &mut self.management.form;
        let slots = [
            &mut form.title,
            &mut form.company,
            &mut form.location,
            &mut form.salary,
            &mut form.description,
        ];
        for (slot, value) in slots.into_iter().zip(&fields) {
            if !value.is_empty() {
                *slot = value.to_string();
            }
        }
        if let Some(status) = fields.get(5).filter(|s| !s.is_empty()) {
            match status.parse::<JobStatus>() {
                Ok(status) => form.status = status,
                Err(e) => {
                    println!("{e}");
                    return;
                }
            }
        }
        self.management.submit().await;
        self.print_management();
    }

    async fn edit_profile(&mut self, rest: &str) {
        self.profile.load().await;
        if rest.is_empty() {
            self.print_profile();
            return;
        }
        self.profile.begin_edit();
        for pair in rest.split_whitespace() {
            let Some((field, value)) = pair.split_once('=') else {
                println!("Expected field=value, got `{pair}`");
                return;
            };
            let form = &mut self.profile.form;
            let slot = match field {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "age" => &mut form.age,
                "gender" => &mut form.gender,
                "role" => &mut form.role,
                other => {
                    println!("Unknown profile field `{other}`");
                    return;
                }
            };
            *slot = value.to_string();
        }
        if self.profile.submit().await {
            println!("Profile updated.");
        }
        self.print_profile();
    }

    async fn review(&mut self, rest: &str) {
        let mut parts = rest.split_whitespace();
        let id = parts.next().unwrap_or_default().parse::<ApplicationId>();
        let status = parts.next().unwrap_or_default().parse::<ApplicationStatus>();
        let (id, status) = match (id, status) {
            (Ok(id), Ok(status)) => (id, status),
            (Err(e), _) | (_, Err(e)) => {
                println!("{e}");
                return;
            }
        };
        match EmployerDashboardView::new(&self.ctx).review(id, status).await {
            Ok(previous) => println!("{id}: {} -> {}", previous.label(), status.label()),
            Err(message) => println!("{message}"),
        }
    }

    fn print_navbar(&self) {
        match self.navbar.render() {
            Some(screen) => {
                let links: Vec<String> = screen
                    .links
                    .iter()
                    .map(|link| format!("{} ({})", link.label, link.to))
                    .collect();
                let theme = if screen.is_dark_mode { "dark" } else { "light" };
                println!("[JobPortal] {} | {} | {theme}", links.join(" | "), screen.display_name);
            }
            None => println!("[JobPortal]"),
        }
    }

    fn print_listings(&self) {
        if let Some(message) = self.jobs.message() {
            println!("{message}");
        }
        let categories = self.jobs.categories();
        if !categories.is_empty() {
            println!("Categories: {}", categories.join(", "));
        }
        for job in self.jobs.filtered() {
            let applied = if self.jobs.has_applied(&job.id) { " (applied)" } else { "" };
            println!(
                "  [{}] {} at {} - {} {}{applied}",
                job.id,
                job.title,
                job.company,
                job.location,
                job.job_type.as_deref().unwrap_or_default()
            );
        }
    }

    fn print_management(&self) {
        if let Some(error) = self.management.error() {
            println!("{error}");
        }
        println!("Job Management Dashboard ({})", self.management.form_title());
        if self.management.jobs().is_empty() {
            println!("  {}", job_portal::views::job_management::EMPTY_LIST);
        }
        for entry in self.management.jobs() {
            let job = &entry.job;
            println!(
                "  [{}] {} | {} | {} | ${} | {} | {} applicants",
                job.id, job.title, job.company, job.location, job.salary, job.status, entry.applicant_count
            );
        }
    }

    fn print_profile(&self) {
        if let Some(error) = self.profile.error() {
            println!("{error}");
        }
        match self.profile.card() {
            Ok(card) => println!(
                "Your Profile\n  ({}) {} - {}\n  Email: {}\n  Phone: {}\n  Age: {}\n  Gender: {}",
                card.initial, card.name, card.role, card.email, card.phone, card.age, card.gender
            ),
            Err(message) => println!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_portal::error::ConfigError;
    use std::time::Duration;

    fn config(argv: &[&str], env: &[(&str, &str)]) -> Result<PortalConfig, ConfigError> {
        let args = Args::parse_from(argv);
        PortalConfig::from_lookup(|name| {
            args.flag(name).or_else(|| {
                env.iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
            })
        })
    }

    #[test]
    fn test_flags_override_environment() {
        let config = config(
            &["job-portal", "--api-url", "https://flag.example.com", "--timeout", "5"],
            &[
                ("JOBPORTAL_API_URL", "https://env.example.com"),
                ("JOBPORTAL_TOKEN_FILE", "/tmp/env.json"),
                ("JOBPORTAL_REQUEST_TIMEOUT", "60"),
            ],
        )
        .unwrap();
        assert_eq!(config.api_url, "https://flag.example.com");
        assert_eq!(config.token_file, PathBuf::from("/tmp/env.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_timeout_flag_is_rejected() {
        let err = config(&["job-portal", "--timeout", "0"], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { value, .. } if value == "0"));
    }
}
