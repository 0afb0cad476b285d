//! # Landscape Estimator GUI
//!
//! Desktop version of the site's "Instant Estimate" card, built with Iced.
//! The window renders with the built-in rates immediately; if a site URL is
//! configured, `/config.json` is fetched once in the background and merged in
//! when it arrives.
//!
//! ## Environment
//!
//! - `LANDSCAPE_CONFIG` - local override file applied at startup
//! - `LANDSCAPE_CONFIG_URL` - site base URL for the remote override
//! - `LANDSCAPE_GALLERY` - gallery folder (default `assets/gallery`)

mod outbound;
mod ui;

use std::path::{Path, PathBuf};

use iced::widget::{column, container, rule, stack, Space};
use iced::{Element, Length, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use landscape_core::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use landscape_core::gallery::collect_images;
use landscape_core::remote::{config_url, fetch_override};
use landscape_core::{
    estimate, ConfigOverride, Enquiry, EstimateInput, EstimateResult, QuoteContext, SiteConfig,
};

const DEFAULT_GALLERY_DIR: &str = "assets/gallery";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Remote(String),
    /// Local file with the remote document layered on top
    FileAndRemote(PathBuf, String),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "Built-in rates"),
            ConfigSource::File(path) => write!(f, "Rates from {}", path.display()),
            ConfigSource::Remote(url) => write!(f, "Rates from {}", url),
            ConfigSource::FileAndRemote(path, url) => {
                write!(f, "Rates from {} + {}", path.display(), url)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Configuration
    ConfigFetched(String, Option<ConfigOverride>),
    LoadConfigFile,

    // Estimate form
    ProjectSelected(ProjectType),
    TierSelected(MaterialTier),
    AccessSelected(SiteAccess),
    WasteSelected(WasteLevel),
    LengthChanged(String),
    WidthChanged(String),
    NotesChanged(String),

    // Enquiry form
    NameChanged(String),
    PostcodeChanged(String),
    EmailChanged(String),
    PhoneChanged(String),

    // Outbound actions
    CopySummary,
    OpenWhatsApp,
    OpenEmail,
    Call,

    // Gallery
    ChooseGalleryFolder,
    OpenLightbox(PathBuf),
    CloseLightbox,

    // Settings
    ToggleSettingsMenu,
    ToggleDarkMode,
}

pub struct App {
    /// Defaults, then the file layer, then the remote layer
    pub config: SiteConfig,
    pub config_source: ConfigSource,
    pub file_override: Option<(PathBuf, ConfigOverride)>,
    pub remote_override: Option<(String, ConfigOverride)>,

    pub project: ProjectType,
    pub tier: MaterialTier,
    pub access: SiteAccess,
    pub waste: WasteLevel,
    /// Raw field text; parsed on every render
    pub length: String,
    pub width: String,

    pub enquiry: Enquiry,

    pub gallery_dir: PathBuf,
    pub gallery: Vec<PathBuf>,
    pub lightbox: Option<PathBuf>,

    pub status: String,
    pub settings_menu_open: bool,
    pub dark_mode: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let gallery_dir = std::env::var_os("LANDSCAPE_GALLERY")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GALLERY_DIR));

        let mut app = App::with_defaults();
        app.load_gallery(gallery_dir);
        if let Some(path) = std::env::var_os("LANDSCAPE_CONFIG").map(PathBuf::from) {
            app.load_config_file(&path);
        }

        let task = match std::env::var("LANDSCAPE_CONFIG_URL") {
            Ok(base) if !base.trim().is_empty() => {
                let url = config_url(&base);
                app.status = format!("Fetching {}", url);
                Task::perform(
                    async move {
                        let over = fetch_override(&url).await;
                        (url, over)
                    },
                    |(url, over)| Message::ConfigFetched(url, over),
                )
            }
            _ => Task::none(),
        };

        (app, task)
    }

    /// Built-in rates, the default job and an empty gallery
    fn with_defaults() -> Self {
        App {
            config: SiteConfig::default(),
            config_source: ConfigSource::Defaults,
            file_override: None,
            remote_override: None,
            project: ProjectType::default(),
            tier: MaterialTier::default(),
            access: SiteAccess::default(),
            waste: WasteLevel::default(),
            length: "4".to_string(),
            width: "3".to_string(),
            enquiry: Enquiry::default(),
            gallery_dir: PathBuf::new(),
            gallery: Vec::new(),
            lightbox: None,
            status: "Ready".to_string(),
            settings_menu_open: false,
            dark_mode: false,
        }
    }

    fn title(&self) -> String {
        format!("{} - Instant Estimate", self.config.brand.name)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Current form values as an estimate input
    pub fn input(&self) -> EstimateInput {
        EstimateInput::from_text(&self.length, &self.width)
            .with_project(self.project)
            .with_tier(self.tier)
            .with_access(self.access)
            .with_waste(self.waste)
    }

    pub fn result(&self) -> EstimateResult {
        estimate(&self.config.pricing, &self.input())
    }

    fn load_gallery(&mut self, dir: PathBuf) {
        match collect_images(&dir) {
            Ok(images) => self.gallery = images,
            Err(e) => {
                tracing::warn!(error = %e, "could not read gallery folder");
                self.gallery.clear();
                self.status = format!("Gallery unavailable: {}", e);
            }
        }
        self.gallery_dir = dir;
    }

    fn with_quote<T>(&self, f: impl FnOnce(&QuoteContext<'_>) -> T) -> T {
        let input = self.input();
        let result = estimate(&self.config.pricing, &input);
        let quote = QuoteContext::new(&self.config.brand, &input, &result, &self.enquiry);
        f(&quote)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigFetched(url, Some(over)) => {
                self.remote_override = Some((url, over));
                self.rebuild_config();
                self.status = "Rates updated".to_string();
            }
            Message::ConfigFetched(_, None) => {
                // Keep whatever is loaded; the estimate already shows
                self.status = "Ready".to_string();
            }
            Message::LoadConfigFile => {
                self.settings_menu_open = false;
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Site config", &["json"])
                    .pick_file()
                {
                    self.load_config_file(&path);
                }
            }

            Message::ProjectSelected(project) => self.project = project,
            Message::TierSelected(tier) => self.tier = tier,
            Message::AccessSelected(access) => self.access = access,
            Message::WasteSelected(waste) => self.waste = waste,
            Message::LengthChanged(value) => self.length = value,
            Message::WidthChanged(value) => self.width = value,
            Message::NotesChanged(value) => self.enquiry.notes = value,

            Message::NameChanged(value) => self.enquiry.name = value,
            Message::PostcodeChanged(value) => self.enquiry.postcode = value,
            Message::EmailChanged(value) => self.enquiry.email = value,
            Message::PhoneChanged(value) => self.enquiry.phone = value,

            Message::CopySummary => {
                let summary = self.with_quote(|quote| quote.summary_text());
                self.status = "Summary copied to clipboard".to_string();
                return iced::clipboard::write(summary);
            }
            Message::OpenWhatsApp => {
                let link = self.with_quote(|quote| quote.whatsapp_link());
                self.open_link(&link, "WhatsApp");
            }
            Message::OpenEmail => {
                let link = self.with_quote(|quote| quote.mailto_link());
                self.open_link(&link, "email");
            }
            Message::Call => {
                let link = self.with_quote(|quote| quote.tel_link());
                self.open_link(&link, "phone");
            }

            Message::ChooseGalleryFolder => {
                self.settings_menu_open = false;
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    self.load_gallery(dir);
                    self.status = format!("{} gallery image(s)", self.gallery.len());
                }
            }
            Message::OpenLightbox(path) => self.lightbox = Some(path),
            Message::CloseLightbox => self.lightbox = None,

            Message::ToggleSettingsMenu => self.settings_menu_open = !self.settings_menu_open,
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                self.settings_menu_open = false;
            }
        }
        Task::none()
    }

    fn load_config_file(&mut self, path: &Path) {
        match ConfigOverride::from_file(path) {
            Ok(over) => {
                self.file_override = Some((path.to_path_buf(), over));
                self.rebuild_config();
                self.status = match &self.remote_override {
                    Some((url, _)) => format!("Loaded {} (rates from {} still apply on top)", path.display(), url),
                    None => format!("Loaded {}", path.display()),
                };
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config file rejected");
                self.status = format!("Config not loaded: {}", e);
            }
        }
    }

    /// Re-apply every config layer over the built-in defaults
    fn rebuild_config(&mut self) {
        let mut config = SiteConfig::default();
        if let Some((_, over)) = &self.file_override {
            config = config.merged(over.clone());
        }
        if let Some((_, over)) = &self.remote_override {
            config = config.merged(over.clone());
        }
        self.config = config;
        self.config_source = match (&self.file_override, &self.remote_override) {
            (None, None) => ConfigSource::Defaults,
            (Some((path, _)), None) => ConfigSource::File(path.clone()),
            (None, Some((url, _))) => ConfigSource::Remote(url.clone()),
            (Some((path, _)), Some((url, _))) => ConfigSource::FileAndRemote(path.clone(), url.clone()),
        };
    }

    fn open_link(&mut self, link: &str, what: &str) {
        match outbound::open_url(link) {
            Ok(()) => self.status = format!("Opening {}", what),
            Err(e) => {
                tracing::warn!(error = %e, "could not launch {}", what);
                self.status = format!("Could not open {}: {}", what, e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::header::view_header(&self.config.brand, self.settings_menu_open);

        let body = iced::widget::row![
            ui::estimate_form::view(self),
            Space::new().width(15),
            ui::estimate_panel::view(self.input(), self.result()),
        ]
        .height(Length::Shrink);

        let content = column![
            header,
            rule::horizontal(1),
            iced::widget::scrollable(
                column![
                    body,
                    Space::new().height(20),
                    ui::gallery_panel::view(&self.gallery_dir, &self.gallery),
                    Space::new().height(20),
                    ui::enquiry_form::view(&self.enquiry),
                    Space::new().height(20),
                    ui::status_bar::view_footer(&self.config.brand),
                ]
                .padding(10)
            )
            .height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.config_source, &self.status),
        ]
        .padding(8);

        let base: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.settings_menu_open {
            return stack![
                base,
                container(ui::header::view_settings_menu(self.dark_mode))
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .padding(iced::Padding {
                        top: 48.0,
                        right: 16.0,
                        bottom: 0.0,
                        left: 0.0,
                    }),
            ]
            .into();
        }

        match &self.lightbox {
            Some(path) => stack![
                base,
                ui::lightbox::view_backdrop(),
                ui::lightbox::view_lightbox(path),
            ]
            .into(),
            None => base,
        }
    }
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("landscape_core=info,landscape_gui=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> iced::Result {
    init_logger();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1100.0, 820.0))
        .run()
}
