//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use landscape_core::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use landscape_core::{parse_dimension, Enquiry, EstimateInput};

#[derive(Parser, Debug)]
#[command(name = "landscape")]
#[command(version)]
#[command(about = "Instant landscaping estimates, quote links and gallery listing")]
pub struct Cli {
    /// Local config override (JSON, same shape as /config.json)
    #[arg(long, global = true, env = "LANDSCAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Site base URL to fetch /config.json from, applied after --config
    #[arg(long, global = true, env = "LANDSCAPE_CONFIG_URL")]
    pub config_url: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Estimate cost and duration for a job")]
    Estimate {
        #[command(flatten)]
        job: JobArgs,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Print WhatsApp, email and phone links for an enquiry")]
    Links {
        #[command(flatten)]
        job: JobArgs,

        #[command(flatten)]
        contact: ContactArgs,
    },

    #[command(about = "Print the plain-text project summary")]
    Summary {
        #[command(flatten)]
        job: JobArgs,
    },

    #[command(about = "Print the merged rate configuration as JSON")]
    Rates,

    #[command(about = "List gallery images in a folder")]
    Gallery {
        /// Folder holding jpg/jpeg/png/webp photos
        #[arg(default_value = "assets/gallery")]
        dir: PathBuf,
    },
}

/// Job description shared by estimate, links and summary
#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// patio, shedbase, steps, raisedbeds or path
    #[arg(long, default_value = "patio", value_parser = ProjectType::from_key)]
    pub project: ProjectType,

    /// basic, mid or premium
    #[arg(long, default_value = "mid", value_parser = MaterialTier::from_key)]
    pub tier: MaterialTier,

    /// easy, normal or tricky
    #[arg(long, default_value = "normal", value_parser = SiteAccess::from_key)]
    pub access: SiteAccess,

    /// none, some or heavy
    #[arg(long, default_value = "some", value_parser = WasteLevel::from_key)]
    pub waste: WasteLevel,

    /// Length in metres; unreadable values count as 0
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    pub length: String,

    /// Width in metres; unreadable values count as 0
    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    pub width: String,

    /// Extra notes (stone type, access, skip on drive, ...)
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl JobArgs {
    pub fn to_input(&self) -> EstimateInput {
        EstimateInput::new(parse_dimension(&self.length), parse_dimension(&self.width))
            .with_project(self.project)
            .with_tier(self.tier)
            .with_access(self.access)
            .with_waste(self.waste)
    }
}

/// Customer details for the enquiry links
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub postcode: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,
}

/// Combine job notes and contact details into an enquiry
pub fn enquiry(job: &JobArgs, contact: Option<&ContactArgs>) -> Enquiry {
    let contact = contact.cloned().unwrap_or_default();
    Enquiry {
        name: contact.name,
        postcode: contact.postcode,
        email: contact.email,
        phone: contact.phone,
        notes: job.notes.clone(),
    }
}
