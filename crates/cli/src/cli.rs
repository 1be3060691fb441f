//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use miranda_core::{
    MIRANDA_SANS,
    config::{FAMILY_BASE, STATIC_DIR, VF_ITALIC_PATH, WEIGHT_LABEL},
    patch_italic_fonts, patch_static_fonts, patch_weight_label, resolve,
};

#[derive(Parser)]
#[command(name = "miranda-fonts")]
#[command(about = "Patch names, style bits and STAT of built Miranda Sans fonts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Patch every registered static font: names, style bits and a fresh STAT
    Static {
        #[arg(long, default_value = STATIC_DIR)]
        dir: PathBuf,
    },
    /// Patch the italic variable font and static italics: names, italic
    /// angle and STAT elision flags
    Italic {
        #[arg(long, default_value = VF_ITALIC_PATH)]
        vf: PathBuf,
        #[arg(long, default_value = STATIC_DIR)]
        static_dir: PathBuf,
        #[arg(long, default_value = FAMILY_BASE)]
        family: String,
    },
    /// Point the STAT weight values of one font at a neutral label
    StatLabel {
        path: PathBuf,
        #[arg(long, default_value = WEIGHT_LABEL)]
        label: String,
    },
    /// Show how filenames would be patched, without touching any file
    Resolve {
        #[arg(required = true)]
        filenames: Vec<String>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        debug!("running {self:?}");
        match self {
            Commands::Static { dir } => {
                patch_static_fonts(&dir, &MIRANDA_SANS)?;
            }
            Commands::Italic { vf, static_dir, family } => {
                patch_italic_fonts(&vf, &static_dir, &family)?;
            }
            Commands::StatLabel { path, label } => {
                patch_weight_label(&path, &label)?;
            }
            Commands::Resolve { filenames } => {
                for filename in filenames {
                    print!("{}", resolve(&filename, &MIRANDA_SANS));
                }
            }
        }
        Ok(())
    }
}
